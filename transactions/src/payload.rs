//! Type-specific transaction payloads.

use quill_types::{Fixed64, ProgramHash, PublicKey};
use serde::{Deserialize, Serialize};

use crate::asset::Asset;

/// Registers a new asset with a fixed total supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAsset {
    pub asset: Asset,
    /// Total supply that may ever be issued.
    pub amount: Fixed64,
    pub issuer: PublicKey,
    /// Program hash holding the right to issue the asset.
    pub controller: ProgramHash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    RegisterAsset(RegisterAsset),
    IssueAsset,
    TransferAsset,
}
