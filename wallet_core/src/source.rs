//! Seams to the wallet collaborator: where unspent outputs come from and who signs.

use std::collections::BTreeMap;

use quill_transactions::TxInput;
use quill_types::{AssetId, Fixed64, ProgramHash, TxId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::account::Account;
use crate::signing::SigningContext;

/// A spendable output as reported by the wallet: a read-only snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutputRecord {
    pub tx_id: TxId,
    pub index: u16,
    pub value: Fixed64,
}

impl UnspentOutputRecord {
    pub fn new(tx_id: TxId, index: u16, value: Fixed64) -> Self {
        Self { tx_id, index, value }
    }

    /// The input that would spend this output.
    pub fn outpoint(&self) -> TxInput {
        TxInput::new(self.tx_id, self.index)
    }
}

/// Unspent outputs of one owner, grouped by asset, each list in source order.
pub type UnspentSet = BTreeMap<AssetId, Vec<UnspentOutputRecord>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("unspent outputs unavailable for {owner}: {reason}")]
    Unavailable { owner: ProgramHash, reason: String },
}

/// Supplies the unspent outputs an account may spend.
///
/// Calls are blocking; no timeout is imposed here.
pub trait UnspentSource {
    fn unspent(&self, owner: &ProgramHash) -> Result<UnspentSet, SourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    #[error("no signing key for {0}")]
    KeyUnavailable(ProgramHash),

    #[error("signature for {0} does not verify")]
    InvalidSignature(ProgramHash),

    #[error("no authorization program for required signer {0}")]
    Incomplete(ProgramHash),

    #[error("signing capability unavailable: {0}")]
    Unavailable(String),

    #[error("transaction could not be encoded for signing")]
    Encoding,
}

/// A signing capability bound to one account.
pub trait Signer {
    /// The account this capability spends and issues for.
    fn account(&self) -> &Account;

    /// Add this capability's signatures to `ctx`.
    fn sign(&self, ctx: &mut SigningContext) -> Result<(), SignError>;
}
