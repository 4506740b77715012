//! Quill transaction types and their validation logic.
//!
//! Transaction types:
//! - **RegisterAsset**: declare a new asset and its total supply, bound to an issuer
//! - **IssueAsset**: mint units of a registered asset directly to outputs
//! - **TransferAsset**: spend unspent outputs into new outputs, conserving value
//!
//! A transaction is unsigned until its authorization programs are attached; see
//! [`Transaction::required_program_hashes`] for which programs it needs.

pub mod asset;
pub mod attribute;
pub mod error;
pub mod input;
pub mod output;
pub mod payload;
pub mod program;
pub mod validation;

pub use asset::{Asset, AssetType, RecordType};
pub use attribute::TxAttribute;
pub use error::TransactionError;
pub use input::TxInput;
pub use output::TxOutput;
pub use payload::{Payload, RegisterAsset};
pub use program::Program;

use std::collections::BTreeSet;

use quill_types::{AssetId, Fixed64, ProgramHash, PublicKey, TxId};
use serde::{Deserialize, Serialize};

/// The type tag of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    RegisterAsset,
    IssueAsset,
    TransferAsset,
}

/// A ledger transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub payload: Payload,
    pub attributes: Vec<TxAttribute>,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub programs: Vec<Program>,
}

/// Everything a signature covers: the transaction minus its programs.
#[derive(Serialize)]
struct SigningView<'a> {
    tx_type: TransactionType,
    payload: &'a Payload,
    attributes: &'a [TxAttribute],
    inputs: &'a [TxInput],
    outputs: &'a [TxOutput],
}

impl Transaction {
    /// A register transaction: no inputs, no outputs, issuance right bound to `controller`.
    pub fn register_asset(
        asset: Asset,
        amount: Fixed64,
        issuer: PublicKey,
        controller: ProgramHash,
    ) -> Self {
        Self {
            payload: Payload::RegisterAsset(RegisterAsset {
                asset,
                amount,
                issuer,
                controller,
            }),
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            programs: Vec::new(),
        }
    }

    /// An issue transaction minting `outputs`, authorized by `issuer`.
    pub fn issue_asset(outputs: Vec<TxOutput>, issuer: ProgramHash) -> Self {
        Self {
            payload: Payload::IssueAsset,
            attributes: vec![TxAttribute::Script(issuer)],
            inputs: Vec::new(),
            outputs,
            programs: Vec::new(),
        }
    }

    /// A transfer transaction spending `inputs` owned by `spender`.
    pub fn transfer_asset(
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        spender: ProgramHash,
    ) -> Self {
        Self {
            payload: Payload::TransferAsset,
            attributes: vec![TxAttribute::Script(spender)],
            inputs,
            outputs,
            programs: Vec::new(),
        }
    }

    pub fn tx_type(&self) -> TransactionType {
        match self.payload {
            Payload::RegisterAsset(_) => TransactionType::RegisterAsset,
            Payload::IssueAsset => TransactionType::IssueAsset,
            Payload::TransferAsset => TransactionType::TransferAsset,
        }
    }

    /// The bytes every authorization program signs.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        let view = SigningView {
            tx_type: self.tx_type(),
            payload: &self.payload,
            attributes: &self.attributes,
            inputs: &self.inputs,
            outputs: &self.outputs,
        };
        Ok(bincode::serialize(&view)?)
    }

    /// Transaction id: Blake2b-256 of the signing bytes. Programs do not affect it.
    pub fn hash(&self) -> Result<TxId, TransactionError> {
        Ok(quill_crypto::hash_transaction(&self.signing_bytes()?))
    }

    /// Program hashes that must each be satisfied by an attached program,
    /// deduplicated and in ascending order.
    pub fn required_program_hashes(&self) -> Vec<ProgramHash> {
        let mut hashes = BTreeSet::new();
        if let Payload::RegisterAsset(register) = &self.payload {
            hashes.insert(register.controller);
        }
        for attribute in &self.attributes {
            if let TxAttribute::Script(hash) = attribute {
                hashes.insert(*hash);
            }
        }
        hashes.into_iter().collect()
    }

    /// Replace the attached programs.
    pub fn set_programs(&mut self, programs: Vec<Program>) {
        self.programs = programs;
    }

    /// Whether every required program hash has a program attached.
    ///
    /// This is a presence check; [`validation::verify_programs`] checks signatures.
    pub fn is_signed(&self) -> bool {
        let attached: BTreeSet<ProgramHash> =
            self.programs.iter().map(Program::program_hash).collect();
        let required = self.required_program_hashes();
        !required.is_empty() && required.iter().all(|h| attached.contains(h))
    }

    /// Sum of output values for `asset_id`.
    pub fn output_total(&self, asset_id: &AssetId) -> Result<Fixed64, TransactionError> {
        Fixed64::checked_sum(
            self.outputs
                .iter()
                .filter(|o| &o.asset_id == asset_id)
                .map(|o| o.value),
        )
        .map_err(|_| TransactionError::Overflow)
    }

    /// Full encoding handed to the broadcast layer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
