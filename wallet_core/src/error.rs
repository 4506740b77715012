use quill_crypto::{AddressError, ContractError};
use quill_transactions::{TransactionError, TxInput};
use quill_types::{AmountError, AssetId, Fixed64};
use thiserror::Error;

use crate::source::{SignError, SourceError};

/// Why a build operation produced no transaction.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("malformed amount: {input:?}")]
    MalformedAmount { input: String },

    #[error("amount out of range: {input:?}")]
    AmountOutOfRange { input: String },

    #[error("invalid address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("no outputs requested")]
    NoOutputsRequested,

    #[error("output {index} value {value} does not exceed the per-output fee {fee}")]
    FeeExceedsValue {
        index: usize,
        value: Fixed64,
        fee: Fixed64,
    },

    #[error("insufficient funds for asset {asset_id}: requested {requested}, available {available}")]
    InsufficientFunds {
        asset_id: AssetId,
        requested: Fixed64,
        available: Fixed64,
    },

    #[error("unspent output lookup failed: {0}")]
    AssetLookupFailed(#[source] SourceError),

    #[error("contract creation failed: {0}")]
    ContractCreationFailed(#[from] ContractError),

    #[error("signing failed: {0}")]
    SigningFailed(#[from] SignError),

    #[error("asset name must be 1..={max} bytes, got {len}")]
    InvalidAssetName { len: usize, max: usize },

    #[error("precision {requested} exceeds maximum {max}")]
    InvalidPrecision { requested: u8, max: u8 },

    #[error("outpoint {}:{} is reserved by another build", .0.refer_tx_id, .0.refer_output_index)]
    OutputReserved(TxInput),

    #[error("amount arithmetic overflow")]
    Arithmetic,

    #[error("assembled transaction is invalid: {0}")]
    Transaction(TransactionError),
}

impl From<AmountError> for BuildError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::Malformed { input } => Self::MalformedAmount { input },
            AmountError::OutOfRange { input } => Self::AmountOutOfRange { input },
            AmountError::Overflow => Self::Arithmetic,
        }
    }
}

impl From<TransactionError> for BuildError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::InvalidAssetName { len, max } => Self::InvalidAssetName { len, max },
            TransactionError::InvalidPrecision { requested, max } => {
                Self::InvalidPrecision { requested, max }
            }
            TransactionError::Overflow => Self::Arithmetic,
            other => Self::Transaction(other),
        }
    }
}
