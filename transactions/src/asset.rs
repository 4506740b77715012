//! Asset metadata: the immutable record a register transaction carries.

use quill_types::params::{MAX_ASSET_NAME_LEN, MAX_PRECISION};
use quill_types::Fixed64;
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// What kind of value an asset represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Token,
}

/// How balances of an asset are accounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    /// Balances are the sum of unspent outputs.
    Utxo,
}

/// An asset descriptor. Created once at registration, never modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub description: String,
    /// Decimal places the asset may be divided into (at most `MAX_PRECISION`).
    pub precision: u8,
    pub asset_type: AssetType,
    pub record_type: RecordType,
}

impl Asset {
    /// Build a token descriptor from a name and requested precision.
    ///
    /// The description mirrors the name. `max_precision` is clamped to
    /// `MAX_PRECISION`, so no configuration can admit values finer than the
    /// amount codec represents.
    pub fn token(name: &str, precision: u8, max_precision: u8) -> Result<Self, TransactionError> {
        if name.is_empty() || name.len() > MAX_ASSET_NAME_LEN {
            return Err(TransactionError::InvalidAssetName {
                len: name.len(),
                max: MAX_ASSET_NAME_LEN,
            });
        }
        let max = max_precision.min(MAX_PRECISION);
        if precision > max {
            return Err(TransactionError::InvalidPrecision {
                requested: precision,
                max,
            });
        }
        Ok(Self {
            name: name.to_string(),
            description: name.to_string(),
            precision,
            asset_type: AssetType::Token,
            record_type: RecordType::Utxo,
        })
    }

    /// Smallest raw step a value of this asset may take.
    pub fn raw_step(&self) -> i64 {
        10_i64.pow(u32::from(MAX_PRECISION.saturating_sub(self.precision)))
    }

    /// Whether `value` is non-negative and representable at this asset's precision.
    pub fn admits(&self, value: Fixed64) -> bool {
        value.raw() >= 0 && value.raw() % self.raw_step() == 0
    }
}
