//! Transaction outputs.

use quill_types::{AssetId, Fixed64, ProgramHash};
use serde::{Deserialize, Serialize};

/// Locks `value` units of `asset_id` to the authorization condition `program_hash`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub asset_id: AssetId,
    pub value: Fixed64,
    pub program_hash: ProgramHash,
}
