//! Transaction inputs: references to previously created outputs.

use quill_types::TxId;
use serde::{Deserialize, Serialize};

/// Spends output `refer_output_index` of transaction `refer_tx_id`.
///
/// Ordering is by (transaction id, output index), which is the default order
/// candidates are selected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxInput {
    pub refer_tx_id: TxId,
    pub refer_output_index: u16,
}

impl TxInput {
    pub fn new(refer_tx_id: TxId, refer_output_index: u16) -> Self {
        Self {
            refer_tx_id,
            refer_output_index,
        }
    }
}
