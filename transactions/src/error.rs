use quill_types::{Fixed64, ProgramHash};
use thiserror::Error;

use crate::TransactionType;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("asset name must be 1..={max} bytes, got {len}")]
    InvalidAssetName { len: usize, max: usize },

    #[error("precision {requested} exceeds maximum {max}")]
    InvalidPrecision { requested: u8, max: u8 },

    #[error("{tx_type:?} transaction has a malformed shape: {reason}")]
    Malformed {
        tx_type: TransactionType,
        reason: &'static str,
    },

    #[error("output {index} has negative value {value}")]
    NegativeOutput { index: usize, value: Fixed64 },

    #[error("output {index} value {value} is finer than precision {precision}")]
    PrecisionViolation {
        index: usize,
        value: Fixed64,
        precision: u8,
    },

    #[error("input {index} spends an outpoint already spent by another input")]
    DuplicateInput { index: usize },

    #[error("input {index} references an unknown output")]
    UnknownInput { index: usize },

    #[error("value not conserved: inputs {inputs}, outputs plus fee {outputs}")]
    ValueMismatch { inputs: Fixed64, outputs: Fixed64 },

    #[error("amount arithmetic overflow")]
    Overflow,

    #[error("no authorization program for {0}")]
    MissingProgram(ProgramHash),

    #[error("authorization program for {0} does not verify")]
    InvalidProgram(ProgramHash),

    #[error("serialization failed: {0}")]
    Serialization(#[from] bincode::Error),
}
