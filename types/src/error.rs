//! Errors raised while parsing or combining fixed-point amounts.

use thiserror::Error;

/// Failure to turn text into a [`Fixed64`](crate::Fixed64), or to combine amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("malformed amount: {input:?}")]
    Malformed { input: String },

    #[error("amount out of range: {input:?}")]
    OutOfRange { input: String },

    #[error("amount arithmetic overflow")]
    Overflow,
}
