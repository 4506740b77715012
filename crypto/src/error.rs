use thiserror::Error;

/// Why an address string could not be resolved to a program hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address does not start with `ql_`")]
    MissingPrefix,

    #[error("address body has {actual} characters, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("address contains a character outside the base32 alphabet")]
    InvalidCharacter,

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("public key is not a valid Ed25519 point")]
    InvalidPublicKey,
}
