//! Fundamental types for the Quill asset ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! fixed-point amounts, transaction and asset ids, program hashes, key material,
//! and the protocol-wide precision parameters.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;

pub use address::Address;
pub use amount::Fixed64;
pub use error::AmountError;
pub use hash::{AssetId, ProgramHash, TxId, Uint256};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
