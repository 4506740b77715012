//! Cryptographic primitives for Quill.
//!
//! - **Ed25519** for signing and signature verification
//! - **Blake2b** for transaction ids (256-bit) and program hashes (160-bit)
//! - Address encoding/resolution with `ql_` prefix and base32 encoding
//! - Single-signature contracts: the redeem script an output is locked to

pub mod address;
pub mod contract;
pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{encode_address, resolve_address, validate_address};
pub use contract::{
    create_signature_contract, signature_parameter, verify_signature_program, Contract,
    ContractParameter,
};
pub use error::{AddressError, ContractError};
pub use hash::{blake2b_160, blake2b_256, blake2b_256_multi, hash_transaction, to_program_hash};
pub use keys::{
    generate_keypair, is_valid_public_key, keypair_from_private, keypair_from_seed,
    public_from_private,
};
pub use sign::{sign_message, verify_signature};
