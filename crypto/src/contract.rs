//! Single-signature contracts.
//!
//! A contract's redeem script is the condition an output is locked to. The only
//! script this crate builds is `PUSH32 <public key> CHECKSIG`; its Blake2b-160 hash
//! is the program hash that addresses encode.

use quill_types::{ProgramHash, PublicKey, Signature};

use crate::error::ContractError;
use crate::keys::is_valid_public_key;

/// Push the next 32 bytes.
pub const OP_PUSH32: u8 = 0x20;
/// Push the next 64 bytes.
pub const OP_PUSH64: u8 = 0x40;
/// Verify a signature against the pushed public key.
pub const OP_CHECKSIG: u8 = 0xAC;

/// Kind of value a contract expects in its parameter script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractParameter {
    Signature,
}

/// A redeem script together with its program hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub code: Vec<u8>,
    pub parameters: Vec<ContractParameter>,
    pub program_hash: ProgramHash,
}

/// Build the single-signature contract for `public_key`.
pub fn create_signature_contract(public_key: &PublicKey) -> Result<Contract, ContractError> {
    if !is_valid_public_key(public_key) {
        return Err(ContractError::InvalidPublicKey);
    }
    let mut code = Vec::with_capacity(34);
    code.push(OP_PUSH32);
    code.extend_from_slice(public_key.as_bytes());
    code.push(OP_CHECKSIG);

    let program_hash = crate::to_program_hash(&code);
    Ok(Contract {
        code,
        parameters: vec![ContractParameter::Signature],
        program_hash,
    })
}

/// Encode a signature as the parameter script satisfying a signature contract.
pub fn signature_parameter(signature: &Signature) -> Vec<u8> {
    let mut parameter = Vec::with_capacity(65);
    parameter.push(OP_PUSH64);
    parameter.extend_from_slice(signature.as_bytes());
    parameter
}

/// Check that `parameter` carries a valid signature over `message` for the key
/// embedded in the signature contract `code`.
pub fn verify_signature_program(code: &[u8], parameter: &[u8], message: &[u8]) -> bool {
    let (Some(public), Some(signature)) = (parse_code(code), parse_parameter(parameter)) else {
        return false;
    };
    crate::verify_signature(message, &signature, &public)
}

fn parse_code(code: &[u8]) -> Option<PublicKey> {
    match code {
        [OP_PUSH32, key @ .., OP_CHECKSIG] if key.len() == 32 => {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(key);
            Some(PublicKey(bytes))
        }
        _ => None,
    }
}

fn parse_parameter(parameter: &[u8]) -> Option<Signature> {
    match parameter {
        [OP_PUSH64, sig @ ..] if sig.len() == 64 => {
            let mut bytes = [0u8; 64];
            bytes.copy_from_slice(sig);
            Some(Signature(bytes))
        }
        _ => None,
    }
}
