//! Address encoding and resolution.
//!
//! Address format: `ql_` + base32(program_hash, 32 chars) + base32(checksum, 8 chars)
//!
//! Checksum: first 5 bytes of Blake2b-256(program_hash).
//! Base32 alphabet: `13456789abcdefghijkmnopqrstuwxyz` (avoids ambiguous chars).
//! A 160-bit program hash is exactly 32 base32 characters, so no padding is involved.

use quill_types::{Address, ProgramHash};

use crate::error::AddressError;

const BASE32_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[BASE32_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const PREFIX: &str = Address::PREFIX;
const HASH_CHARS: usize = 32;
const CHECKSUM_CHARS: usize = 8;
const ENCODED_LEN: usize = HASH_CHARS + CHECKSUM_CHARS;

/// Encode bytes whose bit length is a multiple of 5.
fn encode_base32(bytes: &[u8]) -> String {
    let mut result = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u64 = 0;
    let mut bits = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u64::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            result.push(BASE32_ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
    }
    if bits > 0 {
        result.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }
    result
}

fn decode_base32_fixed<const N: usize>(s: &str) -> Result<[u8; N], AddressError> {
    let mut buffer: u64 = 0;
    let mut bits = 0;
    let mut out = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        let val = BASE32_DECODE
            .get(c as usize)
            .copied()
            .filter(|v| *v != 0xFF)
            .ok_or(AddressError::InvalidCharacter)?;
        buffer = (buffer << 5) | u64::from(val);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            if pos < N {
                out[pos] = (buffer >> bits) as u8;
                pos += 1;
            }
        }
    }
    Ok(out)
}

fn checksum(hash: &ProgramHash) -> [u8; 5] {
    let digest = crate::blake2b_256(hash.as_bytes());
    let mut out = [0u8; 5];
    out.copy_from_slice(&digest[..5]);
    out
}

/// Render a program hash as a `ql_`-prefixed address.
pub fn encode_address(hash: &ProgramHash) -> Address {
    Address::new(format!(
        "{}{}{}",
        PREFIX,
        encode_base32(hash.as_bytes()),
        encode_base32(&checksum(hash))
    ))
}

/// Resolve an address string to the program hash it encodes.
///
/// Pure and deterministic; fails if the prefix, length, alphabet, or checksum is wrong.
pub fn resolve_address(address: &str) -> Result<ProgramHash, AddressError> {
    let body = address
        .strip_prefix(PREFIX)
        .ok_or(AddressError::MissingPrefix)?;
    if body.len() != ENCODED_LEN {
        return Err(AddressError::WrongLength {
            expected: ENCODED_LEN,
            actual: body.len(),
        });
    }
    if !body.is_ascii() {
        return Err(AddressError::InvalidCharacter);
    }

    let (hash_part, checksum_part) = body.split_at(HASH_CHARS);
    let hash = ProgramHash::new(decode_base32_fixed::<20>(hash_part)?);
    let claimed: [u8; 5] = decode_base32_fixed(checksum_part)?;

    if claimed != checksum(&hash) {
        return Err(AddressError::ChecksumMismatch);
    }
    Ok(hash)
}

/// Validate that an address string is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    resolve_address(address).is_ok()
}
