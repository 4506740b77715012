//! Blake2b hashing for transaction ids and program hashes.

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};
use quill_types::{ProgramHash, TxId};

type Blake2b256 = Blake2b<U32>;
type Blake2b160 = Blake2b<U20>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Compute a 160-bit Blake2b hash of arbitrary data.
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Blake2b160::new();
    hasher.update(data);
    let mut output = [0u8; 20];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Hash a contract's redeem script to the program hash outputs are locked to.
pub fn to_program_hash(script: &[u8]) -> ProgramHash {
    ProgramHash::new(blake2b_160(script))
}

/// Hash a transaction's signing bytes to produce its id.
pub fn hash_transaction(signing_bytes: &[u8]) -> TxId {
    TxId::new(blake2b_256(signing_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_deterministic() {
        assert_eq!(blake2b_256(b"hello quill"), blake2b_256(b"hello quill"));
        assert_eq!(blake2b_160(b"hello quill"), blake2b_160(b"hello quill"));
    }

    #[test]
    fn blake2b_different_inputs() {
        assert_ne!(blake2b_256(b"hello"), blake2b_256(b"world"));
    }

    #[test]
    fn blake2b_multi_equivalent() {
        let single = blake2b_256(b"helloworld");
        let multi = blake2b_256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn short_hash_is_not_a_truncation() {
        let long = blake2b_256(b"script");
        let short = blake2b_160(b"script");
        assert_ne!(&long[..20], &short[..]);
    }

    #[test]
    fn hash_transaction_returns_txid() {
        assert!(!hash_transaction(b"test tx data").is_zero());
    }
}
