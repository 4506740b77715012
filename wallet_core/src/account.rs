//! The spending identity a build acts for.

use quill_crypto::{create_signature_contract, encode_address, ContractError};
use quill_types::{Address, ProgramHash, PublicKey};

/// An account: a public key and the program hash of its signature contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub program_hash: ProgramHash,
    pub public_key: PublicKey,
}

impl Account {
    /// Derive the account for `public_key` from its single-signature contract.
    pub fn from_public_key(public_key: PublicKey) -> Result<Self, ContractError> {
        let contract = create_signature_contract(&public_key)?;
        Ok(Self {
            program_hash: contract.program_hash,
            public_key,
        })
    }

    /// The address that resolves to this account's program hash.
    pub fn address(&self) -> Address {
        encode_address(&self.program_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_crypto::{keypair_from_seed, resolve_address};

    #[test]
    fn address_resolves_to_program_hash() {
        let kp = keypair_from_seed(&[1u8; 32]);
        let account = Account::from_public_key(kp.public).unwrap();
        let resolved = resolve_address(account.address().as_str()).unwrap();
        assert_eq!(resolved, account.program_hash);
    }

    #[test]
    fn invalid_key_is_contract_error() {
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert!(Account::from_public_key(PublicKey(bytes)).is_err());
    }
}
