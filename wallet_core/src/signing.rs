//! Binds an assembled transaction to the signatures it needs.
//!
//! A [`SigningContext`] is created from an unsigned transaction, handed to a
//! [`Signer`](crate::Signer), and turned back into a transaction once every
//! required program hash has a verified program.

use std::collections::BTreeMap;

use quill_crypto::{create_signature_contract, signature_parameter, verify_signature};
use quill_transactions::{Program, Transaction};
use quill_types::{ProgramHash, PublicKey, Signature};

use crate::source::SignError;

pub struct SigningContext {
    tx: Transaction,
    signing_bytes: Vec<u8>,
    required: Vec<ProgramHash>,
    programs: BTreeMap<ProgramHash, Program>,
}

impl SigningContext {
    /// Start signing `tx`. Any programs it already carries are discarded.
    pub fn new(mut tx: Transaction) -> Result<Self, SignError> {
        tx.programs.clear();
        let signing_bytes = tx.signing_bytes().map_err(|_| SignError::Encoding)?;
        let required = tx.required_program_hashes();
        Ok(Self {
            tx,
            signing_bytes,
            required,
            programs: BTreeMap::new(),
        })
    }

    /// The bytes each signature must cover.
    pub fn signing_bytes(&self) -> &[u8] {
        &self.signing_bytes
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    /// Program hashes still waiting for a program.
    pub fn missing(&self) -> impl Iterator<Item = &ProgramHash> + '_ {
        self.required
            .iter()
            .filter(|hash| !self.programs.contains_key(hash))
    }

    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }

    /// Attach a signature by `public_key`.
    ///
    /// Returns `Ok(false)` if the key's contract is not one this transaction
    /// requires; the signature is then ignored.
    pub fn add_signature(
        &mut self,
        public_key: &PublicKey,
        signature: Signature,
    ) -> Result<bool, SignError> {
        let contract = create_signature_contract(public_key)
            .map_err(|e| SignError::Unavailable(e.to_string()))?;
        if !self.required.contains(&contract.program_hash) {
            return Ok(false);
        }
        if !verify_signature(&self.signing_bytes, &signature, public_key) {
            return Err(SignError::InvalidSignature(contract.program_hash));
        }
        self.programs.insert(
            contract.program_hash,
            Program {
                code: contract.code,
                parameter: signature_parameter(&signature),
            },
        );
        Ok(true)
    }

    /// Attach the programs (ordered by program hash) and return the signed transaction.
    pub fn into_signed(self) -> Result<Transaction, SignError> {
        if let Some(missing) = self.missing().next() {
            return Err(SignError::Incomplete(*missing));
        }
        let Self {
            mut tx, programs, ..
        } = self;
        tx.set_programs(programs.into_values().collect());
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_crypto::{keypair_from_seed, sign_message};
    use quill_transactions::validation::verify_programs;
    use quill_transactions::TxOutput;
    use quill_types::{AssetId, Fixed64};

    fn issue_for(issuer: ProgramHash) -> Transaction {
        Transaction::issue_asset(
            vec![TxOutput {
                asset_id: AssetId::new([1u8; 32]),
                value: Fixed64::new(10),
                program_hash: ProgramHash::new([2u8; 20]),
            }],
            issuer,
        )
    }

    #[test]
    fn signs_required_hash() {
        let kp = keypair_from_seed(&[6u8; 32]);
        let contract = create_signature_contract(&kp.public).unwrap();
        let mut ctx = SigningContext::new(issue_for(contract.program_hash)).unwrap();
        assert!(!ctx.is_complete());

        let sig = sign_message(ctx.signing_bytes(), &kp.private);
        assert!(ctx.add_signature(&kp.public, sig).unwrap());
        assert!(ctx.is_complete());

        let tx = ctx.into_signed().unwrap();
        assert_eq!(tx.programs.len(), 1);
        assert!(verify_programs(&tx).is_ok());
    }

    #[test]
    fn unrelated_key_ignored() {
        let owner = keypair_from_seed(&[6u8; 32]);
        let other = keypair_from_seed(&[7u8; 32]);
        let contract = create_signature_contract(&owner.public).unwrap();
        let mut ctx = SigningContext::new(issue_for(contract.program_hash)).unwrap();

        let sig = sign_message(ctx.signing_bytes(), &other.private);
        assert!(!ctx.add_signature(&other.public, sig).unwrap());
        assert!(matches!(ctx.into_signed(), Err(SignError::Incomplete(_))));
    }

    #[test]
    fn bad_signature_rejected() {
        let kp = keypair_from_seed(&[6u8; 32]);
        let contract = create_signature_contract(&kp.public).unwrap();
        let mut ctx = SigningContext::new(issue_for(contract.program_hash)).unwrap();

        let sig = sign_message(b"something else", &kp.private);
        assert_eq!(
            ctx.add_signature(&kp.public, sig),
            Err(SignError::InvalidSignature(contract.program_hash))
        );
    }
}
