//! In-memory key wallet: one key pair and the unspent outputs it controls.

use std::sync::{Mutex, MutexGuard, PoisonError};

use quill_crypto::{
    generate_keypair, keypair_from_private, keypair_from_seed, sign_message, ContractError,
};
use quill_transactions::{Transaction, TransactionError};
use quill_types::{Address, AmountError, AssetId, Fixed64, KeyPair, PrivateKey, ProgramHash, TxId};
use tracing::debug;

use crate::account::Account;
use crate::signing::SigningContext;
use crate::source::{SignError, Signer, SourceError, UnspentOutputRecord, UnspentSet, UnspentSource};

/// A wallet holding a single Ed25519 key pair.
///
/// Acts as both collaborators a build needs: it reports its own unspent outputs
/// and signs for its own program hash.
pub struct KeyWallet {
    keys: KeyPair,
    account: Account,
    unspent: Mutex<UnspentSet>,
}

impl KeyWallet {
    /// Create a wallet with a freshly generated key pair.
    pub fn create() -> Result<Self, ContractError> {
        Self::from_keypair(generate_keypair())
    }

    /// Deterministic wallet from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, ContractError> {
        Self::from_keypair(keypair_from_seed(seed))
    }

    pub fn from_private_key(private: PrivateKey) -> Result<Self, ContractError> {
        Self::from_keypair(keypair_from_private(private))
    }

    fn from_keypair(keys: KeyPair) -> Result<Self, ContractError> {
        let account = Account::from_public_key(keys.public.clone())?;
        Ok(Self {
            keys,
            account,
            unspent: Mutex::new(UnspentSet::new()),
        })
    }

    fn unspent_set(&self) -> MutexGuard<'_, UnspentSet> {
        self.unspent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn address(&self) -> Address {
        self.account.address()
    }

    /// Record an output of `asset_id` this wallet can spend.
    pub fn add_unspent(&self, asset_id: AssetId, tx_id: TxId, index: u16, value: Fixed64) {
        self.unspent_set()
            .entry(asset_id)
            .or_default()
            .push(UnspentOutputRecord::new(tx_id, index, value));
    }

    /// Sum of the unspent values held for `asset_id`.
    pub fn balance(&self, asset_id: &AssetId) -> Result<Fixed64, AmountError> {
        let set = self.unspent_set();
        let records = set.get(asset_id).map(Vec::as_slice).unwrap_or_default();
        Fixed64::checked_sum(records.iter().map(|r| r.value))
    }

    /// Update the unspent set as if `tx` had been accepted by the ledger.
    ///
    /// Outputs it spends are removed; outputs it locks to this wallet's program
    /// hash are added under the transaction's id. Returns that id.
    pub fn apply_transaction(&self, tx: &Transaction) -> Result<TxId, TransactionError> {
        let tx_id = tx.hash()?;
        let mut set = self.unspent_set();

        for records in set.values_mut() {
            records.retain(|r| !tx.inputs.contains(&r.outpoint()));
        }
        set.retain(|_, records| !records.is_empty());

        for (index, output) in tx.outputs.iter().enumerate() {
            if output.program_hash != self.account.program_hash {
                continue;
            }
            let index = u16::try_from(index).map_err(|_| TransactionError::Malformed {
                tx_type: tx.tx_type(),
                reason: "output index exceeds u16",
            })?;
            set.entry(output.asset_id)
                .or_default()
                .push(UnspentOutputRecord::new(tx_id, index, output.value));
        }
        debug!(tx_id = %tx_id, "applied transaction to wallet");
        Ok(tx_id)
    }
}

impl UnspentSource for KeyWallet {
    fn unspent(&self, owner: &ProgramHash) -> Result<UnspentSet, SourceError> {
        if owner != &self.account.program_hash {
            return Err(SourceError::Unavailable {
                owner: *owner,
                reason: "not held by this wallet".to_string(),
            });
        }
        Ok(self.unspent_set().clone())
    }
}

impl Signer for KeyWallet {
    fn account(&self) -> &Account {
        &self.account
    }

    fn sign(&self, ctx: &mut SigningContext) -> Result<(), SignError> {
        let own = self.account.program_hash;
        if !ctx.missing().any(|hash| *hash == own) {
            return Ok(());
        }
        let signature = sign_message(ctx.signing_bytes(), &self.keys.private);
        ctx.add_signature(&self.keys.public, signature)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_transactions::{TxInput, TxOutput};

    fn asset() -> AssetId {
        AssetId::new([7u8; 32])
    }

    #[test]
    fn seed_wallet_is_deterministic() {
        let a = KeyWallet::from_seed(&[3u8; 32]).unwrap();
        let b = KeyWallet::from_seed(&[3u8; 32]).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.account(), b.account());
    }

    #[test]
    fn reports_only_own_unspent() {
        let wallet = KeyWallet::from_seed(&[3u8; 32]).unwrap();
        wallet.add_unspent(asset(), TxId::new([1u8; 32]), 0, Fixed64::new(50));
        let own = wallet.account().program_hash;
        assert_eq!(wallet.unspent(&own).unwrap()[&asset()].len(), 1);
        assert!(wallet.unspent(&ProgramHash::new([0u8; 20])).is_err());
    }

    #[test]
    fn apply_transaction_moves_unspent() {
        let wallet = KeyWallet::from_seed(&[3u8; 32]).unwrap();
        let own = wallet.account().program_hash;
        wallet.add_unspent(asset(), TxId::new([1u8; 32]), 0, Fixed64::new(50));
        wallet.add_unspent(asset(), TxId::new([2u8; 32]), 0, Fixed64::new(5));

        let tx = Transaction::transfer_asset(
            vec![TxInput::new(TxId::new([1u8; 32]), 0)],
            vec![
                TxOutput {
                    asset_id: asset(),
                    value: Fixed64::new(30),
                    program_hash: ProgramHash::new([9u8; 20]),
                },
                TxOutput {
                    asset_id: asset(),
                    value: Fixed64::new(20),
                    program_hash: own,
                },
            ],
            own,
        );
        let tx_id = wallet.apply_transaction(&tx).unwrap();

        let set = wallet.unspent(&own).unwrap();
        let records = &set[&asset()];
        assert_eq!(records.len(), 2);
        assert!(records.contains(&UnspentOutputRecord::new(tx_id, 1, Fixed64::new(20))));
        assert_eq!(wallet.balance(&asset()).unwrap(), Fixed64::new(25));
    }

    #[test]
    fn sign_skips_when_not_required() {
        let wallet = KeyWallet::from_seed(&[3u8; 32]).unwrap();
        let tx = Transaction::issue_asset(
            vec![TxOutput {
                asset_id: asset(),
                value: Fixed64::new(1),
                program_hash: ProgramHash::new([9u8; 20]),
            }],
            ProgramHash::new([8u8; 20]),
        );
        let mut ctx = SigningContext::new(tx).unwrap();
        wallet.sign(&mut ctx).unwrap();
        assert!(!ctx.is_complete());
    }
}
