//! Nullable signer: an account with no usable key.

use std::sync::atomic::{AtomicUsize, Ordering};

use quill_wallet_core::{Account, SignError, Signer, SigningContext};

enum Behaviour {
    /// Fail every signing request with this error.
    Fail(SignError),
    /// Accept the request but attach nothing.
    Silent,
}

/// A signer for testing the builder's signing failure paths.
pub struct NullSigner {
    account: Account,
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl NullSigner {
    /// A signer whose key is unavailable.
    pub fn failing(account: Account) -> Self {
        let hash = account.program_hash;
        Self::failing_with(account, SignError::KeyUnavailable(hash))
    }

    pub fn failing_with(account: Account, error: SignError) -> Self {
        Self {
            account,
            behaviour: Behaviour::Fail(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// A signer that returns success without signing anything.
    pub fn silent(account: Account) -> Self {
        Self {
            account,
            behaviour: Behaviour::Silent,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Signer for NullSigner {
    fn account(&self) -> &Account {
        &self.account
    }

    fn sign(&self, _ctx: &mut SigningContext) -> Result<(), SignError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            Behaviour::Fail(error) => Err(error.clone()),
            Behaviour::Silent => Ok(()),
        }
    }
}
