//! Nullable unspent source: a fixed, controllable unspent set.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use quill_types::{AssetId, Fixed64, ProgramHash, TxId};
use quill_wallet_core::{SourceError, UnspentOutputRecord, UnspentSet, UnspentSource};

/// An in-memory unspent source for testing.
///
/// Reports the same set for every owner unless told to fail.
#[derive(Default)]
pub struct NullUnspentSource {
    set: Mutex<UnspentSet>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl NullUnspentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every query fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        let source = Self::new();
        source.fail_with(reason);
        source
    }

    /// Append a record for `asset_id`, keeping insertion order.
    pub fn add(&self, asset_id: AssetId, tx_id: TxId, index: u16, value: Fixed64) {
        self.set
            .lock()
            .unwrap()
            .entry(asset_id)
            .or_default()
            .push(UnspentOutputRecord::new(tx_id, index, value));
    }

    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of `unspent` queries served (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UnspentSource for NullUnspentSource {
    fn unspent(&self, owner: &ProgramHash) -> Result<UnspentSet, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(SourceError::Unavailable {
                owner: *owner,
                reason,
            });
        }
        Ok(self.set.lock().unwrap().clone())
    }
}
