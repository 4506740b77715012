//! Reservation of selected outpoints across concurrent builds.
//!
//! Without reservations, two builds reading the same unspent snapshot may select
//! the same outputs and produce conflicting transactions. A builder holding a
//! [`ReservationLedger`] skips reserved candidates and reserves what it selected
//! once the transaction is signed. The caller then either commits the reservation
//! (the transaction was broadcast) or releases it (the transaction was dropped).

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use quill_transactions::{Transaction, TxInput};
use tracing::debug;

use crate::error::BuildError;
use crate::source::UnspentOutputRecord;

/// Thread-safe set of outpoints claimed by built-but-unsettled transactions.
#[derive(Default)]
pub struct ReservationLedger {
    reserved: Mutex<HashSet<TxInput>>,
    committed: Mutex<HashSet<TxInput>>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(set: &Mutex<HashSet<TxInput>>) -> MutexGuard<'_, HashSet<TxInput>> {
        set.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_reserved(&self, outpoint: &TxInput) -> bool {
        Self::lock(&self.reserved).contains(outpoint) || Self::lock(&self.committed).contains(outpoint)
    }

    /// Drop candidates that are reserved or committed.
    pub fn filter_available(&self, candidates: Vec<UnspentOutputRecord>) -> Vec<UnspentOutputRecord> {
        let reserved = Self::lock(&self.reserved);
        let committed = Self::lock(&self.committed);
        candidates
            .into_iter()
            .filter(|r| {
                let outpoint = r.outpoint();
                !reserved.contains(&outpoint) && !committed.contains(&outpoint)
            })
            .collect()
    }

    /// Reserve every outpoint in `inputs`, or none of them.
    pub fn reserve_all(&self, inputs: &[TxInput]) -> Result<(), BuildError> {
        let mut reserved = Self::lock(&self.reserved);
        let committed = Self::lock(&self.committed);
        if let Some(taken) = inputs
            .iter()
            .find(|i| reserved.contains(*i) || committed.contains(*i))
        {
            return Err(BuildError::OutputReserved(*taken));
        }
        reserved.extend(inputs.iter().copied());
        debug!(count = inputs.len(), "reserved outpoints");
        Ok(())
    }

    /// Free the outpoints of a transaction that will not be broadcast.
    pub fn release(&self, tx: &Transaction) {
        let mut reserved = Self::lock(&self.reserved);
        for input in &tx.inputs {
            reserved.remove(input);
        }
    }

    /// Mark the outpoints of a broadcast transaction as spent.
    ///
    /// They stay excluded until [`forget_spent`](Self::forget_spent) is called for
    /// them, typically once the unspent source no longer reports them.
    pub fn commit(&self, tx: &Transaction) {
        let mut reserved = Self::lock(&self.reserved);
        let mut committed = Self::lock(&self.committed);
        for input in &tx.inputs {
            reserved.remove(input);
            committed.insert(*input);
        }
    }

    /// Stop tracking committed outpoints the unspent source has caught up with.
    pub fn forget_spent(&self, outpoints: &[TxInput]) {
        let mut committed = Self::lock(&self.committed);
        for outpoint in outpoints {
            committed.remove(outpoint);
        }
    }

    pub fn reserved_count(&self) -> usize {
        Self::lock(&self.reserved).len()
    }
}
