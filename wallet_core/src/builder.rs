//! Assembly of register, issue and transfer transactions.
//!
//! Every build either returns a fully signed transaction or a [`BuildError`];
//! no partially built transaction escapes, and nothing is reserved when a build
//! fails.

use std::sync::Arc;

use quill_crypto::{create_signature_contract, resolve_address};
use quill_transactions::validation::validate_structure;
use quill_transactions::{Asset, Transaction, TxOutput};
use quill_types::{AssetId, Fixed64, ProgramHash};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BuilderConfig;
use crate::error::BuildError;
use crate::reservation::ReservationLedger;
use crate::selection::select_unspent;
use crate::signing::SigningContext;
use crate::source::{Signer, UnspentSource};
use crate::tracing_spans;

/// One requested payment in a transfer: a destination address and a decimal value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutput {
    pub address: String,
    pub value: String,
}

impl BatchOutput {
    pub fn new(address: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            value: value.into(),
        }
    }
}

/// Builds signed transactions for the account of the [`Signer`] it is given.
#[derive(Default)]
pub struct TransactionBuilder {
    config: BuilderConfig,
    reservations: Option<Arc<ReservationLedger>>,
}

impl TransactionBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            reservations: None,
        }
    }

    /// Skip outpoints held in `ledger` and reserve the ones each transfer selects.
    pub fn with_reservations(mut self, ledger: Arc<ReservationLedger>) -> Self {
        self.reservations = Some(ledger);
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build a register transaction declaring `asset_name` with a fixed `total_supply`.
    ///
    /// The issuance right is bound to the signer's account.
    pub fn build_register(
        &self,
        signer: &dyn Signer,
        asset_name: &str,
        total_supply: &str,
        precision: u8,
    ) -> Result<Transaction, BuildError> {
        let span = tracing_spans::register_span(asset_name, &signer.account().program_hash);
        let _enter = span.enter();
        finish(
            self.assemble_register(signer, asset_name, total_supply, precision),
            "register",
        )
    }

    /// Build an issue transaction minting `value` of `asset_id` to `address`.
    ///
    /// The full value goes to the destination; issuance carries no fee and no change.
    pub fn build_issue(
        &self,
        signer: &dyn Signer,
        asset_id: &AssetId,
        address: &str,
        value: &str,
    ) -> Result<Transaction, BuildError> {
        let span = tracing_spans::issue_span(asset_id, &signer.account().program_hash);
        let _enter = span.enter();
        finish(self.assemble_issue(signer, asset_id, address, value), "issue")
    }

    /// Build a transfer of `asset_id` paying every entry of `batch`.
    ///
    /// Each output delivers its requested value minus the configured per-output
    /// fee. Inputs are selected from `source` to cover the sum of the requested
    /// values, and any excess returns to the signer's account as one change
    /// output placed after the requested outputs.
    pub fn build_transfer(
        &self,
        signer: &dyn Signer,
        source: &dyn UnspentSource,
        asset_id: &AssetId,
        batch: &[BatchOutput],
    ) -> Result<Transaction, BuildError> {
        let span = tracing_spans::transfer_span(
            asset_id,
            &signer.account().program_hash,
            batch.len(),
        );
        let _enter = span.enter();
        finish(
            self.assemble_transfer(signer, source, asset_id, batch),
            "transfer",
        )
    }

    fn assemble_register(
        &self,
        signer: &dyn Signer,
        asset_name: &str,
        total_supply: &str,
        precision: u8,
    ) -> Result<Transaction, BuildError> {
        let account = signer.account();
        let asset = Asset::token(asset_name, precision, self.config.max_precision)?;
        let contract = create_signature_contract(&account.public_key)?;
        let amount = Fixed64::parse(total_supply)?;
        if amount.is_zero() || !asset.admits(amount) {
            return Err(BuildError::AmountOutOfRange {
                input: total_supply.to_string(),
            });
        }

        let tx = Transaction::register_asset(
            asset,
            amount,
            account.public_key.clone(),
            contract.program_hash,
        );
        validate_structure(&tx)?;
        self.sign(signer, tx)
    }

    fn assemble_issue(
        &self,
        signer: &dyn Signer,
        asset_id: &AssetId,
        address: &str,
        value: &str,
    ) -> Result<Transaction, BuildError> {
        let program_hash = resolve(address)?;
        let value = Fixed64::parse(value)?;
        let output = TxOutput {
            asset_id: *asset_id,
            value,
            program_hash,
        };
        let tx = Transaction::issue_asset(vec![output], signer.account().program_hash);
        validate_structure(&tx)?;
        self.sign(signer, tx)
    }

    fn assemble_transfer(
        &self,
        signer: &dyn Signer,
        source: &dyn UnspentSource,
        asset_id: &AssetId,
        batch: &[BatchOutput],
    ) -> Result<Transaction, BuildError> {
        if batch.is_empty() {
            return Err(BuildError::NoOutputsRequested);
        }
        let account = signer.account();

        let fee = self.config.per_output_fee();
        let mut requested = Fixed64::ZERO;
        let mut outputs = Vec::with_capacity(batch.len() + 1);
        for (index, entry) in batch.iter().enumerate() {
            let value = Fixed64::parse(&entry.value)?;
            let delivered = match value.checked_sub(fee) {
                Some(delivered) if !delivered.is_zero() => delivered,
                _ => return Err(BuildError::FeeExceedsValue { index, value, fee }),
            };
            requested = requested.checked_add(value).ok_or(BuildError::Arithmetic)?;
            outputs.push(TxOutput {
                asset_id: *asset_id,
                value: delivered,
                program_hash: resolve(&entry.address)?,
            });
        }

        let mut candidates = source
            .unspent(&account.program_hash)
            .map_err(BuildError::AssetLookupFailed)?
            .remove(asset_id)
            .unwrap_or_default();
        if let Some(ledger) = &self.reservations {
            candidates = ledger.filter_available(candidates);
        }
        self.config.candidate_order.apply(&mut candidates);
        debug!(candidates = candidates.len(), requested = %requested, "selecting inputs");

        let selection = select_unspent(asset_id, requested, &candidates)?;
        if let Some(change) = selection.change {
            outputs.push(TxOutput {
                asset_id: *asset_id,
                value: change,
                program_hash: account.program_hash,
            });
        }

        let tx = Transaction::transfer_asset(selection.inputs, outputs, account.program_hash);
        validate_structure(&tx)?;
        let tx = self.sign(signer, tx)?;

        if let Some(ledger) = &self.reservations {
            ledger.reserve_all(&tx.inputs)?;
        }
        Ok(tx)
    }

    fn sign(&self, signer: &dyn Signer, tx: Transaction) -> Result<Transaction, BuildError> {
        let mut ctx = SigningContext::new(tx)?;
        let span = tracing_spans::sign_span(ctx.missing().count());
        let _enter = span.enter();

        signer.sign(&mut ctx)?;
        Ok(ctx.into_signed()?)
    }
}

fn resolve(address: &str) -> Result<ProgramHash, BuildError> {
    resolve_address(address).map_err(|source| BuildError::InvalidAddress {
        address: address.to_string(),
        source,
    })
}

fn finish(result: Result<Transaction, BuildError>, kind: &str) -> Result<Transaction, BuildError> {
    match &result {
        Ok(tx) => {
            let tx_hash = tx.hash().map(|h| h.to_string()).unwrap_or_default();
            info!(
                kind,
                tx_hash = %tx_hash,
                inputs = tx.inputs.len(),
                outputs = tx.outputs.len(),
                "transaction built"
            );
        }
        Err(e) => warn!(kind, error = %e, "transaction build rejected"),
    }
    result
}
