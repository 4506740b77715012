//! Stateless transaction validation.
//!
//! These checks need nothing beyond the transaction itself (plus, for value
//! conservation, the values of the outputs its inputs spend). Whether inputs exist
//! on chain or are already spent is the ledger's concern.

use std::collections::HashSet;

use quill_types::Fixed64;

use crate::error::TransactionError;
use crate::{Asset, Payload, Transaction, TransactionType, TxInput};

/// Validate the shape of a transaction for its type.
pub fn validate_structure(tx: &Transaction) -> Result<(), TransactionError> {
    let tx_type = tx.tx_type();
    let malformed = |reason: &'static str| TransactionError::Malformed { tx_type, reason };

    match &tx.payload {
        Payload::RegisterAsset(register) => {
            if !tx.inputs.is_empty() || !tx.outputs.is_empty() {
                return Err(malformed("register carries no inputs or outputs"));
            }
            if register.amount.raw() <= 0 {
                return Err(malformed("total supply must be positive"));
            }
            if !register.asset.admits(register.amount) {
                return Err(malformed("total supply is finer than asset precision"));
            }
        }
        Payload::IssueAsset => {
            if !tx.inputs.is_empty() {
                return Err(malformed("issue carries no inputs"));
            }
            if tx.outputs.is_empty() {
                return Err(malformed("issue needs at least one output"));
            }
        }
        Payload::TransferAsset => {
            if tx.inputs.is_empty() {
                return Err(malformed("transfer needs at least one input"));
            }
            if tx.outputs.is_empty() {
                return Err(malformed("transfer needs at least one output"));
            }
            let asset_id = tx.outputs[0].asset_id;
            if tx.outputs.iter().any(|o| o.asset_id != asset_id) {
                return Err(malformed("transfer outputs span more than one asset"));
            }
        }
    }

    let mut seen = HashSet::with_capacity(tx.inputs.len());
    for (index, input) in tx.inputs.iter().enumerate() {
        if !seen.insert(input) {
            return Err(TransactionError::DuplicateInput { index });
        }
    }

    for (index, output) in tx.outputs.iter().enumerate() {
        if output.value.raw() < 0 {
            return Err(TransactionError::NegativeOutput {
                index,
                value: output.value,
            });
        }
    }

    if tx.required_program_hashes().is_empty() {
        return Err(malformed("no signer declared"));
    }
    Ok(())
}

/// Check every output value is representable at `asset`'s declared precision.
///
/// This is a ledger-side check: it needs the registered descriptor of the asset,
/// which issue and transfer builds only know by id. Register builds apply the
/// same rule to the supply through [`Asset::admits`].
pub fn validate_output_precision(tx: &Transaction, asset: &Asset) -> Result<(), TransactionError> {
    for (index, output) in tx.outputs.iter().enumerate() {
        if !asset.admits(output.value) {
            return Err(TransactionError::PrecisionViolation {
                index,
                value: output.value,
                precision: asset.precision,
            });
        }
    }
    Ok(())
}

/// Check that a transfer conserves value: the spent outputs' total equals the new
/// outputs' total plus `fee`. `lookup` returns the value of the output an input spends.
pub fn validate_conservation<F>(
    tx: &Transaction,
    fee: Fixed64,
    lookup: F,
) -> Result<(), TransactionError>
where
    F: Fn(&TxInput) -> Option<Fixed64>,
{
    if tx.tx_type() != TransactionType::TransferAsset {
        return Ok(());
    }

    let mut values = Vec::with_capacity(tx.inputs.len());
    for (index, input) in tx.inputs.iter().enumerate() {
        values.push(lookup(input).ok_or(TransactionError::UnknownInput { index })?);
    }
    let inputs = Fixed64::checked_sum(values).map_err(|_| TransactionError::Overflow)?;
    let outputs = Fixed64::checked_sum(tx.outputs.iter().map(|o| o.value).chain([fee]))
        .map_err(|_| TransactionError::Overflow)?;

    if inputs != outputs {
        return Err(TransactionError::ValueMismatch { inputs, outputs });
    }
    Ok(())
}

/// Check that each required program hash has an attached program whose signature
/// verifies over the transaction's signing bytes.
pub fn verify_programs(tx: &Transaction) -> Result<(), TransactionError> {
    let message = tx.signing_bytes()?;
    for hash in tx.required_program_hashes() {
        let program = tx
            .programs
            .iter()
            .find(|p| p.program_hash() == hash)
            .ok_or(TransactionError::MissingProgram(hash))?;
        if !quill_crypto::verify_signature_program(&program.code, &program.parameter, &message) {
            return Err(TransactionError::InvalidProgram(hash));
        }
    }
    Ok(())
}
