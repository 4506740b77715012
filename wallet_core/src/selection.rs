//! Unspent output selection.
//!
//! Candidates are consumed strictly in the order given until their running total
//! covers the requested value. The excess over the request, if any, becomes one
//! change output back to the spender. No value-based sorting happens here; callers
//! that need a reproducible selection order the candidates first (see
//! [`CandidateOrder`]).

use std::collections::HashSet;

use quill_transactions::TxInput;
use quill_types::{AssetId, Fixed64};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BuildError;
use crate::source::UnspentOutputRecord;

/// How candidates are ordered before selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrder {
    /// Keep the order the unspent source returned.
    AsSupplied,
    /// Ascending by (transaction id, output index).
    #[default]
    ByOutpoint,
}

impl CandidateOrder {
    pub fn apply(self, candidates: &mut [UnspentOutputRecord]) {
        match self {
            Self::AsSupplied => {}
            Self::ByOutpoint => candidates.sort_by_key(UnspentOutputRecord::outpoint),
        }
    }
}

/// The outcome of a successful selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Selected outpoints, in selection order.
    pub inputs: Vec<TxInput>,
    /// Sum of the selected values.
    pub selected_total: Fixed64,
    /// Value to return to the spender; `None` when the selection matched exactly.
    pub change: Option<Fixed64>,
}

/// Select candidates covering `requested` units of `asset_id`.
///
/// Non-positive records and repeated outpoints are skipped. A zero request selects
/// nothing.
pub fn select_unspent(
    asset_id: &AssetId,
    requested: Fixed64,
    candidates: &[UnspentOutputRecord],
) -> Result<Selection, BuildError> {
    let mut selection = Selection {
        inputs: Vec::new(),
        selected_total: Fixed64::ZERO,
        change: None,
    };
    if requested.is_zero() {
        return Ok(selection);
    }

    let mut remaining = requested;
    let mut seen = HashSet::new();

    for record in candidates {
        if record.value.raw() <= 0 {
            debug!(tx_id = %record.tx_id, index = record.index, "skipping non-positive unspent record");
            continue;
        }
        let outpoint = record.outpoint();
        if !seen.insert(outpoint) {
            debug!(tx_id = %record.tx_id, index = record.index, "skipping repeated unspent record");
            continue;
        }

        selection.inputs.push(outpoint);
        selection.selected_total = selection
            .selected_total
            .checked_add(record.value)
            .ok_or(BuildError::Arithmetic)?;

        if let Some(excess) = record.value.checked_sub(remaining) {
            if !excess.is_zero() {
                selection.change = Some(excess);
            }
            remaining = Fixed64::ZERO;
            break;
        }
        // record.value < remaining here, so the subtraction cannot go negative.
        remaining = remaining
            .checked_sub(record.value)
            .ok_or(BuildError::Arithmetic)?;
    }

    if !remaining.is_zero() {
        return Err(BuildError::InsufficientFunds {
            asset_id: *asset_id,
            requested,
            available: selection.selected_total,
        });
    }

    debug!(
        asset = %asset_id,
        inputs = selection.inputs.len(),
        selected = %selection.selected_total,
        change = ?selection.change.map(|c| c.to_string()),
        "unspent selection complete"
    );
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_types::TxId;

    fn asset() -> AssetId {
        AssetId::new([0xAA; 32])
    }

    fn record(id: u8, index: u16, value: i64) -> UnspentOutputRecord {
        UnspentOutputRecord::new(TxId::new([id; 32]), index, Fixed64::new(value))
    }

    #[test]
    fn single_record_with_change() {
        let sel = select_unspent(&asset(), Fixed64::new(40), &[record(1, 0, 100)]).unwrap();
        assert_eq!(sel.inputs, vec![record(1, 0, 100).outpoint()]);
        assert_eq!(sel.selected_total, Fixed64::new(100));
        assert_eq!(sel.change, Some(Fixed64::new(60)));
    }

    #[test]
    fn two_records_with_change() {
        let candidates = [record(1, 0, 30), record(2, 0, 80)];
        let sel = select_unspent(&asset(), Fixed64::new(90), &candidates).unwrap();
        assert_eq!(sel.inputs.len(), 2);
        assert_eq!(sel.change, Some(Fixed64::new(20)));
    }

    #[test]
    fn exact_match_has_no_change() {
        let candidates = [record(1, 0, 30), record(2, 0, 60), record(3, 0, 5)];
        let sel = select_unspent(&asset(), Fixed64::new(90), &candidates).unwrap();
        assert_eq!(sel.inputs.len(), 2);
        assert_eq!(sel.selected_total, Fixed64::new(90));
        assert_eq!(sel.change, None);
    }

    #[test]
    fn stops_at_first_covering_record() {
        let candidates = [record(1, 0, 500), record(2, 0, 1)];
        let sel = select_unspent(&asset(), Fixed64::new(1), &candidates).unwrap();
        assert_eq!(sel.inputs, vec![record(1, 0, 500).outpoint()]);
        assert_eq!(sel.change, Some(Fixed64::new(499)));
    }

    #[test]
    fn selection_follows_supplied_order() {
        let candidates = [record(9, 0, 10), record(1, 0, 10)];
        let sel = select_unspent(&asset(), Fixed64::new(10), &candidates).unwrap();
        assert_eq!(sel.inputs, vec![record(9, 0, 10).outpoint()]);
    }

    #[test]
    fn insufficient_funds() {
        let candidates = [record(1, 0, 30), record(2, 0, 20)];
        let err = select_unspent(&asset(), Fixed64::new(51), &candidates).unwrap_err();
        match err {
            BuildError::InsufficientFunds {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, Fixed64::new(51));
                assert_eq!(available, Fixed64::new(50));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_candidates_insufficient() {
        assert!(matches!(
            select_unspent(&asset(), Fixed64::new(1), &[]),
            Err(BuildError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn repeated_outpoint_selected_once() {
        let candidates = [record(1, 0, 30), record(1, 0, 30), record(2, 1, 30)];
        let sel = select_unspent(&asset(), Fixed64::new(60), &candidates).unwrap();
        assert_eq!(
            sel.inputs,
            vec![record(1, 0, 30).outpoint(), record(2, 1, 30).outpoint()]
        );
    }

    #[test]
    fn zero_value_records_skipped() {
        let candidates = [record(1, 0, 0), record(2, 0, 10)];
        let sel = select_unspent(&asset(), Fixed64::new(10), &candidates).unwrap();
        assert_eq!(sel.inputs, vec![record(2, 0, 10).outpoint()]);
    }

    #[test]
    fn zero_request_selects_nothing() {
        let sel = select_unspent(&asset(), Fixed64::ZERO, &[record(1, 0, 10)]).unwrap();
        assert!(sel.inputs.is_empty());
        assert_eq!(sel.change, None);
    }

    #[test]
    fn by_outpoint_order_sorts_ascending() {
        let mut candidates = vec![record(3, 0, 1), record(1, 2, 1), record(1, 0, 1)];
        CandidateOrder::ByOutpoint.apply(&mut candidates);
        let order: Vec<_> = candidates.iter().map(|r| (r.tx_id.as_bytes()[0], r.index)).collect();
        assert_eq!(order, vec![(1, 0), (1, 2), (3, 0)]);

        let mut supplied = vec![record(3, 0, 1), record(1, 0, 1)];
        CandidateOrder::AsSupplied.apply(&mut supplied);
        assert_eq!(supplied[0].tx_id.as_bytes()[0], 3);
    }
}
