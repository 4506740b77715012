//! Pre-built [`tracing::Span`] constructors for the build operations.
//!
//! Consistent span names and field sets make build traces easy to filter and
//! correlate with the subscriber installed by `quill_utils::logging`.

use quill_types::{AssetId, ProgramHash};
use tracing::{info_span, Span};

/// Span covering a register build for `asset_name`.
pub fn register_span(asset_name: &str, account: &ProgramHash) -> Span {
    info_span!("build_register", asset = %asset_name, account = %account)
}

/// Span covering an issue build.
pub fn issue_span(asset_id: &AssetId, account: &ProgramHash) -> Span {
    info_span!("build_issue", asset = %asset_id, account = %account)
}

/// Span covering a transfer build of `outputs` batch entries.
pub fn transfer_span(asset_id: &AssetId, account: &ProgramHash, outputs: usize) -> Span {
    info_span!("build_transfer", asset = %asset_id, account = %account, outputs = outputs)
}

/// Span covering the signing of an assembled transaction.
pub fn sign_span(required: usize) -> Span {
    info_span!("sign", required = required)
}
