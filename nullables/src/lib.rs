//! Nullable collaborators for deterministic testing.
//!
//! The transaction builder reaches the outside world only through the
//! [`UnspentSource`](quill_wallet_core::UnspentSource) and
//! [`Signer`](quill_wallet_core::Signer) traits. This crate provides
//! test-friendly implementations that:
//! - Return exactly what they were configured with
//! - Can be switched into failure modes programmatically
//! - Count how often they were called
//!
//! Usage: swap a real wallet for nullables in tests.

pub mod signer;
pub mod source;

pub use signer::NullSigner;
pub use source::NullUnspentSource;
