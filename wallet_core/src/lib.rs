//! Wallet core library for Quill.
//!
//! Turns a wallet's unspent-output state into signed ledger transactions:
//! - Unspent output selection with change ([`selection`])
//! - Register, issue and transfer assembly ([`TransactionBuilder`])
//! - Signature collection for the required program hashes ([`SigningContext`])
//! - Outpoint reservation across concurrent builds ([`ReservationLedger`])
//! - The collaborator seams ([`UnspentSource`], [`Signer`]) and an in-memory
//!   [`KeyWallet`] implementing both

pub mod account;
pub mod builder;
pub mod config;
pub mod error;
pub mod reservation;
pub mod selection;
pub mod signing;
pub mod source;
pub mod tracing_spans;
pub mod wallet;

pub use account::Account;
pub use builder::{BatchOutput, TransactionBuilder};
pub use config::{BuilderConfig, ConfigError};
pub use error::BuildError;
pub use reservation::ReservationLedger;
pub use selection::{select_unspent, CandidateOrder, Selection};
pub use signing::SigningContext;
pub use source::{SignError, Signer, SourceError, UnspentOutputRecord, UnspentSet, UnspentSource};
pub use wallet::KeyWallet;
