//! Human-readable address strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An address string as entered by a user, e.g. `ql_...`.
///
/// This type carries text only; it is not known to be well-formed until it has been
/// resolved to a [`ProgramHash`](crate::ProgramHash) by the crypto crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// The standard prefix for all Quill addresses.
    pub const PREFIX: &'static str = "ql_";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cheap syntactic check: right prefix and non-empty body.
    pub fn has_prefix(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
