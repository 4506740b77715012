//! Transaction attributes.

use quill_types::ProgramHash;
use serde::{Deserialize, Serialize};

/// Extra data attached to a transaction and covered by its signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxAttribute {
    /// Declares a program hash whose authorization program must be attached.
    Script(ProgramHash),
    /// Free-form annotation.
    Description(String),
}
