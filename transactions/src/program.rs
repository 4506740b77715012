//! Authorization programs attached to a signed transaction.

use quill_types::ProgramHash;
use serde::{Deserialize, Serialize};

/// A redeem script (`code`) plus the parameter script that satisfies it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub code: Vec<u8>,
    pub parameter: Vec<u8>,
}

impl Program {
    /// The program hash this program authorizes for.
    pub fn program_hash(&self) -> ProgramHash {
        quill_crypto::to_program_hash(&self.code)
    }
}
