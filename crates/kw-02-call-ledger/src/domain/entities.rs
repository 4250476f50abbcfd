//! Core entities for the Shared Call Ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical role that issued a ledger call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Reader,
    Writer,
}

impl Origin {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Origin::Reader => "Reader",
            Origin::Writer => "Writer",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic entry, emitted under the ledger lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Counter value after this call's increment (1-based)
    pub counter: u64,
    pub origin: Origin,
    pub message: String,
}

/// Point-in-time copy of ledger state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub counter: u64,
    pub last_message: Option<String>,
}
