//! Structured invocation results handed back to the transport layer

use serde::{Deserialize, Serialize};

/// Keyword verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// `Pass` when `check` holds, `Fail` otherwise
    pub const fn from_check(check: bool) -> Self {
        if check {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

/// Command-specific return payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReturnValue {
    Integer(i64),
    Text(String),
    Tuple(Vec<String>),
}

/// `{status, output, return}` triple, always fully populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub status: Status,
    /// Human-readable summary
    pub output: String,
    #[serde(rename = "return")]
    pub return_value: ReturnValue,
}

impl KeywordResult {
    pub fn new(status: Status, output: impl Into<String>, return_value: ReturnValue) -> Self {
        Self {
            status,
            output: output.into(),
            return_value,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == Status::Pass
    }
}
