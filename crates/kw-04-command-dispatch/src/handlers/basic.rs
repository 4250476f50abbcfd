//! One-line keyword handlers

use crate::domain::errors::DispatchError;
use crate::domain::result::{KeywordResult, ReturnValue, Status};
use crate::ports::outbound::KeywordHandler;
use async_trait::async_trait;

fn executed(command: &str) -> String {
    format!("Executed {}", command)
}

/// Returns a fixed integer; passes when it is positive
#[derive(Debug, Clone, Copy)]
pub struct FixedIntegerHandler {
    value: i64,
}

impl FixedIntegerHandler {
    pub const fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Default for FixedIntegerHandler {
    fn default() -> Self {
        Self::new(2)
    }
}

#[async_trait]
impl KeywordHandler for FixedIntegerHandler {
    async fn execute(
        &self,
        command: &str,
        _args: &[String],
    ) -> Result<KeywordResult, DispatchError> {
        Ok(KeywordResult::new(
            Status::from_check(self.value > 0),
            executed(command),
            ReturnValue::Integer(self.value),
        ))
    }
}

/// Returns its single argument unchanged; passes when the first character
/// sorts after `'A'`.
///
/// The comparison is on Unicode scalar values, so any non-ASCII first
/// character (`"é"`, `"ü"`, ...) passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl EchoHandler {
    const THRESHOLD: char = 'A';
}

#[async_trait]
impl KeywordHandler for EchoHandler {
    async fn execute(
        &self,
        command: &str,
        args: &[String],
    ) -> Result<KeywordResult, DispatchError> {
        let text = args
            .first()
            .ok_or_else(|| DispatchError::malformed(command, "missing argument"))?;
        let first = text
            .chars()
            .next()
            .ok_or_else(|| DispatchError::malformed(command, "argument must not be empty"))?;

        Ok(KeywordResult::new(
            Status::from_check(first > Self::THRESHOLD),
            executed(command),
            ReturnValue::Text(text.clone()),
        ))
    }
}

/// No-op contract: passes and echoes every argument back as a tuple
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleEchoHandler;

#[async_trait]
impl KeywordHandler for TupleEchoHandler {
    async fn execute(
        &self,
        command: &str,
        args: &[String],
    ) -> Result<KeywordResult, DispatchError> {
        Ok(KeywordResult::new(
            Status::Pass,
            executed(command),
            ReturnValue::Tuple(args.to_vec()),
        ))
    }
}
