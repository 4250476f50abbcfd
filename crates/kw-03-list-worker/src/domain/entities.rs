//! Core entities for the List Worker

use kw_01_ordered_list::SortStats;
use std::fmt;

/// Identifier a worker reports back on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub u64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionStatus {
    pub worker_id: WorkerId,
    pub success: bool,
    /// Values printed after sorting, head to tail
    pub emitted: Vec<char>,
    /// Items released by the final destroy
    pub items_released: usize,
    pub sort: SortStats,
}

impl CompletionStatus {
    /// Printed values concatenated in order
    pub fn emitted_string(&self) -> String {
        self.emitted.iter().collect()
    }
}
