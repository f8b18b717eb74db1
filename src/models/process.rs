//! Process (simulation input) model.
//!
//! A process is passive data: identity, arrival time, CPU burst, priority.
//! The scheduling engines decide when it runs.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Engines never mutate the caller's processes; disciplines that need to
/// track remaining work clone what they need into private working state, so
/// the input set observed by the caller is unchanged after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run (>= 0).
    pub arrival: i64,
    /// Total CPU time required, in ticks (> 0).
    pub burst: i64,
    /// Scheduling priority; lower value = more urgent. Only the priority
    /// discipline consults this, the others carry it through unused.
    pub priority: i64,
}

impl Process {
    /// Creates a process with default (0) priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
