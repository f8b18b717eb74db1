//! Schedule (solution) model.
//!
//! A schedule is the complete result of one engine run: the execution
//! timeline, one finalized timing row per process, and the run-level
//! aggregate metrics.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::TimeSlice;
use crate::scheduler::ScheduleKpi;

/// Finalized timing record for one process.
///
/// Produced exactly once per input process, in the order processes
/// completed (not necessarily input order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub process_id: String,
    /// Scheduling priority, copied from the input.
    pub priority: i64,
    /// Original burst duration, not the remaining work at completion.
    pub burst: i64,
    /// Arrival tick, copied from the input.
    pub arrival: i64,
    /// Ticks spent ready-but-not-running before completion.
    pub wait: i64,
    /// Completion tick minus arrival tick.
    pub turnaround: i64,
    /// Tick at which the process finished.
    pub completion: i64,
}

/// A complete schedule produced by one discipline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Ordered execution intervals (the Gantt timeline).
    pub timeline: Vec<TimeSlice>,
    /// Per-process timing rows, in completion order.
    pub rows: Vec<ScheduleRow>,
    /// Run-level aggregate metrics.
    pub kpi: ScheduleKpi,
}

impl Schedule {
    /// Latest stop tick across the timeline (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Finds the timing row for a given process.
    pub fn row_for(&self, process_id: &str) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.process_id == process_id)
    }

    /// Returns all execution intervals for a given process, in order.
    pub fn slices_for(&self, process_id: &str) -> Vec<&TimeSlice> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time granted to a given process across all its slices.
    pub fn total_service(&self, process_id: &str) -> i64 {
        self.slices_for(process_id).iter().map(|s| s.len()).sum()
    }
}
