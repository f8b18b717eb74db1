//! Execution timeline (Gantt chart) model.

use serde::{Deserialize, Serialize};

/// One contiguous execution interval on the simulated CPU.
///
/// The ordered sequence of slices produced by a run forms the Gantt
/// timeline. Under preemption a single process contributes multiple,
/// non-adjacent slices; non-preemptive disciplines emit exactly one slice
/// per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that occupied the CPU during this interval.
    pub process_id: String,
    /// First tick of the interval (inclusive).
    pub start: i64,
    /// End of the interval (exclusive). Always >= `start`.
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new execution interval.
    pub fn new(process_id: impl Into<String>, start: i64, stop: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            stop,
        }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn len(&self) -> i64 {
        self.stop - self.start
    }

    /// Whether the interval covers zero ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }
}
