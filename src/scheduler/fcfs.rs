//! First-Come-First-Served engine (non-preemptive).
//!
//! # Algorithm
//!
//! Services processes strictly in the order given; the caller presents them
//! in arrival order and no sorting happens here. Each process runs to
//! completion and the service clock advances to its completion time, so a
//! gap before a late arrival shows up as CPU idle time rather than as
//! negative wait.
//!
//! Wait time is recomputed for every process as `max(0, clock - arrival)`,
//! including processes with arrival time 0 that are not first in sequence.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use super::{Discipline, ScheduleError, ScheduleKpi};
use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};
use crate::validation::validate_processes;

/// Non-preemptive first-come-first-served scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Discipline, FcfsScheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let schedule = FcfsScheduler::new().run(&processes).unwrap();
///
/// assert_eq!(schedule.row_for("P2").unwrap().wait, 4);
/// assert_eq!(schedule.kpi.avg_wait, 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new FCFS scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Discipline for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes).map_err(ScheduleError::InvalidInput)?;

        let mut clock: i64 = 0;
        let mut timeline = Vec::with_capacity(processes.len());
        let mut rows = Vec::with_capacity(processes.len());

        for process in processes {
            let start = clock.max(process.arrival);
            let wait = start - process.arrival;
            let completion = start + process.burst;

            timeline.push(TimeSlice::new(&process.id, start, completion));
            rows.push(ScheduleRow {
                process_id: process.id.clone(),
                priority: process.priority,
                burst: process.burst,
                arrival: process.arrival,
                wait,
                turnaround: completion - process.arrival,
                completion,
            });

            clock = completion;
        }

        let kpi = ScheduleKpi::calculate(&rows, clock)?;
        Ok(Schedule {
            timeline,
            rows,
            kpi,
        })
    }
}
