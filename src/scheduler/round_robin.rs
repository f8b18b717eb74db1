//! Round-robin engine (preemptive, fixed time quantum).
//!
//! # Algorithm
//!
//! Processes enter a FIFO ready queue as they arrive (arrival-sorted, stable
//! by input position). The queue head runs for `min(remaining, quantum)`
//! ticks, then rejoins the tail if work remains, behind anything that
//! arrived during its slice. The clock advances by the slice length after
//! every dispatch; when the queue is empty before the next arrival, the
//! clock advances one tick at a time.
//!
//! Termination is structural: every dispatch consumes at least one tick of
//! remaining burst.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::{Discipline, ScheduleError, ScheduleKpi};
use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};
use crate::validation::{validate_processes, validate_quantum};

/// Default time quantum, in ticks.
pub const DEFAULT_QUANTUM: i64 = 4;

/// Preemptive round-robin scheduler with a configurable quantum.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Discipline, RoundRobinScheduler};
///
/// let processes = vec![Process::new("P1", 0, 10)];
/// let schedule = RoundRobinScheduler::new().run(&processes).unwrap();
///
/// // Burst 10 with quantum 4 yields slices of 4, 4, and 2 ticks.
/// assert_eq!(schedule.timeline.len(), 3);
/// assert_eq!(schedule.row_for("P1").unwrap().wait, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

/// Engine-private working copy; `remaining` decrements per dispatch while
/// the input process stays untouched.
struct Running {
    process: Process,
    remaining: i64,
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl RoundRobinScheduler {
    /// Creates a round-robin scheduler with the default quantum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum (ticks granted per dispatch).
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Discipline for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn run(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        let mut errors = Vec::new();
        if let Err(problems) = validate_processes(processes) {
            errors.extend(problems);
        }
        if let Err(problems) = validate_quantum(self.quantum) {
            errors.extend(problems);
        }
        if !errors.is_empty() {
            return Err(ScheduleError::InvalidInput(errors));
        }

        // Arrival-sorted admission order; the sort is stable, so equal
        // arrivals keep their input order.
        let mut arrivals: Vec<Process> = processes.to_vec();
        arrivals.sort_by_key(|p| p.arrival);

        let mut cursor = 0;
        let mut queue: VecDeque<Running> = VecDeque::with_capacity(arrivals.len());
        let mut now: i64 = 0;
        let mut timeline = Vec::new();
        let mut rows = Vec::with_capacity(arrivals.len());

        let admit = |queue: &mut VecDeque<Running>, cursor: &mut usize, now: i64| {
            while *cursor < arrivals.len() && arrivals[*cursor].arrival <= now {
                queue.push_back(Running {
                    process: arrivals[*cursor].clone(),
                    remaining: arrivals[*cursor].burst,
                });
                *cursor += 1;
            }
        };

        while rows.len() < arrivals.len() {
            admit(&mut queue, &mut cursor, now);

            let Some(mut current) = queue.pop_front() else {
                now += 1;
                continue;
            };

            let slice = current.remaining.min(self.quantum);
            let start = now;
            now += slice;
            current.remaining -= slice;

            timeline.push(TimeSlice::new(&current.process.id, start, now));

            // Processes that arrived during the slice enter the queue ahead
            // of the preempted process.
            admit(&mut queue, &mut cursor, now);

            if current.remaining > 0 {
                queue.push_back(current);
            } else {
                let turnaround = now - current.process.arrival;
                rows.push(ScheduleRow {
                    process_id: current.process.id,
                    priority: current.process.priority,
                    burst: current.process.burst,
                    arrival: current.process.arrival,
                    wait: turnaround - current.process.burst,
                    turnaround,
                    completion: now,
                });
            }
        }

        let kpi = ScheduleKpi::calculate(&rows, now)?;
        Ok(Schedule {
            timeline,
            rows,
            kpi,
        })
    }
}
