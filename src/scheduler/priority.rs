//! Priority engine (non-preemptive, shortest-burst tie-break).
//!
//! # Algorithm
//!
//! Same control structure as the SJF engine, with two differences. The ready
//! queue is stably sorted by `(priority, burst)`: lower priority value
//! first, shorter burst breaking ties. Eligibility is re-derived on every
//! iteration instead of using a one-shot admission flag: a process enters
//! the queue once it has arrived, is not completed, and is not already
//! queued. Membership tests use id sets, so re-checking stays O(1) per
//! process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::HashSet;

use super::{Discipline, ScheduleError, ScheduleKpi};
use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};
use crate::validation::validate_processes;

/// Non-preemptive priority scheduler; lower value = more urgent.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Discipline, PriorityScheduler};
///
/// let processes = vec![
///     Process::new("low", 0, 3).with_priority(5),
///     Process::new("high", 0, 3).with_priority(1),
/// ];
/// let schedule = PriorityScheduler::new().run(&processes).unwrap();
///
/// assert_eq!(schedule.timeline[0].process_id, "high");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl PriorityScheduler {
    /// Creates a new priority scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Discipline for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn run(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes).map_err(ScheduleError::InvalidInput)?;

        let mut now: i64 = 0;
        let mut ready: Vec<Process> = Vec::new();
        let mut queued: HashSet<String> = HashSet::with_capacity(processes.len());
        let mut completed: HashSet<String> = HashSet::with_capacity(processes.len());
        let mut timeline = Vec::with_capacity(processes.len());
        let mut rows = Vec::with_capacity(processes.len());

        while rows.len() < processes.len() {
            for process in processes {
                if process.arrival <= now
                    && !completed.contains(&process.id)
                    && !queued.contains(&process.id)
                {
                    queued.insert(process.id.clone());
                    ready.push(process.clone());
                }
            }

            // Stable: equal (priority, burst) pairs keep their admission order.
            ready.sort_by_key(|p| (p.priority, p.burst));

            if ready.is_empty() {
                now += 1;
                continue;
            }

            let current = ready.remove(0);
            queued.remove(&current.id);
            completed.insert(current.id.clone());

            let wait = now - current.arrival;
            let start = now;
            now += current.burst;

            timeline.push(TimeSlice::new(&current.id, start, now));
            rows.push(ScheduleRow {
                process_id: current.id,
                priority: current.priority,
                burst: current.burst,
                arrival: current.arrival,
                wait,
                turnaround: now - current.arrival,
                completion: now,
            });
        }

        let kpi = ScheduleKpi::calculate(&rows, now)?;
        Ok(Schedule {
            timeline,
            rows,
            kpi,
        })
    }
}
