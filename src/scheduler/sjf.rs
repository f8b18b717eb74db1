//! Shortest-Job-First engine (non-preemptive).
//!
//! # Algorithm
//!
//! Discrete-time loop over two pools: a ready queue (arrived, not yet run)
//! and the completed rows. Every iteration admits all processes that have
//! arrived by the current tick (admission is irreversible and tracked in an
//! id set), then stably sorts the ready queue ascending by burst duration,
//! so equal bursts keep their admission order. The queue head runs to
//! completion; when nothing has arrived yet, the clock advances one tick and
//! admission is retried.
//!
//! Throughput uses the final clock value as its denominator.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use std::collections::HashSet;

use super::{Discipline, ScheduleError, ScheduleKpi};
use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};
use crate::validation::validate_processes;

/// Non-preemptive shortest-job-first scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Discipline, SjfScheduler};
///
/// let processes = vec![
///     Process::new("P1", 0, 8),
///     Process::new("P2", 1, 4),
///     Process::new("P3", 2, 2),
/// ];
/// let schedule = SjfScheduler::new().run(&processes).unwrap();
///
/// // P2 and P3 arrive while P1 runs; the shorter P3 goes first.
/// let order: Vec<&str> = schedule.timeline.iter().map(|s| s.process_id.as_str()).collect();
/// assert_eq!(order, vec!["P1", "P3", "P2"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new SJF scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Discipline for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes).map_err(ScheduleError::InvalidInput)?;

        let mut now: i64 = 0;
        let mut ready: Vec<Process> = Vec::new();
        let mut admitted: HashSet<String> = HashSet::with_capacity(processes.len());
        let mut timeline = Vec::with_capacity(processes.len());
        let mut rows = Vec::with_capacity(processes.len());

        while rows.len() < processes.len() {
            for process in processes {
                if process.arrival <= now && !admitted.contains(&process.id) {
                    admitted.insert(process.id.clone());
                    ready.push(process.clone());
                }
            }

            // Stable: equal bursts keep their admission order.
            ready.sort_by_key(|p| p.burst);

            if ready.is_empty() {
                now += 1;
                continue;
            }

            let current = ready.remove(0);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_orders_by_burst() {
        let processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 2),
        ];
        let schedule = SjfScheduler::new().run(&processes).unwrap();

        assert_eq!(schedule.timeline, vec![
            TimeSlice::new("P1", 0, 8),
            TimeSlice::new("P3", 8, 10),
            TimeSlice::new("P2", 10, 14),
        ]);

        let p3 = schedule.row_for("P3").unwrap();
        assert_eq!((p3.wait, p3.turnaround), (6, 8));
        let p2 = schedule.row_for("P2").unwrap();
        assert_eq!((p2.wait, p2.turnaround), (7, 13));
    }

    #[test]
    fn test_sjf_idles_until_first_arrival() {
        let processes = vec![Process::new("P1", 3, 2)];
        let schedule = SjfScheduler::new().run(&processes).unwrap();

        assert_eq!(schedule.timeline, vec![TimeSlice::new("P1", 3, 5)]);
        assert_eq!(schedule.row_for("P1").unwrap().wait, 0);
        // The idle ticks count toward elapsed time.
        assert!((schedule.kpi.throughput - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_stable_tie_break() {
        // Equal bursts: admission (input) order decides.
        let processes = vec![
            Process::new("A", 0, 3),
            Process::new("B", 0, 3),
            Process::new("C", 0, 3),
        ];
        let schedule = SjfScheduler::new().run(&processes).unwrap();

        let order: Vec<&str> = schedule
            .timeline
            .iter()
            .map(|s| s.process_id.as_str())
            .collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sjf_never_dispatches_before_arrival() {
        let processes = vec![
            Process::new("P1", 0, 1),
            Process::new("P2", 5, 1),
            Process::new("P3", 4, 2),
        ];
        let schedule = SjfScheduler::new().run(&processes).unwrap();

        for slice in &schedule.timeline {
            let arrival = processes
                .iter()
                .find(|p| p.id == slice.process_id)
                .unwrap()
                .arrival;
            assert!(slice.start >= arrival);
        }
    }

    #[test]
    fn test_sjf_rows_in_completion_order() {
        let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
        let schedule = SjfScheduler::new().run(&processes).unwrap();

        let completions: Vec<i64> = schedule.rows.iter().map(|r| r.completion).collect();
        let mut sorted = completions.clone();
        sorted.sort_unstable();
        assert_eq!(completions, sorted);
    }
}
