//! Scheduling engines and aggregate metrics.
//!
//! Four independent disciplines share one contract ([`Discipline`]): consume
//! a fixed process set, simulate time advancement and dispatch decisions,
//! and produce a complete [`Schedule`] (timeline, per-process rows, KPIs).
//! No engine depends on another; they may run on the same input in parallel
//! since each builds its own private working state.
//!
//! | Engine | Policy | Preemptive |
//! |--------|--------|------------|
//! | [`FcfsScheduler`] | input order as given | no |
//! | [`SjfScheduler`] | shortest burst first | no |
//! | [`PriorityScheduler`] | priority, burst tie-break | no |
//! | [`RoundRobinScheduler`] | FIFO with fixed quantum | yes |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

use std::fmt;

use crate::models::{Process, Schedule};
use crate::validation::ValidationError;

/// Terminal failure for one scheduling run.
///
/// Simulation is deterministic and idempotent, so there is no partial
/// recovery: callers correct the input and re-invoke.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The input was rejected before simulation started.
    InvalidInput(Vec<ValidationError>),
    /// A metric denominator (process count or elapsed time) was zero.
    DegenerateMetric {
        /// Which denominator degenerated.
        message: String,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem(s)", errors.len())?;
                if let Some(first) = errors.first() {
                    write!(f, ", first: {}", first.message)?;
                }
                write!(f, ")")
            }
            ScheduleError::DegenerateMetric { message } => {
                write!(f, "degenerate metric: {message}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// A scheduling discipline.
///
/// Engines are pure functions of their input: the same process set always
/// produces the same schedule, and the caller's slice is never mutated.
pub trait Discipline {
    /// Discipline name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs the full simulation synchronously and returns the complete
    /// schedule, or a single terminal error for the run.
    fn run(&self, processes: &[Process]) -> Result<Schedule, ScheduleError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use std::collections::HashSet;

    fn engines() -> Vec<Box<dyn Discipline>> {
        vec![
            Box::new(FcfsScheduler::new()),
            Box::new(SjfScheduler::new()),
            Box::new(PriorityScheduler::new()),
            Box::new(RoundRobinScheduler::new()),
        ]
    }

    fn random_processes(rng: &mut StdRng) -> Vec<Process> {
        let count = rng.random_range(1..=8);
        let mut arrivals: Vec<i64> = (0..count).map(|_| rng.random_range(0..=20)).collect();
        // FCFS expects the caller to present processes in arrival order.
        arrivals.sort_unstable();

        arrivals
            .into_iter()
            .enumerate()
            .map(|(i, arrival)| {
                Process::new(format!("P{i}"), arrival, rng.random_range(1..=9))
                    .with_priority(rng.random_range(0..=5))
            })
            .collect()
    }

    #[test]
    fn test_every_engine_conserves_processes() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let processes = random_processes(&mut rng);
            let input_ids: HashSet<&str> = processes.iter().map(|p| p.id.as_str()).collect();

            for engine in engines() {
                let schedule = engine.run(&processes).unwrap();
                assert_eq!(
                    schedule.rows.len(),
                    processes.len(),
                    "{} must produce one row per process",
                    engine.name()
                );

                let row_ids: HashSet<&str> =
                    schedule.rows.iter().map(|r| r.process_id.as_str()).collect();
                assert_eq!(row_ids, input_ids, "{} row IDs diverged", engine.name());

                // Every process receives exactly its burst in CPU time.
                for process in &processes {
                    assert_eq!(schedule.total_service(&process.id), process.burst);
                }
            }
        }
    }

    #[test]
    fn test_every_engine_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let processes = random_processes(&mut rng);
        let before = processes.clone();

        for engine in engines() {
            let first = engine.run(&processes).unwrap();
            let second = engine.run(&processes).unwrap();
            assert_eq!(first, second, "{} is not deterministic", engine.name());
            assert_eq!(processes, before, "{} mutated its input", engine.name());
        }
    }

    #[test]
    fn test_every_engine_rejects_invalid_input() {
        let bad = vec![Process::new("P1", -1, 0)];
        for engine in engines() {
            match engine.run(&bad) {
                Err(ScheduleError::InvalidInput(errors)) => assert_eq!(errors.len(), 2),
                other => panic!("{} accepted invalid input: {other:?}", engine.name()),
            }
        }
    }

    #[test]
    fn test_error_display() {
        let err = ScheduleError::DegenerateMetric {
            message: "elapsed time is zero".into(),
        };
        assert!(err.to_string().contains("elapsed time is zero"));
    }
}
