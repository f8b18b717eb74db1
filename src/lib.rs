//! Discrete-event CPU scheduling simulator.
//!
//! Computes, for a fixed set of processes (arrival time, burst duration,
//! priority), the execution timeline and performance metrics that four
//! classic scheduling disciplines would produce: first-come-first-served,
//! shortest-job-first, non-preemptive priority scheduling, and preemptive
//! round-robin with a configurable time quantum.
//!
//! # Modules
//!
//! - **`models`**: domain types: `Process`, `TimeSlice`, `ScheduleRow`, `Schedule`
//! - **`scheduler`**: the four engines, the `Discipline` contract, and
//!   `ScheduleKpi` aggregates
//! - **`validation`**: input integrity checks (empty sets, duplicate IDs,
//!   negative times)
//! - **`report`**: the rendering boundary and a plain-text renderer
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{Discipline, SjfScheduler};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 8),
//!     Process::new("P2", 1, 4),
//!     Process::new("P3", 2, 2),
//! ];
//!
//! let schedule = SjfScheduler::new().run(&processes).unwrap();
//! assert_eq!(schedule.makespan(), 14);
//! assert_eq!(schedule.rows.len(), 3);
//! ```
//!
//! Each engine is a pure function of its input: the caller's process list is
//! never mutated, and rerunning a discipline on the same input produces an
//! identical schedule.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
