//! Scheduling domain models.
//!
//! Provides the core data types for describing a simulation input (a fixed
//! process set) and its solution (an execution timeline plus per-process
//! timing records).
//!
//! # Time Representation
//! All times are integer ticks relative to a simulation epoch (t=0). The
//! consumer defines what one tick means (e.g., a millisecond, a CPU slice).

mod process;
mod schedule;
mod timeline;

pub use process::Process;
pub use schedule::{Schedule, ScheduleRow};
pub use timeline::TimeSlice;
