//! Run-level schedule metrics.
//!
//! Computed once from the finalized rows, after every process has been
//! serviced; never accumulated incrementally.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Wait | sum of wait times / process count |
//! | Average Turnaround | sum of turnaround times / process count |
//! | Throughput | process count / final simulation clock |
//!
//! A zero process count or a non-positive elapsed time is rejected as
//! [`ScheduleError::DegenerateMetric`] instead of producing Infinity or NaN.

use serde::{Deserialize, Serialize};

use super::ScheduleError;
use crate::models::ScheduleRow;

/// Aggregate performance indicators for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean ticks spent ready-but-not-running.
    pub avg_wait: f64,
    /// Mean ticks from arrival to completion.
    pub avg_turnaround: f64,
    /// Completed processes per tick of elapsed simulation time.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes aggregates from finalized rows and the final simulation clock.
    pub fn calculate(rows: &[ScheduleRow], elapsed: i64) -> Result<Self, ScheduleError> {
        if rows.is_empty() {
            return Err(ScheduleError::DegenerateMetric {
                message: "no completed processes to aggregate".into(),
            });
        }
        if elapsed <= 0 {
            return Err(ScheduleError::DegenerateMetric {
                message: format!("elapsed time must be positive, got {elapsed}"),
            });
        }

        let count = rows.len() as f64;
        let total_wait: i64 = rows.iter().map(|r| r.wait).sum();
        let total_turnaround: i64 = rows.iter().map(|r| r.turnaround).sum();

        Ok(Self {
            avg_wait: total_wait as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            throughput: count / elapsed as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(process_id: &str, wait: i64, turnaround: i64) -> ScheduleRow {
        ScheduleRow {
            process_id: process_id.into(),
            priority: 0,
            burst: turnaround - wait,
            arrival: 0,
            wait,
            turnaround,
            completion: turnaround,
        }
    }

    #[test]
    fn test_kpi_basic() {
        let rows = vec![make_row("P1", 0, 5), make_row("P2", 4, 7)];
        let kpi = ScheduleKpi::calculate(&rows, 8).unwrap();

        assert!((kpi.avg_wait - 2.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_rejects_empty_rows() {
        assert!(matches!(
            ScheduleKpi::calculate(&[], 10),
            Err(ScheduleError::DegenerateMetric { .. })
        ));
    }

    #[test]
    fn test_kpi_rejects_zero_elapsed() {
        let rows = vec![make_row("P1", 0, 5)];
        assert!(matches!(
            ScheduleKpi::calculate(&rows, 0),
            Err(ScheduleError::DegenerateMetric { .. })
        ));
    }
}
