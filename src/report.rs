//! Reporting boundary.
//!
//! The core never formats output beyond handing each finished run to a
//! [`ScheduleRenderer`]: a chart title, the ordered Gantt timeline, and the
//! per-process table with its aggregates. [`TextRenderer`] is a plain-text
//! implementation writing to any [`Write`]; richer front-ends (charts,
//! TUIs) implement the trait themselves.

use std::io::Write;

use crate::models::{Schedule, ScheduleRow, TimeSlice};
use crate::scheduler::ScheduleKpi;

/// Sink for a finished schedule.
///
/// Called exactly once per run, in order: title, timeline, table.
pub trait ScheduleRenderer {
    /// Receives the chart title.
    fn render_title(&mut self, title: &str);

    /// Receives the ordered execution intervals.
    fn render_timeline(&mut self, timeline: &[TimeSlice]);

    /// Receives the per-process rows (completion order) and the aggregates.
    fn render_table(&mut self, rows: &[ScheduleRow], kpi: &ScheduleKpi);
}

/// Hands one finished run to a renderer.
pub fn report<R: ScheduleRenderer>(renderer: &mut R, title: &str, schedule: &Schedule) {
    renderer.render_title(title);
    renderer.render_timeline(&schedule.timeline);
    renderer.render_table(&schedule.rows, &schedule.kpi);
}

/// Plain-text renderer.
///
/// Write errors are ignored; the simulation result is already complete by
/// the time rendering starts, and a renderer has no channel to fail through.
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the renderer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ScheduleRenderer for TextRenderer<W> {
    fn render_title(&mut self, title: &str) {
        let _ = writeln!(self.writer, "{title}");
        let _ = writeln!(self.writer, "{}", "-".repeat(title.len()));
    }

    fn render_timeline(&mut self, timeline: &[TimeSlice]) {
        let mut bar = String::from("|");
        for slice in timeline {
            bar.push_str(&format!(" {} {}..{} |", slice.process_id, slice.start, slice.stop));
        }
        let _ = writeln!(self.writer, "{bar}");
    }

    fn render_table(&mut self, rows: &[ScheduleRow], kpi: &ScheduleKpi) {
        let _ = writeln!(
            self.writer,
            "{:<10} {:>8} {:>6} {:>8} {:>6} {:>11} {:>11}",
            "ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Completion"
        );
        for row in rows {
            let _ = writeln!(
                self.writer,
                "{:<10} {:>8} {:>6} {:>8} {:>6} {:>11} {:>11}",
                row.process_id,
                row.priority,
                row.burst,
                row.arrival,
                row.wait,
                row.turnaround,
                row.completion
            );
        }
        let _ = writeln!(self.writer, "Average wait:       {:.2}", kpi.avg_wait);
        let _ = writeln!(self.writer, "Average turnaround: {:.2}", kpi.avg_turnaround);
        let _ = writeln!(
            self.writer,
            "Throughput:         {:.2} processes/tick",
            kpi.throughput
        );
    }
}
