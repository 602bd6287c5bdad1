use crate::core::rounding::{round_up, validate_step};
use crate::core::walker::walk;
use crate::errors::{AppError, AppResult};
use crate::models::interval::Interval;
use crate::models::report::{IntervalEntry, Report};
use crate::models::schedule::Schedule;
use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

pub struct Core;

impl Core {
    /// Walk `[start, end]` over `schedule` and price every interval.
    ///
    /// Instants in the report are shown in the offset of `start`.
    pub fn build_report(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        schedule: &Schedule,
        step: f64,
    ) -> AppResult<Report> {
        let step = validate_step(step)?;
        if start > end {
            return Err(AppError::InvalidRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        let intervals = walk(start.with_timezone(&Utc), end.with_timezone(&Utc), schedule);
        let offset = *start.offset();

        let entries: Vec<IntervalEntry> = intervals
            .iter()
            .map(|iv| Self::build_entry(iv, &offset, step))
            .collect();

        let total_hours: f64 = entries.iter().map(|e| e.hours).sum();
        let total_man_hours = round_up(total_hours, step);

        debug!(
            intervals = entries.len(),
            sentinels = entries.iter().filter(|e| e.sentinel).count(),
            total_hours,
            total_man_hours,
            "report built"
        );

        Ok(Report {
            start,
            end,
            display_offset: offset,
            step,
            entries,
            total_hours,
            total_man_hours,
        })
    }

    fn build_entry(interval: &Interval, offset: &FixedOffset, step: f64) -> IntervalEntry {
        let hours = interval.hours();

        IntervalEntry {
            start: interval.start.with_timezone(offset),
            end: interval.end.with_timezone(offset),
            interval: interval.iso_interval(offset),
            duration: interval.iso_duration(),
            hours,
            man_hours: round_up(hours, step),
            sentinel: interval.is_sentinel(),
        }
    }
}
