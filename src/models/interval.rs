use crate::utils::time::format_iso_duration;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta, Utc};

/// A span of in-schedule time, `start <= end`.
///
/// A zero-length interval is a *sentinel*: the walker emits one where a work
/// boundary was reached but its far endpoint cannot be inferred (a query that
/// starts after hours, or one that ends in the dead zone before the next work
/// start). Sentinels are ordinary values and flow through the report like any
/// other interval, contributing zero hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn sentinel(at: DateTime<Utc>) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_sentinel(&self) -> bool {
        self.start == self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// `<start>/<end>` rendered in `offset`.
    pub fn iso_interval(&self, offset: &FixedOffset) -> String {
        format!(
            "{}/{}",
            self.start
                .with_timezone(offset)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end
                .with_timezone(offset)
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    pub fn iso_duration(&self) -> String {
        format_iso_duration(self.duration())
    }
}
