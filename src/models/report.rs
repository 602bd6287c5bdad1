use crate::utils::time::format_offset;
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

fn serialize_offset<S: Serializer>(offset: &FixedOffset, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_offset(offset))
}

/// One walked interval, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalEntry {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// ISO-8601 interval, `<start>/<end>`.
    pub interval: String,
    /// ISO-8601 duration, e.g. `PT2H`.
    pub duration: String,
    pub hours: f64,
    pub man_hours: f64,
    pub sentinel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Offset of the query start; every instant below is shown in it.
    #[serde(serialize_with = "serialize_offset")]
    pub display_offset: FixedOffset,
    pub step: f64,
    pub entries: Vec<IntervalEntry>,
    pub total_hours: f64,
    /// `total_hours` rounded once, not the sum of rounded entries.
    pub total_man_hours: f64,
}
