use crate::errors::{AppError, AppResult};
use crate::models::report::Report;
use csv::Writer;

/// One record per walked interval, sentinels included.
pub fn render(report: &Report) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record([
        "start",
        "end",
        "interval",
        "duration",
        "hours",
        "man_hours",
        "sentinel",
    ])?;

    for entry in &report.entries {
        wtr.write_record(&[
            entry.start.to_rfc3339(),
            entry.end.to_rfc3339(),
            entry.interval.clone(),
            entry.duration.clone(),
            entry.hours.to_string(),
            entry.man_hours.to_string(),
            entry.sentinel.to_string(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}
