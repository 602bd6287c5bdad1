//! Time utilities: parsing ISO-8601 timestamps, formatting durations and hours.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an absolute timestamp.
///
/// Accepts RFC 3339, the minute-precision form `2024-01-01T11:00+09:00`, and
/// offset-less forms which are read in the local timezone.
pub fn parse_instant(s: &str) -> AppResult<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    // `%:z` does not accept the `Z` designator
    let normalized = match s.strip_suffix(['Z', 'z']) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Ok(dt);
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset())
                .ok_or_else(|| AppError::InvalidInstant(s.to_string()));
        }
    }

    Err(AppError::InvalidInstant(s.to_string()))
}

/// Format a duration as ISO-8601, e.g. `PT1H30M`, `P1DT2H`, `PT0S`.
pub fn format_iso_duration(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    if total == 0 {
        return "PT0S".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let abs = total.abs();
    let days = abs / 86_400;
    let hours = (abs % 86_400) / 3600;
    let minutes = (abs % 3600) / 60;
    let seconds = abs % 60;

    let mut out = format!("{sign}P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 {
            out.push_str(&format!("{seconds}S"));
        }
    }

    out
}

/// Format a fixed offset as `Z` or `±HH:MM`.
pub fn format_offset(offset: &FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "Z".to_string();
    }

    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Number of decimals needed to print multiples of `step` exactly.
pub fn decimals_for_step(step: f64) -> usize {
    let repr = step.to_string();
    repr.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

/// Format a man-hour figure using as many decimals as `step` needs.
pub fn format_hours(hours: f64, step: f64) -> String {
    format!("{:.prec$}", hours, prec = decimals_for_step(step))
}
