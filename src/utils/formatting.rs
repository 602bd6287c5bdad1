//! Formatting utilities used for CLI outputs.

/// Fractional hours as `HHh MMm`, rounded to the nearest minute.
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
