use crate::errors::AppResult;
use crate::models::report::Report;

/// Pretty-printed JSON document, newline terminated.
pub fn render(report: &Report) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
