//! Report rendering: plain text, JSON and CSV.

mod csv;
mod fs_utils;
mod json;
mod text;

pub use fs_utils::ensure_writable;

use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Render `report` in the requested format.
///
/// `details` only affects the text format; JSON and CSV always carry the
/// per-interval breakdown.
pub fn render(report: &Report, format: OutputFormat, details: bool) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(text::render(report, details)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Csv => csv::render(report),
    }
}

/// Print `output` to stdout, or write it to `file`.
pub fn emit(output: &str, file: Option<&Path>, force: bool, format: OutputFormat) -> AppResult<()> {
    match file {
        None => {
            print!("{output}");
            Ok(())
        }
        Some(path) => {
            ensure_writable(path, force)?;
            fs::write(path, output)?;
            success(format!(
                "{} report written: {}",
                format.as_str(),
                path.display()
            ));
            Ok(())
        }
    }
}
