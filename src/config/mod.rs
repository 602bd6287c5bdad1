use crate::core::rounding::validate_step;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::models::schedule::Schedule;
use crate::models::time_of_day::TimeOfDay;
use chrono::{FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_work_start")]
    pub work_start: TimeOfDay,
    #[serde(default = "default_work_end")]
    pub work_end: TimeOfDay,
    #[serde(default = "default_work_period")]
    pub work_period: TimeOfDay,
    #[serde(default = "default_break_start")]
    pub break_start: TimeOfDay,
    #[serde(default = "default_break_end")]
    pub break_end: TimeOfDay,
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default)]
    pub format: OutputFormat,
}

fn local_offset() -> FixedOffset {
    *Local::now().offset()
}

fn default_schedule() -> Schedule {
    Schedule::default_with_offset(local_offset())
}

fn default_work_start() -> TimeOfDay {
    default_schedule().work_start
}
fn default_work_end() -> TimeOfDay {
    default_schedule().work_end
}
fn default_work_period() -> TimeOfDay {
    default_schedule().work_period
}
fn default_break_start() -> TimeOfDay {
    default_schedule().break_start
}
fn default_break_end() -> TimeOfDay {
    default_schedule().break_end
}
fn default_step() -> f64 {
    0.1
}

impl Default for Config {
    fn default() -> Self {
        Self::from_schedule(default_schedule())
    }
}

impl Config {
    pub fn from_schedule(schedule: Schedule) -> Self {
        Self {
            work_start: schedule.work_start,
            work_end: schedule.work_end,
            work_period: schedule.work_period,
            break_start: schedule.break_start,
            break_end: schedule.break_end,
            step: default_step(),
            format: OutputFormat::default(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rmanhour")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmanhour.conf")
    }

    /// Resolve the config path: explicit override first, then the default location.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom.map(Path::to_path_buf).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let cfg = Self::parse(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Parse and validate YAML content.
    pub fn parse(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults config
        let cfg: Config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_step(self.step)?;
        Ok(())
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            work_start: self.work_start,
            work_end: self.work_end,
            work_period: self.work_period,
            break_start: self.break_start,
            break_end: self.break_end,
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
