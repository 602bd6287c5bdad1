use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the built-in default schedule to the configuration file, using the
/// machine's current UTC offset for every time of day.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let cfg = Config::default();
    cfg.save(path)?;

    info(format!(
        "Schedule: work {}–{}, break {}–{}, cutoff {}",
        cfg.work_start, cfg.work_end, cfg.break_start, cfg.break_end, cfg.work_period
    ));
    success(format!("Config file: {}", path.display()));

    Ok(())
}
