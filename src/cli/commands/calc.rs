use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::rounding::validate_step;
use crate::errors::AppResult;
use crate::export;
use crate::models::schedule::Schedule;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_instant;
use chrono::Local;
use tracing::info;

/// Handle the `calc` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        start,
        end,
        work_start,
        work_end,
        work_period,
        break_start,
        break_end,
        step,
        format,
        details,
        file,
        force,
    } = cmd
    {
        // CLI flag > config file > built-in default
        let base = cfg.schedule();
        let schedule = Schedule {
            work_start: pick(work_start, base.work_start)?,
            work_end: pick(work_end, base.work_end)?,
            work_period: pick(work_period, base.work_period)?,
            break_start: pick(break_start, base.break_start)?,
            break_end: pick(break_end, base.break_end)?,
        };
        let step = validate_step(step.unwrap_or(cfg.step))?;

        let start = parse_instant(start)?;
        let end = match end {
            Some(e) => parse_instant(e)?,
            None => Local::now().fixed_offset(),
        };

        info!(%start, %end, step, "computing man-hours");

        let report = Core::build_report(start, end, &schedule, step)?;

        let format = format.unwrap_or(cfg.format);
        let output = export::render(&report, format, *details)?;
        let file = file.as_deref().map(expand_tilde);

        export::emit(&output, file.as_deref(), *force, format)?;
    }

    Ok(())
}

fn pick(flag: &Option<String>, fallback: TimeOfDay) -> AppResult<TimeOfDay> {
    match flag {
        Some(raw) => raw.parse(),
        None => Ok(fallback),
    }
}
