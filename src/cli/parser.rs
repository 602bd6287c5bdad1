use crate::export::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rManhour
#[derive(Parser, Debug)]
#[command(
    name = "rmanhour",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute billable man-hours between two timestamps over a daily work schedule",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the man-hours elapsed between START and END
    Calc {
        /// Start timestamp (ISO-8601, e.g. 2024-01-01T11:00+09:00)
        start: String,

        /// End timestamp (ISO-8601); defaults to now
        end: Option<String>,

        #[arg(long = "work-start", value_name = "HH:MM±HH:MM")]
        work_start: Option<String>,

        #[arg(long = "work-end", value_name = "HH:MM±HH:MM")]
        work_end: Option<String>,

        /// Daily cutoff, resolved on the following day
        #[arg(long = "work-period", value_name = "HH:MM±HH:MM")]
        work_period: Option<String>,

        #[arg(long = "break-start", value_name = "HH:MM±HH:MM")]
        break_start: Option<String>,

        #[arg(long = "break-end", value_name = "HH:MM±HH:MM")]
        break_end: Option<String>,

        /// Rounding granularity in hours (e.g. 0.1, 0.25, 0.5)
        #[arg(long)]
        step: Option<f64>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(long = "details", short = 'd', help = "Show the per-interval breakdown")]
        details: bool,

        #[arg(long, value_name = "FILE", help = "Write the report to FILE instead of stdout")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Write a configuration file with the default schedule
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
