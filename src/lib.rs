//! rManhour library root.
//! Exposes the CLI parser, the high-level run() function, the schedule
//! walker and the report renderers.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::resolve_path(custom.as_deref());

    match &cli.command {
        Commands::Calc { .. } => {
            // config is only needed (and validated) when computing
            let cfg = Config::load(&path)?;
            cli::commands::calc::handle(&cli.command, &cfg)
        }
        Commands::Init { force } => cli::commands::init::handle(&path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    dispatch(&cli)
}
