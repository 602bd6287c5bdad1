use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "{} does not exist, built-in defaults apply",
                    path.display()
                ));
            } else {
                match Config::load(path) {
                    Ok(_) => success(format!("{} is valid", path.display())),
                    Err(e) => {
                        error(&e);
                        return Err(e);
                    }
                }
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = Config::load(path)?;
            println!("# {}", path.display());
            print!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{}'", editor_to_use));
            return Ok(());
        }
        _ => warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            default_editor
        ))),
    }
}
