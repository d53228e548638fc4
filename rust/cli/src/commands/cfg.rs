//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays the current Doumate
//! configuration settings with their sources (default, environment, or
//! configuration file).

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seat": {
            "value": config.seat,
            "source": sources.seat,
        },
        "suggestions": {
            "value": config.suggestions,
            "source": sources.suggestions,
        },
        "oracles": {
            "value": config.oracles,
            "source": sources.oracles,
        },
        "log_path": {
            "value": config.log_path,
            "source": sources.log_path,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
