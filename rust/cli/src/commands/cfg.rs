//! Configuration command handler.
//!
//! Displays the resolved configuration with the layer each value came from
//! (default, file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "ante": {
//!     "value": 10,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
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
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "ante": {
            "value": config.ante,
            "source": sources.ante,
        },
        "raise_increment": {
            "value": config.raise_increment,
            "source": sources.raise_increment,
        },
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "opponents": {
            "value": config.opponents,
            "source": sources.opponents,
        },
        "draw_style": {
            "value": config.draw_style.to_string(),
            "source": sources.draw_style,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
