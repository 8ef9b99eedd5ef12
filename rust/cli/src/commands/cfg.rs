//! Configuration command handler.
//!
//! Displays the resolved configuration as JSON, each value paired with where
//! it came from (`default`, `file`, or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "target": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   "players": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "target": {
            "value": config.target,
            "source": sources.target,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn cfg_prints_defaults_with_sources() {
        for key in [
            config::CONFIG_ENV,
            config::TARGET_ENV,
            config::PLAYERS_ENV,
            config::SEED_ENV,
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["target"]["value"], 100);
        assert_eq!(json["target"]["source"], "default");
        assert!(json["players"]["value"].is_null());
        assert!(json["seed"]["value"].is_null());
    }

    #[test]
    #[serial]
    fn cfg_reports_env_override() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::set_var(config::TARGET_ENV, "50");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(&mut out);
        unsafe {
            std::env::remove_var(config::TARGET_ENV);
        }
        result.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["target"]["value"], 50);
        assert_eq!(json["target"]["source"], "env");
    }
}
