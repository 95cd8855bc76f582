//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, one object per field
//! with its value and where it came from (`default`, `file`, or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 1000,
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
/// Returns `CliError::Config` if the configuration cannot be loaded and
/// `CliError::Io` if writing to `out` fails.
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
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "opponent": {
            "value": config.opponent,
            "source": sources.opponent,
        },
        "opponent_delay_ms": {
            "value": config.opponent_delay_ms,
            "source": sources.opponent_delay_ms,
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

    fn clear_env() {
        for var in [
            config::CONFIG_ENV,
            config::SEED_ENV,
            config::STARTING_STACK_ENV,
            config::OPPONENT_ENV,
            config::OPPONENT_DELAY_ENV,
        ] {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn prints_every_field_with_its_source() {
        clear_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        handle_cfg_command(&mut out, &mut err).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
        assert_eq!(json["starting_stack"]["source"].as_str(), Some("default"));
        assert!(json["seed"]["value"].is_null());
        assert_eq!(json["opponent"]["value"].as_str(), Some("reference"));
        assert_eq!(json["opponent_delay_ms"]["value"].as_u64(), Some(1000));
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn env_values_are_marked_env() {
        clear_env();
        unsafe {
            std::env::set_var(config::OPPONENT_ENV, "passive");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        result.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["opponent"]["value"].as_str(), Some("passive"));
        assert_eq!(json["opponent"]["source"].as_str(), Some("env"));
    }

    #[test]
    #[serial]
    fn invalid_configuration_is_reported() {
        clear_env();
        unsafe {
            std::env::set_var(config::STARTING_STACK_ENV, "0");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.starts_with("Error: Invalid configuration"));
    }
}
