//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `CROSSPATH_*` environment variables
//! that override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::path::Grammar;
use std::env;

/// Selects the path grammar (`posix`, `windows`, `native`).
pub const GRAMMAR_ENV: &str = "CROSSPATH_GRAMMAR";
/// Overrides the working directory used by `resolve`.
pub const CWD_ENV: &str = "CROSSPATH_CWD";
/// Default for the globstar glob option.
pub const GLOBSTAR_ENV: &str = "CROSSPATH_GLOBSTAR";
/// Output format (`text`, `json`).
pub const OUTPUT_FORMAT_ENV: &str = "CROSSPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use crosspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset variables leave the corresponding field untouched; an empty
    /// `CROSSPATH_CWD` is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown grammar, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(GRAMMAR_ENV) {
            config.grammar = Some(Grammar::parse(&value).map_err(|message| Error::Validation {
                field: GRAMMAR_ENV.into(),
                message,
            })?);
        }

        if let Ok(cwd) = env::var(CWD_ENV) {
            if !cwd.is_empty() {
                config.cwd = Some(cwd);
            }
        }

        if let Ok(value) = env::var(GLOBSTAR_ENV) {
            config.globstar = Some(Self::parse_bool(GLOBSTAR_ENV, &value)?);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::parse(&value).map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
