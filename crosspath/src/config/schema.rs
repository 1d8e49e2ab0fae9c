//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered on top of each other; the accessors on [`Config`] supply
//! the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::path::{GlobOptions, Grammar};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use crosspath::config::{Config, OutputFormat};
/// use crosspath::path::Grammar;
///
/// let config: Config = serde_yaml::from_str("grammar: windows\nglobstar: true\n").unwrap();
/// assert_eq!(config.grammar, Some(Grammar::Windows));
/// assert!(config.glob_options().globstar);
/// assert_eq!(config.output_format(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path grammar used when none is given explicitly.
    pub grammar: Option<Grammar>,

    /// Working directory used by `resolve` instead of the process one.
    pub cwd: Option<String>,

    /// Default for [`GlobOptions::globstar`].
    pub globstar: Option<bool>,

    /// Output format for command results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured grammar, or the host grammar.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar.unwrap_or_default()
    }

    /// Glob options with the configured globstar default.
    #[must_use]
    pub fn glob_options(&self) -> GlobOptions {
        GlobOptions::default().with_globstar(self.globstar.unwrap_or(false))
    }

    /// The configured output format, or [`OutputFormat::Text`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use crosspath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// JSON values.
    Json,
}

impl OutputFormat {
    /// Parses an output format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format '{s}', expected 'text' or 'json'")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
