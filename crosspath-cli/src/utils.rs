//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: loading the
//! layered configuration, turning raw arguments into path strings and
//! printing results in the selected output format.

use crate::error::CliError;
use crosspath::config::OutputFormat;
use crosspath::path::{assert_path, CurrentDir, GlobOptions, Grammar, ProcessDir};
use crosspath::{Config, ConfigBuilder};
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path grammar to use.
    pub grammar: Option<Grammar>,

    /// Working directory for resolution.
    pub cwd: Option<String>,

    /// Output format.
    pub format: Option<OutputFormat>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Skip user and project configuration files.
    pub no_config: bool,
}

/// Settings every command runs with, after merging flags, environment and
/// configuration files.
#[derive(Debug, Clone)]
pub struct Context {
    /// Grammar the command operates in.
    pub grammar: Grammar,
    /// Fixed working directory, or `None` for the process one.
    pub cwd: Option<String>,
    /// Glob defaults from configuration.
    pub glob: GlobOptions,
    /// How results are printed.
    pub format: OutputFormat,
}

impl Context {
    /// Load the configuration and derive the command context.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let context = Self {
            grammar: config.grammar(),
            cwd: config.cwd.clone(),
            glob: config.glob_options(),
            format: config.output_format(),
        };
        log::debug!(
            "grammar {}, cwd {}, output {}",
            context.grammar,
            context.cwd.as_deref().unwrap_or("<process>"),
            context.format
        );
        Ok(context)
    }

    /// The working directory provider for `resolve` and friends.
    pub fn working_dir(&self) -> &dyn CurrentDir {
        match &self.cwd {
            Some(dir) => dir,
            None => &ProcessDir,
        }
    }

    /// Glob options, forcing globstar on when `globstar` is set.
    pub fn glob_options(&self, globstar: bool) -> GlobOptions {
        if globstar {
            self.glob.with_globstar(true)
        } else {
            self.glob
        }
    }

    /// Print `value` in the configured format. Text output prints `text`.
    pub fn print<T: Serialize + ?Sized>(&self, value: &T, text: &str) -> Result<(), CliError> {
        print_output(self.format, value, text)
    }

    /// Print a string result.
    pub fn print_str(&self, value: &str) -> Result<(), CliError> {
        self.print(value, value)
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Project and user configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if global.no_config {
        builder = builder.skip_files();
    }
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        grammar: global.grammar,
        cwd: global.cwd.clone(),
        globstar: None,
        output_format: global.format,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Check that every raw argument is a valid path string.
pub fn assert_paths(paths: &[OsString]) -> Result<Vec<&str>, CliError> {
    paths
        .iter()
        .map(|path| assert_path(path).map_err(CliError::from))
        .collect()
}

/// Print `value` as JSON, or `text` as a plain line.
pub fn print_output<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
