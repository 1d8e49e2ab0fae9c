//! Builder assembling the final configuration from all sources.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// Precedence, highest first: [`with_config`](Self::with_config),
/// environment variables, [`with_config_file`](Self::with_config_file),
/// the project `crosspath.yaml`, the user `~/.crosspath/config.yaml`, then
/// built-in defaults.
///
/// # Examples
///
/// ```
/// use crosspath::config::{Config, ConfigBuilder};
/// use crosspath::path::Grammar;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         grammar: Some(Grammar::Windows),
///         ..Config::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.grammar(), Grammar::Windows);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project discovery from `dir` instead of the process working
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user configuration from `dir/config.yaml` instead of
    /// `~/.crosspath/config.yaml`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Load an explicit configuration file on top of discovered ones.
    ///
    /// The file is loaded even when [`skip_files`](Self::skip_files) is set.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply `config` with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Skip user and project configuration discovery.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip `CROSSPATH_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load, merge and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// or an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(
                &working_dir,
                self.user_dir.as_deref(),
            )?);
        }

        if let Some(path) = self.config_file {
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: 3,
                config,
            });
        }

        for source in &sources {
            log::debug!(
                "configuration source {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::config::schema::OutputFormat;
    use crate::path::Grammar;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_file_loaded_when_skipping_discovery() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "output_format: json\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config_file(&path)
            .build()
            .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "grammar: posix\n").unwrap();
        let user = TempDir::new().unwrap();
        let explicit = project.path().join("override.yaml");
        fs::write(&explicit, "grammar: windows\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .with_config_file(&explicit)
            .build()
            .unwrap();
        assert_eq!(config.grammar, Some(Grammar::Windows));
    }

    #[test]
    fn test_programmatic_overrides_everything() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "cwd: /project\n").unwrap();
        let user = TempDir::new().unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .with_config(Config {
                cwd: Some("/override".to_string()),
                ..Config::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.cwd.as_deref(), Some("/override"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config_file(Path::new("/nonexistent/crosspath.yaml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "globstar: false\n").unwrap();
        let user = TempDir::new().unwrap();

        env::set_var("CROSSPATH_GLOBSTAR", "true");
        let result = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .build();
        env::remove_var("CROSSPATH_GLOBSTAR");

        assert_eq!(result.unwrap().globstar, Some(true));
    }
}
