//! Configuration system for crosspath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `crosspath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! The path engine itself never reads configuration. Callers (the CLI in
//! particular) use it to pick a grammar, a working directory and glob
//! defaults, then pass those to the path functions explicitly.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CROSSPATH_*`)
//! 3. Explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `crosspath.yaml`)
//! 5. User config (`~/.crosspath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use crosspath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("grammar: {}", config.grammar());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use crosspath::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     cwd: Some("/srv/app".to_string()),
//!     globstar: Some(true),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cwd, Some("/srv/app".to_string()));
//! assert!(config.glob_options().globstar);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
