//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use crosspath::config::{Config, ConfigMerger};
///
/// let low = Config { cwd: Some("/low".to_string()), ..Default::default() };
/// let high = Config { cwd: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.cwd, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is a simple override: a `Some` in `source` replaces the
    /// value in `target`, a `None` leaves it alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.grammar.is_some() {
            target.grammar = source.grammar;
        }

        if source.cwd.is_some() {
            target.cwd.clone_from(&source.cwd);
        }

        if source.globstar.is_some() {
            target.globstar = source.globstar;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
