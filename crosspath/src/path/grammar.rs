//! Runtime selection of a path grammar.
//!
//! The [`posix`] and [`windows`] modules are plain functions. Callers that
//! pick the grammar at runtime (configuration, the command line) go
//! through [`Grammar`], which forwards each operation to the right module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::path::cwd::CurrentDir;
use crate::path::types::{GlobOptions, ParsedPath};
use crate::path::{posix, windows};

/// A path grammar.
///
/// # Examples
///
/// ```
/// use crosspath::path::Grammar;
///
/// let grammar: Grammar = "windows".parse().unwrap();
/// assert_eq!(grammar.normalize("C:/a/../b"), "C:\\b");
/// assert_eq!(Grammar::Posix.join(&["a", "b"]), "a/b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grammar {
    /// `/`-separated paths.
    Posix,
    /// Drive letters, UNC shares, `\` and `/` separators.
    Windows,
}

impl Grammar {
    /// The grammar of the host platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Parse a grammar name: `posix`, `windows` or `native`, in any case.
    ///
    /// # Errors
    ///
    /// Returns a description of the accepted names if `s` is none of them.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            "native" => Ok(Self::native()),
            _ => Err(format!(
                "invalid grammar '{s}', expected 'posix', 'windows' or 'native'"
            )),
        }
    }

    /// Lowercase name of the grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
        }
    }

    /// The segment separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => posix::SEPARATOR,
            Self::Windows => windows::SEPARATOR,
        }
    }

    /// The `PATH` list delimiter.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Posix => posix::DELIMITER,
            Self::Windows => windows::DELIMITER,
        }
    }

    /// See [`posix::resolve_with`] and [`windows::resolve_with`].
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` is consulted and fails.
    pub fn resolve_with<C, S>(self, cwd: &C, segments: &[S]) -> Result<String>
    where
        C: CurrentDir + ?Sized,
        S: AsRef<str>,
    {
        match self {
            Self::Posix => posix::resolve_with(cwd, segments),
            Self::Windows => windows::resolve_with(cwd, segments),
        }
    }

    /// Normalize `path`.
    #[must_use]
    pub fn normalize(self, path: &str) -> String {
        match self {
            Self::Posix => posix::normalize(path),
            Self::Windows => windows::normalize(path),
        }
    }

    /// Normalize `glob` with glob options.
    #[must_use]
    pub fn normalize_glob(self, glob: &str, options: GlobOptions) -> String {
        match self {
            Self::Posix => posix::normalize_glob(glob, options),
            Self::Windows => windows::normalize_glob(glob, options),
        }
    }

    /// Join and normalize `paths`.
    #[must_use]
    pub fn join<S: AsRef<str>>(self, paths: &[S]) -> String {
        match self {
            Self::Posix => posix::join(paths),
            Self::Windows => windows::join(paths),
        }
    }

    /// Join and normalize `globs` with glob options.
    #[must_use]
    pub fn join_globs<S: AsRef<str>>(self, globs: &[S], options: GlobOptions) -> String {
        match self {
            Self::Posix => posix::join_globs(globs, options),
            Self::Windows => windows::join_globs(globs, options),
        }
    }

    /// Whether `path` is absolute.
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            Self::Posix => posix::is_absolute(path),
            Self::Windows => windows::is_absolute(path),
        }
    }

    /// Relative path from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` is consulted and fails.
    pub fn relative_with<C>(self, cwd: &C, from: &str, to: &str) -> Result<String>
    where
        C: CurrentDir + ?Sized,
    {
        match self {
            Self::Posix => posix::relative_with(cwd, from, to),
            Self::Windows => windows::relative_with(cwd, from, to),
        }
    }

    /// Directory portion of `path`.
    #[must_use]
    pub fn dirname(self, path: &str) -> String {
        match self {
            Self::Posix => posix::dirname(path),
            Self::Windows => windows::dirname(path),
        }
    }

    /// Last segment of `path`, minus `suffix`.
    #[must_use]
    pub fn basename(self, path: &str, suffix: &str) -> String {
        match self {
            Self::Posix => posix::basename(path, suffix),
            Self::Windows => windows::basename(path, suffix),
        }
    }

    /// Extension of the last segment of `path`.
    #[must_use]
    pub fn extname(self, path: &str) -> String {
        match self {
            Self::Posix => posix::extname(path),
            Self::Windows => windows::extname(path),
        }
    }

    /// Split `path` into its parts.
    #[must_use]
    pub fn parse_path(self, path: &str) -> ParsedPath {
        match self {
            Self::Posix => posix::parse(path),
            Self::Windows => windows::parse(path),
        }
    }

    /// Assemble a path from its parts.
    #[must_use]
    pub fn format(self, parsed: &ParsedPath) -> String {
        parsed.format_with(self.separator())
    }

    /// Convert a `file:` URL string into a path.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid `file:` URL.
    pub fn from_file_url(self, url: &str) -> Result<String> {
        match self {
            Self::Posix => posix::from_file_url(url),
            Self::Windows => windows::from_file_url(url),
        }
    }

    /// Convert an absolute path into a `file:` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is relative or carries an invalid host.
    pub fn to_file_url(self, path: &str) -> Result<Url> {
        match self {
            Self::Posix => posix::to_file_url(path),
            Self::Windows => windows::to_file_url(path),
        }
    }

    /// Namespaced form of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` is consulted and fails.
    pub fn to_namespaced_path_with<C>(self, cwd: &C, path: &str) -> Result<String>
    where
        C: CurrentDir + ?Sized,
    {
        match self {
            Self::Posix => Ok(posix::to_namespaced_path(path)),
            Self::Windows => windows::to_namespaced_path_with(cwd, path),
        }
    }

    /// Longest common leading directory of `paths`.
    #[must_use]
    pub fn common<S: AsRef<str>>(self, paths: &[S]) -> String {
        match self {
            Self::Posix => posix::common(paths),
            Self::Windows => windows::common(paths),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Grammar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).map_err(|message| Error::Validation {
            field: "grammar".to_string(),
            message,
        })
    }
}

impl TryFrom<String> for Grammar {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Grammar> for String {
    fn from(grammar: Grammar) -> Self {
        grammar.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Grammar::parse("posix").unwrap(), Grammar::Posix);
        assert_eq!(Grammar::parse("POSIX").unwrap(), Grammar::Posix);
        assert_eq!(Grammar::parse("windows").unwrap(), Grammar::Windows);
        assert_eq!(Grammar::parse("win32").unwrap(), Grammar::Windows);
        assert_eq!(Grammar::parse("native").unwrap(), Grammar::native());
        assert!(Grammar::parse("dos").is_err());
    }

    #[test]
    fn test_from_str_error_is_validation() {
        let err = "mac".parse::<Grammar>().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    #[cfg(windows)]
    fn test_native_is_windows() {
        assert_eq!(Grammar::native(), Grammar::Windows);
    }

    #[test]
    #[cfg(not(windows))]
    fn test_native_is_posix() {
        assert_eq!(Grammar::native(), Grammar::Posix);
        assert_eq!(Grammar::default(), Grammar::Posix);
    }

    #[test]
    fn test_display_round_trips() {
        for grammar in [Grammar::Posix, Grammar::Windows] {
            assert_eq!(grammar.to_string().parse::<Grammar>().unwrap(), grammar);
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let yaml = serde_yaml::to_string(&Grammar::Windows).unwrap();
        assert_eq!(yaml.trim(), "windows");
        let parsed: Grammar = serde_yaml::from_str("posix").unwrap();
        assert_eq!(parsed, Grammar::Posix);
        assert!(serde_yaml::from_str::<Grammar>("bogus").is_err());
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(Grammar::Posix.separator(), '/');
        assert_eq!(Grammar::Windows.delimiter(), ';');
        assert_eq!(Grammar::Windows.dirname("C:\\a\\b"), "C:\\a");
        assert_eq!(Grammar::Posix.basename("/a/b.txt", ".txt"), "b");
        assert_eq!(Grammar::Windows.extname("a.b\\c.d"), ".d");
        assert!(Grammar::Windows.is_absolute("C:\\"));
        assert!(!Grammar::Posix.is_absolute("C:\\"));
        assert_eq!(
            Grammar::Posix.resolve_with("/cwd", &["x"]).unwrap(),
            "/cwd/x"
        );
        assert_eq!(
            Grammar::Windows.relative_with("C:\\", "C:\\a", "C:\\b").unwrap(),
            "..\\b"
        );
        assert_eq!(
            Grammar::Posix.to_namespaced_path_with("/", "rel").unwrap(),
            "rel"
        );
        assert_eq!(
            Grammar::Windows.to_namespaced_path_with("C:\\", "rel").unwrap(),
            "\\\\?\\C:\\rel"
        );
    }

    #[test]
    fn test_parse_and_format() {
        let parsed = Grammar::Windows.parse_path("C:\\dir\\file.txt");
        assert_eq!(Grammar::Windows.format(&parsed), "C:\\dir\\file.txt");
    }
}
