//! Core types for path handling.
//!
//! This module defines the value types shared by both grammars: the
//! decomposed form of a path produced by `parse`, and the options that tune
//! glob-aware normalization.

use serde::{Deserialize, Serialize};

/// A path split into its components.
///
/// Produced by `parse` and consumed by `format` in each grammar. For
/// well-formed input `base == name + ext`, and `format(parse(p))` denotes
/// the same location as `p`.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// let parsed = posix::parse("/home/user/file.txt");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.name, "file");
/// assert_eq!(parsed.ext, ".txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedPath {
    /// The root of the path (`/`, `C:\`, `\\server\share\`), or empty.
    pub root: String,
    /// The directory portion, without trailing separator unless it is the
    /// root itself.
    pub dir: String,
    /// The last segment, including its extension.
    pub base: String,
    /// The extension of `base`, including the leading dot.
    pub ext: String,
    /// `base` without `ext`.
    pub name: String,
}

impl ParsedPath {
    /// Reassemble the components with `separator`.
    ///
    /// `dir` wins over `root`, and `base` wins over `name` + `ext`.
    pub(crate) fn format_with(&self, separator: char) -> String {
        let dir = if self.dir.is_empty() { &self.root } else { &self.dir };
        let base = if self.base.is_empty() {
            format!("{}{}", self.name, self.ext)
        } else {
            self.base.clone()
        };

        if dir.is_empty() {
            return base;
        }
        // A base that is just the separator comes from parsing a bare root
        if base.len() == separator.len_utf8() && base.starts_with(separator) {
            return dir.clone();
        }
        if *dir == self.root {
            return format!("{dir}{base}");
        }
        format!("{dir}{separator}{base}")
    }
}

/// Options for glob-aware normalization and joining.
///
/// # Examples
///
/// ```
/// use crosspath::path::GlobOptions;
///
/// let options = GlobOptions::default().with_globstar(true);
/// assert!(options.globstar);
/// assert!(options.extended);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlobOptions {
    /// Allow extended glob syntax (`?(...)`, `@(...)`, ...). Kept for API
    /// parity; it does not change normalization.
    pub extended: bool,
    /// Treat `**` as a segment that swallows a following `..`.
    pub globstar: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            extended: true,
            globstar: false,
        }
    }
}

impl GlobOptions {
    /// Set the globstar flag.
    #[must_use]
    pub fn with_globstar(mut self, globstar: bool) -> Self {
        self.globstar = globstar;
        self
    }

    /// Set the extended flag.
    #[must_use]
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }
}
