//! Lexical path manipulation for POSIX and Windows path grammars.
//!
//! Nothing in this module touches the filesystem. Paths are plain strings
//! and every operation is a pure string transformation, except that
//! `resolve` (and the functions built on it) may ask a [`CurrentDir`] for
//! the working directory.
//!
//! # Grammars
//!
//! - [`posix`]: `/` separators, absolute paths start with `/`.
//! - [`windows`]: `\` and `/` separators, drive letters (`C:`), drive
//!   roots (`C:\`) and UNC shares (`\\server\share`).
//! - [`native`]: whichever of the two matches the build target.
//!
//! [`Grammar`] selects one of them at runtime.
//!
//! # Examples
//!
//! ```
//! use crosspath::path::{posix, windows};
//!
//! assert_eq!(posix::join(&["/foo", "bar", "..", "baz"]), "/foo/baz");
//! assert_eq!(windows::join(&["C:\\foo", "bar", "..", "baz"]), "C:\\foo\\baz");
//!
//! let parsed = windows::parse("\\\\server\\share");
//! assert_eq!(parsed.root, "\\\\server\\share");
//! assert_eq!(parsed.base, "\\");
//! ```
//!
//! # Globs
//!
//! [`is_glob`] detects glob syntax. `normalize_glob` and `join_globs` in
//! each grammar normalize glob patterns; with
//! [`GlobOptions::globstar`] a `..` right after `**` is kept.
//!
//! ```
//! use crosspath::path::{is_glob, posix, GlobOptions};
//!
//! assert!(is_glob("src/**/*.rs"));
//! let globstar = GlobOptions::default().with_globstar(true);
//! assert_eq!(posix::join_globs(&["src/**", "..", "lib"], globstar), "src/**/../lib");
//! ```

pub mod assert;
pub mod common;
pub mod cwd;
mod file_url;
pub mod glob;
mod grammar;
pub mod normalize;
pub mod posix;
mod types;
pub mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// The grammar of the build target.
#[cfg(windows)]
pub use windows as native;

/// The grammar of the build target.
#[cfg(not(windows))]
pub use posix as native;

// Re-export key types
pub use assert::assert_path;
pub use cwd::{CurrentDir, ProcessDir};
pub use glob::is_glob;
pub use grammar::Grammar;
pub use types::{GlobOptions, ParsedPath};
