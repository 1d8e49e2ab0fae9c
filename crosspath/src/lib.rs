#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # crosspath
//!
//! Lexical path manipulation for POSIX and Windows paths, with `file:` URL
//! conversion and glob-aware normalization.
//!
//! Both grammars are always available regardless of the host platform, so
//! a Linux program can manipulate `C:\` paths and vice versa. The
//! [`path::native`] module aliases the grammar of the build target.
//!
//! ## Core Types
//!
//! - [`path::posix`] and [`path::windows`]: the two grammars
//! - [`ParsedPath`] and [`GlobOptions`]: value types shared by both
//! - [`Grammar`]: runtime grammar selection
//! - [`CurrentDir`]: working-directory provider used by `resolve`
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use crosspath::path::{posix, windows};
//!
//! assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
//! assert_eq!(windows::normalize("C:/foo/../bar"), "C:\\bar");
//!
//! let url = posix::to_file_url("/home/user/my file.txt").unwrap();
//! assert_eq!(url.as_str(), "file:///home/user/my%20file.txt");
//! assert_eq!(posix::from_url(&url).unwrap(), "/home/user/my file.txt");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use path::{CurrentDir, GlobOptions, Grammar, ParsedPath, ProcessDir};
