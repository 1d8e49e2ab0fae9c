//! CLI command implementations.
//!
//! Each command loads the [`Context`](crate::utils::Context) (grammar,
//! working directory, glob defaults, output format) and forwards to the
//! matching `crosspath::path` operation:
//! - `normalize`, `join`, `resolve`, `relative`: path arithmetic
//! - `dirname`, `basename`, `extname`, `parse`, `format`: decomposition
//! - `is_absolute`, `is_glob`: predicates (exit code 1 when false)
//! - `from_file_url`, `to_file_url`: `file:` URL conversion
//! - `namespace`: Windows `\\?\` paths
//! - `common`: shared leading directory
//! - `completions`: shell completion scripts

pub mod basename;
pub mod common;
pub mod completions;
pub mod dirname;
pub mod extname;
pub mod format;
pub mod from_file_url;
pub mod is_absolute;
pub mod is_glob;
pub mod join;
pub mod namespace;
pub mod normalize;
pub mod parse;
pub mod relative;
pub mod resolve;
pub mod to_file_url;

pub use basename::BasenameCommand;
pub use common::CommonCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use extname::ExtnameCommand;
pub use format::FormatCommand;
pub use from_file_url::FromFileUrlCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use is_glob::IsGlobCommand;
pub use join::JoinCommand;
pub use namespace::NamespaceCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use to_file_url::ToFileUrlCommand;
