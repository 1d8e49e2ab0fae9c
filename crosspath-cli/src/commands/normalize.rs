//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Normalize a path, resolving `.` and `..` segments.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Treat the path as a glob pattern
    #[arg(long)]
    pub glob: bool,

    /// Keep `..` after `**` (implies --glob)
    #[arg(long)]
    pub globstar: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;

        let normalized = if self.glob || self.globstar {
            ctx.grammar
                .normalize_glob(path, ctx.glob_options(self.globstar))
        } else {
            ctx.grammar.normalize(path)
        };

        ctx.print_str(&normalized)
    }
}
