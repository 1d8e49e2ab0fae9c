//! Command to join path segments.

use crate::error::CliError;
use crate::utils::{assert_paths, Context, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Join path segments and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join, empty ones are skipped
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<OsString>,

    /// Treat the segments as glob patterns
    #[arg(long)]
    pub glob: bool,

    /// Keep `..` after `**` (implies --glob)
    #[arg(long)]
    pub globstar: bool,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let segments = assert_paths(&self.segments)?;

        let joined = if self.glob || self.globstar {
            ctx.grammar
                .join_globs(&segments, ctx.glob_options(self.globstar))
        } else {
            ctx.grammar.join(&segments)
        };

        ctx.print_str(&joined)
    }
}
