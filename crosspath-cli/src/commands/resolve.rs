//! Command to resolve segments into an absolute path.

use crate::error::CliError;
use crate::utils::{assert_paths, Context, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Resolve segments right to left into an absolute path.
///
/// Relative results are anchored at `--cwd` (or the configured working
/// directory), falling back to the process working directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Segments to resolve
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<OsString>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let segments = assert_paths(&self.segments)?;

        let resolved = ctx.grammar.resolve_with(ctx.working_dir(), &segments)?;
        ctx.print_str(&resolved)
    }
}
