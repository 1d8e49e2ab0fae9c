//! Command to find the shared leading directory of several paths.

use crate::error::CliError;
use crate::utils::{assert_paths, Context, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Longest common leading directory of the given paths.
///
/// Segments are compared exactly; paths are not normalized first.
#[derive(Args)]
pub struct CommonCommand {
    #[arg(value_name = "PATH")]
    pub paths: Vec<OsString>,
}

impl CommonCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let paths = assert_paths(&self.paths)?;
        ctx.print_str(&ctx.grammar.common(&paths))
    }
}
