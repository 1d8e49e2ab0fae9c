//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Extension of the last segment, including the dot.
#[derive(Args)]
pub struct ExtnameCommand {
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        ctx.print_str(&ctx.grammar.extname(path))
    }
}
