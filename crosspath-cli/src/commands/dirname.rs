//! Command to print the directory part of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Directory part of a path.
#[derive(Args)]
pub struct DirnameCommand {
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        ctx.print_str(&ctx.grammar.dirname(path))
    }
}
