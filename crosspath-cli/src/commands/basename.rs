//! Command to print the last segment of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Last segment of a path, optionally without a suffix.
#[derive(Args)]
pub struct BasenameCommand {
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Suffix to strip, unless it is the whole segment
    #[arg(long, value_name = "SUFFIX", default_value = "")]
    pub suffix: OsString,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        let suffix = assert_path(&self.suffix)?;
        ctx.print_str(&ctx.grammar.basename(path, suffix))
    }
}
