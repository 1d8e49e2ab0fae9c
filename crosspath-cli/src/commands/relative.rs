//! Command to compute a relative path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Relative path from `FROM` to `TO`.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting location
    #[arg(value_name = "FROM")]
    pub from: OsString,

    /// Target location
    #[arg(value_name = "TO")]
    pub to: OsString,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let from = assert_path(&self.from)?;
        let to = assert_path(&self.to)?;

        let relative = ctx.grammar.relative_with(ctx.working_dir(), from, to)?;
        ctx.print_str(&relative)
    }
}
