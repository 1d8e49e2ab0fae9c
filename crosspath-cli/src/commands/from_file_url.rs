//! Command to convert a `file:` URL into a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Convert a `file:` URL into a path.
#[derive(Args)]
pub struct FromFileUrlCommand {
    /// URL to convert, e.g. file:///home/user/file.txt
    #[arg(value_name = "URL")]
    pub url: String,
}

impl FromFileUrlCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = ctx.grammar.from_file_url(&self.url)?;
        ctx.print_str(&path)
    }
}
