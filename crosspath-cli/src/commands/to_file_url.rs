//! Command to convert an absolute path into a `file:` URL.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Convert an absolute path into a `file:` URL.
#[derive(Args)]
pub struct ToFileUrlCommand {
    /// Absolute path to convert
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl ToFileUrlCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        let url = ctx.grammar.to_file_url(path)?;
        ctx.print_str(url.as_str())
    }
}
