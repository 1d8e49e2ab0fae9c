//! Command to check whether a path is absolute.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Check whether a path is absolute.
///
/// Prints the answer and exits with status 1 when it is `false`.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        let absolute = ctx.grammar.is_absolute(path);

        ctx.print(&absolute, &absolute.to_string())?;
        if absolute {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{path} is not an absolute {} path",
                ctx.grammar
            )))
        }
    }
}
