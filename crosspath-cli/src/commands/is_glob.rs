//! Command to check whether a string contains glob syntax.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::{assert_path, is_glob};
use std::ffi::OsString;

/// Check whether a string contains glob syntax.
///
/// Prints the answer and exits with status 1 when it is `false`.
#[derive(Args)]
pub struct IsGlobCommand {
    #[arg(value_name = "PATTERN")]
    pub pattern: OsString,
}

impl IsGlobCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let pattern = assert_path(&self.pattern)?;
        let glob = is_glob(pattern);

        ctx.print(&glob, &glob.to_string())?;
        if glob {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!("{pattern} is not a glob")))
        }
    }
}
