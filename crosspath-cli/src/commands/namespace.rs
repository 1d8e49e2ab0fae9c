//! Command to print the namespaced form of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::assert_path;
use std::ffi::OsString;

/// Namespaced form of a path.
///
/// Under the Windows grammar drive paths become `\\?\C:\...` and UNC paths
/// `\\?\UNC\server\share\...`; under POSIX the path is printed unchanged.
#[derive(Args)]
pub struct NamespaceCommand {
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl NamespaceCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        let namespaced = ctx.grammar.to_namespaced_path_with(ctx.working_dir(), path)?;
        ctx.print_str(&namespaced)
    }
}
