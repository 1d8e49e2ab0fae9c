//! Command to split a path into its components.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::{assert_path, ParsedPath};
use std::ffi::OsString;

/// Split a path into root, dir, base, name and ext.
///
/// Text output prints one `field: value` line per component; JSON output
/// is an object that `format --from-json` accepts back.
#[derive(Args)]
pub struct ParseCommand {
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let path = assert_path(&self.path)?;
        let parsed = ctx.grammar.parse_path(path);
        ctx.print(&parsed, &render(&parsed))
    }
}

fn render(parsed: &ParsedPath) -> String {
    [
        ("root", &parsed.root),
        ("dir", &parsed.dir),
        ("base", &parsed.base),
        ("ext", &parsed.ext),
        ("name", &parsed.name),
    ]
    .iter()
    .map(|(field, value)| format!("{field}: {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}
