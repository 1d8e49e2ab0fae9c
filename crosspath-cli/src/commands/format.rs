//! Command to assemble a path from its components.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use crosspath::path::ParsedPath;

/// Assemble a path from root, dir, base, name and ext.
///
/// `dir` wins over `root` and `base` wins over `name` + `ext`.
#[derive(Args)]
pub struct FormatCommand {
    /// Root of the path
    #[arg(long, value_name = "ROOT")]
    pub root: Option<String>,

    /// Directory part
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Last segment including extension
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,

    /// Last segment without extension
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Extension including the dot
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Read the components from a JSON object, as printed by
    /// `parse --format json`; flags override its fields
    #[arg(long, value_name = "JSON")]
    pub from_json: Option<String>,
}

impl FormatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let parsed = self.components()?;
        ctx.print_str(&ctx.grammar.format(&parsed))
    }

    fn components(self) -> Result<ParsedPath, CliError> {
        let mut parsed = match &self.from_json {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| CliError::InvalidArguments(format!("invalid --from-json: {e}")))?,
            None => ParsedPath::default(),
        };

        let overrides = [
            (self.root, &mut parsed.root),
            (self.dir, &mut parsed.dir),
            (self.base, &mut parsed.base),
            (self.name, &mut parsed.name),
            (self.ext, &mut parsed.ext),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        Ok(parsed)
    }
}
