//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CommonCommand, CompletionsCommand, DirnameCommand, ExtnameCommand,
    FormatCommand, FromFileUrlCommand, IsAbsoluteCommand, IsGlobCommand, JoinCommand,
    NamespaceCommand, NormalizeCommand, ParseCommand, RelativeCommand, ResolveCommand,
    ToFileUrlCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use crosspath::config::OutputFormat;
use crosspath::path::Grammar;
use std::path::PathBuf;

/// Command-line tool for POSIX and Windows path manipulation.
#[derive(Parser)]
#[command(name = "crosspath")]
#[command(version, about = "Manipulate POSIX and Windows paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar: posix, windows or native
    #[arg(
        long,
        value_name = "GRAMMAR",
        global = true,
        env = "CROSSPATH_GRAMMAR",
        value_parser = Grammar::parse
    )]
    pub grammar: Option<Grammar>,

    /// Working directory used to resolve relative paths
    #[arg(long, value_name = "PATH", global = true, env = "CROSSPATH_CWD")]
    pub cwd: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        env = "CROSSPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: Option<OutputFormat>,

    /// Load an additional configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore user and project configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Global options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            grammar: self.grammar,
            cwd: self.cwd.clone().filter(|cwd| !cwd.is_empty()),
            format: self.format,
            config: self.config.clone(),
            no_config: self.no_config,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path, resolving `.` and `..` segments
    Normalize(NormalizeCommand),

    /// Join path segments and normalize the result
    Join(JoinCommand),

    /// Resolve segments into an absolute path
    Resolve(ResolveCommand),

    /// Relative path from one location to another
    Relative(RelativeCommand),

    /// Directory part of a path
    Dirname(DirnameCommand),

    /// Last segment of a path
    Basename(BasenameCommand),

    /// Extension of the last segment
    Extname(ExtnameCommand),

    /// Split a path into root, dir, base, name and ext
    Parse(ParseCommand),

    /// Assemble a path from its parts
    Format(FormatCommand),

    /// Check whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Convert a file URL into a path
    FromFileUrl(FromFileUrlCommand),

    /// Convert an absolute path into a file URL
    ToFileUrl(ToFileUrlCommand),

    /// Namespaced (`\\?\`) form of a Windows path
    Namespace(NamespaceCommand),

    /// Longest common leading directory of several paths
    Common(CommonCommand),

    /// Check whether a string contains glob syntax
    IsGlob(IsGlobCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
