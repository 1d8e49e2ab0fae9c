//! Main entry point for the crosspath CLI.
//!
//! This is the command-line interface for the crosspath path engine. Every
//! `crosspath::path` operation is exposed as a subcommand, under either
//! the POSIX or the Windows grammar:
//! - `normalize`, `join`, `resolve`, `relative`: path arithmetic
//! - `dirname`, `basename`, `extname`, `parse`, `format`: decomposition
//! - `from-file-url`, `to-file-url`: `file:` URL conversion

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    let global = cli.global_options();

    // Route library `log` output through the stderr logger
    let logger = crosspath::init_logger(global.verbose, global.quiet);
    if let Err(e) = crosspath::install_logger(logger) {
        eprintln!("Warning: failed to install logger: {e}");
    }

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Extname(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::FromFileUrl(cmd) => cmd.execute(&global),
        cli::Command::ToFileUrl(cmd) => cmd.execute(&global),
        cli::Command::Namespace(cmd) => cmd.execute(&global),
        cli::Command::Common(cmd) => cmd.execute(&global),
        cli::Command::IsGlob(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !(global.quiet && matches!(e, error::CliError::SemanticFailure(_))) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
