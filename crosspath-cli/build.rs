//! Build script for crosspath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("crosspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate POSIX and Windows paths")
        .long_about(
            "Lexical path manipulation for POSIX and Windows paths, with file URL conversion",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .help("Path grammar: posix, windows or native")
                .value_name("GRAMMAR")
                .global(true)
                .env("CROSSPATH_GRAMMAR"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Working directory used to resolve relative paths")
                .value_name("PATH")
                .global(true)
                .env("CROSSPATH_CWD"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: text or json")
                .value_name("FORMAT")
                .global(true)
                .env("CROSSPATH_OUTPUT_FORMAT"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Ignore user and project configuration files")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize a path, resolving . and .. segments")
                .long_about("Collapse redundant separators and . and .. segments of a path"),
            Command::new("join")
                .about("Join path segments and normalize the result")
                .long_about("Join non-empty segments with the grammar separator and normalize"),
            Command::new("resolve")
                .about("Resolve segments into an absolute path")
                .long_about("Resolve segments right to left, anchoring at the working directory"),
            Command::new("relative")
                .about("Relative path from one location to another")
                .long_about("Compute the relative path from FROM to TO after resolving both"),
            Command::new("dirname")
                .about("Directory part of a path")
                .long_about("Print everything before the last segment of a path"),
            Command::new("basename")
                .about("Last segment of a path")
                .long_about("Print the last segment of a path, optionally without a suffix"),
            Command::new("extname")
                .about("Extension of the last segment")
                .long_about("Print the extension of the last segment, including the dot"),
            Command::new("parse")
                .about("Split a path into root, dir, base, name and ext")
                .long_about("Decompose a path into its components"),
            Command::new("format")
                .about("Assemble a path from its parts")
                .long_about("Build a path from root, dir, base, name and ext"),
            Command::new("is-absolute")
                .about("Check whether a path is absolute")
                .long_about("Print whether a path is absolute and exit with status 1 if not"),
            Command::new("from-file-url")
                .about("Convert a file URL into a path")
                .long_about("Decode a file URL into a path of the selected grammar"),
            Command::new("to-file-url")
                .about("Convert an absolute path into a file URL")
                .long_about("Percent-encode an absolute path into a file URL"),
            Command::new("namespace")
                .about("Namespaced form of a Windows path")
                .long_about("Rewrite drive and UNC paths into their \\\\?\\ namespaced form"),
            Command::new("common")
                .about("Longest common leading directory of several paths")
                .long_about("Print the leading directory shared by every given path"),
            Command::new("is-glob")
                .about("Check whether a string contains glob syntax")
                .long_about("Print whether a string is a glob and exit with status 1 if not"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("crosspath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
