//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment (temporary working and home directories)
//! - Command builders with the `CROSSPATH_*` environment scrubbed
//! - Config file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into tests.
const SCRUBBED_ENV: [&str; 5] = [
    "CROSSPATH_GRAMMAR",
    "CROSSPATH_CWD",
    "CROSSPATH_GLOBSTAR",
    "CROSSPATH_OUTPUT_FORMAT",
    "CROSSPATH_LOG_MODE",
];

/// Test environment with isolated working and home directories.
///
/// Commands run inside `work/`, with `HOME` pointing at `home/`, so
/// neither the developer's user configuration nor a `crosspath.yaml` in
/// the checkout affects results.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory commands run in
    pub work_dir: PathBuf,
    /// Directory used as `HOME`
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// Get a command builder running in the isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("crosspath").expect("Failed to find crosspath binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Command with `--grammar posix` preset.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--grammar").arg("posix");
        cmd
    }

    /// Command with `--grammar windows` preset.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--grammar").arg("windows");
        cmd
    }

    /// Write a `crosspath.yaml` into the working directory.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        self.write_file(&self.work_dir, "crosspath.yaml", content)
    }

    /// Write `~/.crosspath/config.yaml`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.join(".crosspath");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        self.write_file(&dir, "config.yaml", content)
    }

    /// Write an arbitrary file.
    pub fn write_file(&self, dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Run `cmd`, assert success and return trimmed stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is not UTF-8")
        .trim_end_matches('\n')
        .to_string()
}
