//! Common test utilities for integration tests.
//!
//! Fixed working directories and a few helpers shared by the path and
//! configuration suites.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Working directory used for POSIX resolution in tests.
#[allow(dead_code)]
pub const POSIX_CWD: &str = "/home/tester/project";

/// Working directory used for Windows resolution in tests.
#[allow(dead_code)]
pub const WINDOWS_CWD: &str = "C:\\Users\\tester\\project";

/// Writes `content` to `dir/filename` and returns the file path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `CROSSPATH_*` variable for the lifetime of the returned
/// guards.
#[allow(dead_code)]
pub fn clear_crosspath_env_vars() -> Vec<EnvGuard> {
    [
        "CROSSPATH_GRAMMAR",
        "CROSSPATH_CWD",
        "CROSSPATH_GLOBSTAR",
        "CROSSPATH_OUTPUT_FORMAT",
        "CROSSPATH_LOG_MODE",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}
