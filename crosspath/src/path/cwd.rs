//! Working-directory providers.
//!
//! `resolve` falls back to a working directory when none of its segments is
//! absolute. The directory is injected through [`CurrentDir`] so callers
//! (and tests) can pin it instead of reading process state.

use crate::error::Result;
use crate::path::assert::path_to_str;

/// Supplies the working directory used as the implicit base of `resolve`.
///
/// # Examples
///
/// ```
/// use crosspath::path::{posix, CurrentDir};
///
/// // Any string works as a fixed working directory
/// assert_eq!("/srv".current_dir().unwrap(), "/srv");
/// assert_eq!(posix::resolve_with("/srv", &["app"]).unwrap(), "/srv/app");
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait CurrentDir {
    /// Return the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined.
    fn current_dir(&self) -> Result<String>;
}

/// Reads the working directory of the running process.
///
/// # Examples
///
/// ```
/// use crosspath::path::{CurrentDir, ProcessDir};
///
/// let cwd = ProcessDir.current_dir().unwrap();
/// assert!(!cwd.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDir;

impl CurrentDir for ProcessDir {
    fn current_dir(&self) -> Result<String> {
        let dir = std::env::current_dir()?;
        let dir = path_to_str(&dir)?.to_owned();
        log::debug!("using process working directory {dir}");
        Ok(dir)
    }
}

impl CurrentDir for str {
    fn current_dir(&self) -> Result<String> {
        Ok(self.to_owned())
    }
}

impl CurrentDir for String {
    fn current_dir(&self) -> Result<String> {
        Ok(self.clone())
    }
}

impl<C: CurrentDir + ?Sized> CurrentDir for &C {
    fn current_dir(&self) -> Result<String> {
        (**self).current_dir()
    }
}
