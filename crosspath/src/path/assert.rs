//! Input validation for raw path arguments.
//!
//! The grammar functions take `&str`, so library callers can only pass
//! strings. Raw OS strings (command-line arguments, the process working directory)
//! still cross this boundary and are checked here.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{Error, Result};

/// Ensure a raw path argument is a valid Unicode string.
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentType`] with the message
/// `Path must be a string, received "<value>"` if `path` is not valid
/// Unicode. The value is rendered lossily.
///
/// # Examples
///
/// ```
/// use crosspath::path::assert_path;
/// use std::ffi::OsStr;
///
/// assert_eq!(assert_path(OsStr::new("/tmp")).unwrap(), "/tmp");
/// ```
pub fn assert_path(path: &OsStr) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidArgumentType {
        received: path.to_string_lossy().into_owned(),
    })
}

/// Ensure an optional raw path argument is present and a valid string.
///
/// A missing value is reported as `undefined`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentType`] if `path` is `None` or not valid
/// Unicode.
///
/// # Examples
///
/// ```
/// use crosspath::path::assert::assert_present;
///
/// let err = assert_present(None).unwrap_err();
/// assert_eq!(err.to_string(), "Path must be a string, received \"undefined\"");
/// ```
pub fn assert_present(path: Option<&OsStr>) -> Result<&str> {
    match path {
        Some(path) => assert_path(path),
        None => Err(Error::InvalidArgumentType {
            received: "undefined".to_string(),
        }),
    }
}

/// Convert a `std::path::Path` into a `&str`, see [`assert_path`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentType`] if `path` is not valid Unicode.
pub fn path_to_str(path: &Path) -> Result<&str> {
    assert_path(path.as_os_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_path_accepts_unicode() {
        assert_eq!(assert_path(OsStr::new("C:\\dir\\é")).unwrap(), "C:\\dir\\é");
        assert_eq!(assert_path(OsStr::new("")).unwrap(), "");
    }

    #[test]
    fn test_assert_present_missing() {
        let err = assert_present(None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgumentType { .. }));
        assert!(err.to_string().contains("received \"undefined\""));
    }

    #[test]
    fn test_path_to_str() {
        assert_eq!(path_to_str(Path::new("/a/b")).unwrap(), "/a/b");
    }

    #[test]
    #[cfg(unix)]
    fn test_assert_path_rejects_invalid_unicode() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/\xff");
        let err = assert_path(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidArgumentType { .. }));
        assert!(err.to_string().starts_with("Path must be a string, received \"/tmp/"));
    }
}
