//! Error types for the crosspath library.
//!
//! This module provides the error hierarchy for all operations in the
//! crosspath library, using `thiserror` for ergonomic error handling.
//!
//! The path engine itself only ever raises argument errors:
//! [`Error::InvalidArgumentType`], [`Error::NotAFileUrl`],
//! [`Error::NotAbsolutePath`], [`Error::InvalidHostname`] and, for a
//! string that is not a URL at all, [`Error::InvalidUrl`]. Each message
//! quotes the offending value verbatim so callers can match on it.

use thiserror::Error;

/// Result type alias for operations that may fail with a crosspath error.
///
/// # Examples
///
/// ```
/// use crosspath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crosspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path argument was not a valid Unicode string.
    #[error("Path must be a string, received \"{received}\"")]
    InvalidArgumentType {
        /// Lossy rendering of the rejected value.
        received: String,
    },

    /// A URL with a scheme other than `file:` was passed where a file URL
    /// was required.
    #[error("URL must be a file URL: received \"{scheme}\"")]
    NotAFileUrl {
        /// The scheme of the rejected URL, including the trailing colon.
        scheme: String,
    },

    /// A relative path was passed where an absolute path was required.
    #[error("Path must be absolute: received \"{path}\"")]
    NotAbsolutePath {
        /// The rejected path.
        path: String,
    },

    /// A UNC path carried a host that cannot be used in a URL.
    #[error("Invalid hostname: \"{hostname}\"")]
    InvalidHostname {
        /// The rejected host segment.
        hostname: String,
    },

    /// A string could not be parsed as a URL at all.
    #[error("Invalid URL: \"{url}\"")]
    InvalidUrl {
        /// The string that failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is one of the five argument errors raised by the
    /// path engine, as opposed to configuration or I/O failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::Error;
    ///
    /// let err = Error::NotAbsolutePath { path: "foo".to_string() };
    /// assert!(err.is_type_error());
    /// ```
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgumentType { .. }
                | Self::NotAFileUrl { .. }
                | Self::NotAbsolutePath { .. }
                | Self::InvalidHostname { .. }
                | Self::InvalidUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_type_message() {
        let err = Error::InvalidArgumentType {
            received: "undefined".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Path must be a string, received \"undefined\""
        );
        assert!(err.is_type_error());
    }

    #[test]
    fn test_not_a_file_url_message() {
        let err = Error::NotAFileUrl {
            scheme: "http:".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("URL must be a file URL"));
        assert!(display.contains("received \"http:\""));
    }

    #[test]
    fn test_not_absolute_path_message() {
        let err = Error::NotAbsolutePath {
            path: "foo/bar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Path must be absolute: received \"foo/bar\""
        );
    }

    #[test]
    fn test_invalid_hostname_message() {
        let err = Error::InvalidHostname {
            hostname: "bad host".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid hostname: \"bad host\"");
    }

    #[test]
    fn test_every_path_error_is_a_type_error() {
        let source = url::Url::parse("::").unwrap_err();
        let errors = [
            Error::InvalidArgumentType { received: "x".to_string() },
            Error::NotAFileUrl { scheme: "http:".to_string() },
            Error::NotAbsolutePath { path: "x".to_string() },
            Error::InvalidHostname { hostname: String::new() },
            Error::InvalidUrl { url: "::".to_string(), source },
        ];
        for err in errors {
            assert!(err.is_type_error(), "{err}");
        }
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "grammar".to_string(),
            message: "unknown grammar".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("grammar"));
        assert!(!err.is_type_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::NotAbsolutePath {
                path: "x".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
