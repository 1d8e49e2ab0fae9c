//! `file:` URL plumbing shared by both grammars.
//!
//! The grammar modules decide how a path maps onto a URL path and host;
//! the helpers here only parse, check and percent-code.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::{Error, Result};

/// Bytes escaped before a POSIX path is handed to the URL serializer.
///
/// `%` must be escaped so existing sequences are not mistaken for encoded
/// bytes, and `\` is a literal filename character on POSIX.
pub(crate) const POSIX_PATH_ESCAPES: &AsciiSet = &CONTROLS.add(b' ').add(b'%').add(b'\\');

/// Bytes escaped before a Windows path (already using `/`) is serialized.
pub(crate) const WINDOWS_PATH_ESCAPES: &AsciiSet = &CONTROLS.add(b' ').add(b'%');

/// Parse `input` as a URL.
pub(crate) fn parse_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|source| Error::InvalidUrl {
        url: input.to_string(),
        source,
    })
}

/// Reject any URL whose scheme is not `file`.
pub(crate) fn ensure_file_scheme(url: &Url) -> Result<()> {
    if url.scheme() == "file" {
        Ok(())
    } else {
        Err(Error::NotAFileUrl {
            scheme: format!("{}:", url.scheme()),
        })
    }
}

/// Percent-decode a URL path. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn decode_path(pathname: &str) -> String {
    percent_decode_str(pathname).decode_utf8_lossy().into_owned()
}

/// Build a `file:` URL with no host whose path is `path`.
///
/// `path` is escaped with `escapes` first; the URL serializer then applies
/// the standard path encoding on top.
pub(crate) fn file_url_with_path(path: &str, escapes: &'static AsciiSet) -> Result<Url> {
    let mut url = parse_url("file:///")?;
    let encoded = utf8_percent_encode(path, escapes).to_string();
    url.set_path(&encoded);
    Ok(url)
}
