//! POSIX path grammar.
//!
//! Paths use `/` as their only separator and are absolute exactly when
//! they start with `/`. Every function here is pure except the `resolve`
//! family (and `relative`, which resolves both arguments), which consult a
//! [`CurrentDir`] when no absolute segment is given.
//!
//! # Examples
//!
//! ```
//! use crosspath::path::posix;
//!
//! assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
//! assert_eq!(posix::join(&["/foo", "bar", "baz/asdf", "quux", ".."]), "/foo/bar/baz/asdf");
//! assert_eq!(posix::resolve_with("/cwd", &["/foo/bar", "./baz"]).unwrap(), "/foo/bar/baz");
//! ```

use url::Url;

use crate::error::{Error, Result};
use crate::path::common;
use crate::path::cwd::{CurrentDir, ProcessDir};
use crate::path::file_url::{
    decode_path, ensure_file_scheme, file_url_with_path, parse_url, POSIX_PATH_ESCAPES,
};
use crate::path::normalize::{
    is_posix_separator, last_segment, last_segment_range, normalize_string,
    normalize_string_with, split_extension, strip_suffix, strip_trailing_separators,
};
use crate::path::types::{GlobOptions, ParsedPath};

/// The segment separator.
pub const SEPARATOR: char = '/';

/// The separator between entries of a `PATH`-style list.
pub const DELIMITER: char = ':';

/// Resolve a sequence of segments into an absolute path, using the process
/// working directory as the implicit base.
///
/// # Errors
///
/// Returns an error if the working directory is needed and cannot be read.
pub fn resolve<S: AsRef<str>>(segments: &[S]) -> Result<String> {
    resolve_with(&ProcessDir, segments)
}

/// Resolve a sequence of segments into an absolute path.
///
/// Segments are taken right to left until one is absolute; `cwd` is only
/// consulted when none is. Empty segments are skipped. The result is
/// normalized and has no trailing separator unless it is `/`.
///
/// # Errors
///
/// Returns an error if `cwd` is consulted and fails.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::resolve_with("/home/user", &["a", "../b"]).unwrap(), "/home/user/b");
/// assert_eq!(posix::resolve_with("/home/user", &["/tmp", "", "file"]).unwrap(), "/tmp/file");
/// assert_eq!(posix::resolve_with("/", &[".."]).unwrap(), "/");
/// ```
pub fn resolve_with<C, S>(cwd: &C, segments: &[S]) -> Result<String>
where
    C: CurrentDir + ?Sized,
    S: AsRef<str>,
{
    let mut parts: Vec<&str> = Vec::new();
    let mut absolute = false;

    for segment in segments.iter().rev().map(AsRef::as_ref) {
        if segment.is_empty() {
            continue;
        }
        parts.push(segment);
        if is_absolute(segment) {
            absolute = true;
            break;
        }
    }

    let mut resolved = String::new();
    if !absolute {
        let dir = cwd.current_dir()?;
        absolute = is_absolute(&dir);
        resolved.push_str(&dir);
    }
    for part in parts.iter().rev() {
        if !resolved.is_empty() {
            resolved.push(SEPARATOR);
        }
        resolved.push_str(part);
    }

    let tail = normalize_string(&resolved, !absolute, SEPARATOR, is_posix_separator);
    if absolute {
        Ok(format!("{SEPARATOR}{tail}"))
    } else if tail.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(tail)
    }
}

/// Normalize a path, resolving `.` and `..` segments.
///
/// A trailing separator is preserved and an empty path becomes `.`.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
/// assert_eq!(posix::normalize("./foo/"), "foo/");
/// assert_eq!(posix::normalize(""), ".");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    normalize_glob(path, GlobOptions::default())
}

/// Like [`normalize`], but with glob options (see [`GlobOptions`]).
///
/// # Examples
///
/// ```
/// use crosspath::path::{posix, GlobOptions};
///
/// let globstar = GlobOptions::default().with_globstar(true);
/// assert_eq!(posix::normalize_glob("src/**/../lib", globstar), "src/**/../lib");
/// ```
#[must_use]
pub fn normalize_glob(glob: &str, options: GlobOptions) -> String {
    if glob.is_empty() {
        return ".".to_string();
    }

    let absolute = glob.starts_with(SEPARATOR);
    let trailing = glob.ends_with(SEPARATOR);

    let mut normalized =
        normalize_string_with(glob, !absolute, SEPARATOR, is_posix_separator, options);
    if normalized.is_empty() && !absolute {
        normalized.push('.');
    }
    if !normalized.is_empty() && trailing {
        normalized.push(SEPARATOR);
    }
    if absolute {
        normalized.insert(0, SEPARATOR);
    }
    normalized
}

/// Join segments with `/` and normalize the result.
///
/// Empty segments are ignored; if nothing remains the result is `.`.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::join(&["/foo", "bar", "baz/asdf", "quux", ".."]), "/foo/bar/baz/asdf");
/// assert_eq!(posix::join(&["", ""]), ".");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(paths: &[S]) -> String {
    join_globs(paths, GlobOptions::default())
}

/// Like [`join`], but normalizes with glob options.
#[must_use]
pub fn join_globs<S: AsRef<str>>(globs: &[S], options: GlobOptions) -> String {
    let joined = globs
        .iter()
        .map(AsRef::as_ref)
        .filter(|glob| !glob.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        return ".".to_string();
    }
    normalize_glob(&joined, options)
}

/// Returns `true` if `path` starts with `/`.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Relative path from `from` to `to`, resolving both against the process
/// working directory.
///
/// # Errors
///
/// Returns an error if the working directory is needed and cannot be read.
pub fn relative(from: &str, to: &str) -> Result<String> {
    relative_with(&ProcessDir, from, to)
}

/// Relative path from `from` to `to`.
///
/// Both paths are resolved first. The result climbs out of every segment
/// of `from` not shared with `to`, then descends into the rest of `to`. It
/// is empty when both resolve to the same path.
///
/// # Errors
///
/// Returns an error if `cwd` is consulted and fails.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// let cwd = "/";
/// assert_eq!(
///     posix::relative_with(cwd, "/data/orandea/test/aaa", "/data/orandea/impl/bbb").unwrap(),
///     "../../impl/bbb"
/// );
/// assert_eq!(posix::relative_with(cwd, "/a/b", "/a/b").unwrap(), "");
/// ```
pub fn relative_with<C>(cwd: &C, from: &str, to: &str) -> Result<String>
where
    C: CurrentDir + ?Sized,
{
    if from == to {
        return Ok(String::new());
    }

    let from = resolve_with(cwd, &[from])?;
    let to = resolve_with(cwd, &[to])?;
    if from == to {
        return Ok(String::new());
    }

    let from_segments: Vec<&str> = from.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    let shared = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![".."; from_segments.len() - shared];
    parts.extend_from_slice(&to_segments[shared..]);
    Ok(parts.join("/"))
}

/// Directory portion of `path`.
///
/// Trailing separators are ignored, and stripped from the result unless
/// only the root remains.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::dirname("/home/user/file.txt"), "/home/user");
/// assert_eq!(posix::dirname("/home/user/dir/"), "/home/user");
/// assert_eq!(posix::dirname("/file"), "/");
/// assert_eq!(posix::dirname("file"), ".");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    match last_segment_range(path, 0, is_posix_separator) {
        // Separators only
        None => SEPARATOR.to_string(),
        Some((0, _)) => ".".to_string(),
        Some((begin, _)) => strip_trailing_separators(&path[..begin], 1, is_posix_separator).to_string(),
    }
}

/// Last segment of `path`, with `suffix` removed when it is a proper suffix
/// of that segment.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::basename("/home/user/file.txt", ""), "file.txt");
/// assert_eq!(posix::basename("/home/user/file.txt", ".txt"), "file");
/// assert_eq!(posix::basename("/home/user/dir/", ""), "dir");
/// assert_eq!(posix::basename("/", ""), "");
/// ```
#[must_use]
pub fn basename(path: &str, suffix: &str) -> String {
    strip_suffix(last_segment(path, 0, is_posix_separator), suffix).to_string()
}

/// Extension of the last segment of `path`, from its last `.`.
///
/// Dotfiles such as `.bashrc` have no extension.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::extname("index.html"), ".html");
/// assert_eq!(posix::extname("index.coffee.md"), ".md");
/// assert_eq!(posix::extname("index."), ".");
/// assert_eq!(posix::extname(".index"), "");
/// ```
#[must_use]
pub fn extname(path: &str) -> String {
    split_extension(last_segment(path, 0, is_posix_separator))
        .1
        .to_string()
}

/// Split `path` into root, directory, base, name and extension.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// let parsed = posix::parse("/home/user/dir/file.txt");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user/dir");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.name, "file");
/// assert_eq!(parsed.ext, ".txt");
/// ```
#[must_use]
pub fn parse(path: &str) -> ParsedPath {
    let mut parsed = ParsedPath::default();
    if path.is_empty() {
        return parsed;
    }

    let absolute = is_absolute(path);
    if absolute {
        parsed.root = SEPARATOR.to_string();
    }

    match last_segment_range(path, 0, is_posix_separator) {
        Some((begin, end)) => {
            let base = &path[begin..end];
            let (name, ext) = split_extension(base);
            parsed.base = base.to_string();
            parsed.name = name.to_string();
            parsed.ext = ext.to_string();
            if begin > 0 {
                parsed.dir =
                    strip_trailing_separators(&path[..begin], 1, is_posix_separator).to_string();
            }
        }
        None => {
            parsed.base = SEPARATOR.to_string();
            parsed.dir = SEPARATOR.to_string();
        }
    }
    parsed
}

/// Assemble a path from its parts; the inverse of [`parse`].
///
/// `dir` takes precedence over `root`, and `base` over `name` + `ext`.
///
/// # Examples
///
/// ```
/// use crosspath::path::{posix, ParsedPath};
///
/// let parsed = ParsedPath {
///     root: "/".to_string(),
///     name: "file".to_string(),
///     ext: ".txt".to_string(),
///     ..ParsedPath::default()
/// };
/// assert_eq!(posix::format(&parsed), "/file.txt");
/// ```
#[must_use]
pub fn format(parsed: &ParsedPath) -> String {
    parsed.format_with(SEPARATOR)
}

/// Convert a `file:` URL string into a path.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `url` does not parse and
/// [`Error::NotAFileUrl`] if its scheme is not `file`.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// assert_eq!(posix::from_file_url("file:///home/foo").unwrap(), "/home/foo");
/// assert_eq!(posix::from_file_url("file:///home/foo%20bar").unwrap(), "/home/foo bar");
/// assert!(posix::from_file_url("https://example.com/").is_err());
/// ```
pub fn from_file_url(url: &str) -> Result<String> {
    from_url(&parse_url(url)?)
}

/// Convert a parsed `file:` URL into a path.
///
/// The host, if any, is ignored.
///
/// # Errors
///
/// Returns [`Error::NotAFileUrl`] if the scheme is not `file`.
pub fn from_url(url: &Url) -> Result<String> {
    ensure_file_scheme(url)?;
    Ok(decode_path(url.path()))
}

/// Convert an absolute path into a `file:` URL.
///
/// # Errors
///
/// Returns [`Error::NotAbsolutePath`] if `path` is relative.
///
/// # Examples
///
/// ```
/// use crosspath::path::posix;
///
/// let url = posix::to_file_url("/home/foo bar").unwrap();
/// assert_eq!(url.as_str(), "file:///home/foo%20bar");
/// assert!(posix::to_file_url("relative").is_err());
/// ```
pub fn to_file_url(path: &str) -> Result<Url> {
    if !is_absolute(path) {
        return Err(Error::NotAbsolutePath {
            path: path.to_string(),
        });
    }
    file_url_with_path(path, POSIX_PATH_ESCAPES)
}

/// Namespaced form of `path`. POSIX has no namespace prefix, so this is
/// the identity.
#[must_use]
pub fn to_namespaced_path(path: &str) -> String {
    path.to_string()
}

/// Longest common leading directory of `paths` (see [`common::common`]).
#[must_use]
pub fn common<S: AsRef<str>>(paths: &[S]) -> String {
    common::common(paths, SEPARATOR)
}
