//! Windows path grammar.
//!
//! Both `\` and `/` separate segments; output always uses `\`. A path may
//! start with a drive (`C:`), a drive root (`C:\`), a bare separator, or a
//! UNC share (`\\server\share`). Segment comparisons in [`relative`] and
//! device matching in [`resolve`] ignore ASCII case.
//!
//! # Examples
//!
//! ```
//! use crosspath::path::windows;
//!
//! assert_eq!(windows::normalize("C:/foo/../bar"), "C:\\bar");
//! assert_eq!(windows::normalize("\\\\server\\share\\dir\\..\\file"), "\\\\server\\share\\file");
//! assert!(windows::is_absolute("C:\\Users"));
//! assert!(!windows::is_absolute("C:Users"));
//! ```

use url::Url;

use crate::error::{Error, Result};
use crate::path::common;
use crate::path::cwd::{CurrentDir, ProcessDir};
use crate::path::file_url::{
    decode_path, ensure_file_scheme, file_url_with_path, parse_url, WINDOWS_PATH_ESCAPES,
};
use crate::path::normalize::{
    is_drive_letter, is_windows_separator, last_segment, last_segment_range, normalize_string,
    normalize_string_with, split_extension, strip_suffix, strip_trailing_separators,
};
use crate::path::types::{GlobOptions, ParsedPath};

/// The segment separator used in output.
pub const SEPARATOR: char = '\\';

/// The separator between entries of a `PATH`-style list.
pub const DELIMITER: char = ';';

/// The root at the start of a Windows path.
#[derive(Debug, Default, PartialEq, Eq)]
struct Root {
    /// Drive (`C:`) or UNC share (`\\server\share`) rebuilt with `\`.
    device: Option<String>,
    /// The root anchors the path: a leading separator, `C:\`, or a share.
    absolute: bool,
    /// Byte offset just past the root, including one separator after it.
    end: usize,
    /// The path is a UNC share and nothing else.
    unc_only: bool,
}

fn is_sep(byte: u8) -> bool {
    is_windows_separator(byte)
}

/// Scan the root of `path`.
fn scan_root(path: &str) -> Root {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return Root::default();
    }

    if is_sep(bytes[0]) {
        let mut root = Root {
            absolute: true,
            end: 1,
            ..Root::default()
        };
        if len > 1 && is_sep(bytes[1]) {
            if let Some((device, end)) = scan_unc(path) {
                root.unc_only = end == len && !is_sep(bytes[len - 1]);
                root.device = Some(device);
                root.end = end;
            }
        }
        return root;
    }

    if len > 1 && is_drive_letter(bytes[0]) && bytes[1] == b':' {
        let absolute = len > 2 && is_sep(bytes[2]);
        return Root {
            device: Some(path[..2].to_string()),
            absolute,
            end: if absolute { 3 } else { 2 },
            unc_only: false,
        };
    }

    Root::default()
}

/// Match `\\server\share` at the start of `path`.
///
/// Returns the device and the offset just past the share and its trailing
/// separator. Both the server and share must be non-empty.
fn scan_unc(path: &str) -> Option<(String, usize)> {
    let bytes = path.as_bytes();
    let len = bytes.len();

    let server_end = (2..len).find(|&i| is_sep(bytes[i]))?;
    if server_end == 2 {
        return None;
    }
    let share_start = (server_end..len).find(|&i| !is_sep(bytes[i]))?;
    let share_end = (share_start..len)
        .find(|&i| is_sep(bytes[i]))
        .unwrap_or(len);

    let device = format!(
        "\\\\{}\\{}",
        &path[2..server_end],
        &path[share_start..share_end]
    );
    let end = if share_end == len { len } else { share_end + 1 };
    Some((device, end))
}

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
/// Segments are taken right to left until both a device and an absolute
/// root are known. Segments on a different device than the one already
/// found are skipped. When segments run out, `cwd` is used if it is on the
/// same drive, otherwise the drive root.
///
/// # Errors
///
/// Returns an error if `cwd` is consulted and fails.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// let cwd = "C:\\work";
/// assert_eq!(windows::resolve_with(cwd, &["C:\\foo\\bar", ".\\baz"]).unwrap(), "C:\\foo\\bar\\baz");
/// assert_eq!(windows::resolve_with(cwd, &["c:/blah\\blah", "d:/games", "c:../a"]).unwrap(), "c:\\blah\\a");
/// assert_eq!(windows::resolve_with(cwd, &["D:foo"]).unwrap(), "D:\\foo");
/// ```
pub fn resolve_with<C, S>(cwd: &C, segments: &[S]) -> Result<String>
where
    C: CurrentDir + ?Sized,
    S: AsRef<str>,
{
    let mut device: Option<String> = None;
    let mut tail = String::new();
    let mut absolute = false;

    // Index 0 stands for the working directory, consulted last.
    for step in (0..=segments.len()).rev() {
        let fallback;
        let path: &str = if step > 0 {
            segments[step - 1].as_ref()
        } else {
            fallback = working_dir(cwd, device.as_deref())?;
            &fallback
        };
        if path.is_empty() {
            continue;
        }

        let root = scan_root(path);
        if let (Some(found), Some(resolved)) = (&root.device, &device) {
            if !found.eq_ignore_ascii_case(resolved) {
                continue;
            }
        }

        if device.is_none() {
            device = root.device;
        }
        if !absolute {
            tail = format!("{}\\{tail}", &path[root.end..]);
            absolute = root.absolute;
        }
        if absolute && device.is_some() {
            break;
        }
    }

    let tail = normalize_string(&tail, !absolute, SEPARATOR, is_windows_separator);
    let resolved = format!(
        "{}{}{tail}",
        device.unwrap_or_default(),
        if absolute { "\\" } else { "" }
    );
    if resolved.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(resolved)
    }
}

/// The working directory to fall back on, given the device found so far.
///
/// A working directory on another drive is useless for a drive-relative
/// path like `D:foo`; the drive root stands in for it.
fn working_dir<C>(cwd: &C, device: Option<&str>) -> Result<String>
where
    C: CurrentDir + ?Sized,
{
    let dir = cwd.current_dir()?;
    let Some(device) = device else {
        return Ok(dir);
    };

    let drive_root = format!("{device}\\");
    let same_drive = dir
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&drive_root));
    if same_drive {
        Ok(dir)
    } else {
        log::debug!("working directory {dir} is not on {device}, using {drive_root}");
        Ok(drive_root)
    }
}

/// Normalize a path, resolving `.` and `..` segments and converting every
/// separator to `\`.
///
/// The root is preserved, a trailing separator is preserved, and an empty
/// path becomes `.`.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// assert_eq!(windows::normalize("C:\\foo\\..\\bar"), "C:\\bar");
/// assert_eq!(windows::normalize("\\\\server\\share"), "\\\\server\\share\\");
/// assert_eq!(windows::normalize("C:"), "C:.");
/// assert_eq!(windows::normalize("/"), "\\");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    normalize_glob(path, GlobOptions::default())
}

/// Like [`normalize`], but with glob options (see [`GlobOptions`]).
#[must_use]
pub fn normalize_glob(glob: &str, options: GlobOptions) -> String {
    if glob.is_empty() {
        return ".".to_string();
    }

    let root = scan_root(glob);
    if root.unc_only {
        return format!("{}\\", root.device.unwrap_or_default());
    }

    let mut tail = normalize_string_with(
        &glob[root.end..],
        !root.absolute,
        SEPARATOR,
        is_windows_separator,
        options,
    );
    if tail.is_empty() && !root.absolute {
        tail.push('.');
    }
    if !tail.is_empty() && glob.bytes().last().is_some_and(is_sep) {
        tail.push(SEPARATOR);
    }

    match (root.device, root.absolute) {
        (None, true) => format!("\\{tail}"),
        (None, false) => tail,
        (Some(device), true) => format!("{device}\\{tail}"),
        (Some(device), false) => format!("{device}{tail}"),
    }
}

/// Join segments with `\` and normalize the result.
///
/// Empty segments are ignored; if nothing remains the result is `.`. A
/// leading run of separators collapses to one unless the first segment is
/// itself a UNC path.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// assert_eq!(windows::join(&["C:\\foo", "bar", "..\\baz"]), "C:\\foo\\baz");
/// assert_eq!(windows::join(&["//server", "share"]), "\\\\server\\share\\");
/// assert_eq!(windows::join(&["//", "/a"]), "\\a");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(paths: &[S]) -> String {
    join_globs(paths, GlobOptions::default())
}

/// Like [`join`], but normalizes with glob options.
#[must_use]
pub fn join_globs<S: AsRef<str>>(globs: &[S], options: GlobOptions) -> String {
    let parts: Vec<&str> = globs
        .iter()
        .map(AsRef::as_ref)
        .filter(|glob| !glob.is_empty())
        .collect();
    let Some(first) = parts.first() else {
        return ".".to_string();
    };

    let mut joined = parts.join("\\");

    // `\\server` as the first part names a share; any other run of leading
    // separators must not turn into one.
    let unc_first = leading_separators(first) == 2 && first.len() > 2;
    if !unc_first {
        let leading = leading_separators(&joined);
        if leading >= 2 {
            joined = format!("\\{}", &joined[leading..]);
        }
    }

    normalize_glob(&joined, options)
}

fn leading_separators(path: &str) -> usize {
    path.bytes().take_while(|&b| is_sep(b)).count()
}

/// Returns `true` if `path` starts with a separator or a drive root.
///
/// `C:foo` is drive-relative and therefore not absolute.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [] => false,
        [first, ..] if is_sep(*first) => true,
        [drive, b':', sep, ..] => is_drive_letter(*drive) && is_sep(*sep),
        _ => false,
    }
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
/// Both paths are resolved first and compared ignoring ASCII case. Output
/// segments keep the casing of `to`. Paths on different devices share
/// nothing, so the resolved `to` is returned as is.
///
/// # Errors
///
/// Returns an error if `cwd` is consulted and fails.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// let cwd = "C:\\";
/// assert_eq!(
///     windows::relative_with(cwd, "C:\\orandea\\test\\aaa", "C:\\orandea\\impl\\bbb").unwrap(),
///     "..\\..\\impl\\bbb"
/// );
/// assert_eq!(windows::relative_with(cwd, "C:\\Foo", "c:\\foo").unwrap(), "");
/// assert_eq!(windows::relative_with(cwd, "C:\\a", "D:\\b").unwrap(), "D:\\b");
/// assert_eq!(
///     windows::relative_with(cwd, "\\\\srv\\one\\x", "\\\\srv\\two\\y").unwrap(),
///     "\\\\srv\\two\\y"
/// );
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
    if from.eq_ignore_ascii_case(&to) {
        return Ok(String::new());
    }

    // `..` cannot climb out of a drive or share root
    let same_device = match (scan_root(&from).device, scan_root(&to).device) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(&b),
        (a, b) => a == b,
    };
    if !same_device {
        return Ok(to);
    }

    let from_segments: Vec<&str> = from.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    let shared = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
        .count();
    if shared == 0 {
        return Ok(to);
    }

    let mut parts = vec![".."; from_segments.len() - shared];
    parts.extend_from_slice(&to_segments[shared..]);
    Ok(parts.join("\\"))
}

/// Directory portion of `path`.
///
/// The root is never removed: `dirname("C:\\foo")` is `C:\`, and a bare
/// UNC share is its own directory.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// assert_eq!(windows::dirname("C:\\foo\\bar"), "C:\\foo");
/// assert_eq!(windows::dirname("C:\\foo"), "C:\\");
/// assert_eq!(windows::dirname("C:foo"), "C:");
/// assert_eq!(windows::dirname("\\\\server\\share\\file"), "\\\\server\\share\\");
/// assert_eq!(windows::dirname("foo"), ".");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let root = scan_root(path);
    if root.unc_only {
        return path.to_string();
    }

    match last_segment_range(path, root.end, is_windows_separator) {
        Some((begin, _)) if begin > root.end => {
            strip_trailing_separators(&path[..begin], root.end, is_windows_separator).to_string()
        }
        _ if root.end > 0 => path[..root.end].to_string(),
        _ => ".".to_string(),
    }
}

/// Byte offset where the file part of `path` may start: after a `C:`
/// prefix, otherwise 0.
fn file_part_start(path: &str) -> usize {
    match path.as_bytes() {
        [drive, b':', ..] if is_drive_letter(*drive) => 2,
        _ => 0,
    }
}

/// Last segment of `path`, with `suffix` removed when it is a proper suffix
/// of that segment.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// assert_eq!(windows::basename("C:\\foo\\bar.txt", ""), "bar.txt");
/// assert_eq!(windows::basename("C:\\foo\\bar.txt", ".txt"), "bar");
/// assert_eq!(windows::basename("C:bar.txt", ""), "bar.txt");
/// assert_eq!(windows::basename("C:\\", ""), "");
/// ```
#[must_use]
pub fn basename(path: &str, suffix: &str) -> String {
    let base = last_segment(path, file_part_start(path), is_windows_separator);
    strip_suffix(base, suffix).to_string()
}

/// Extension of the last segment of `path`, from its last `.`.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// assert_eq!(windows::extname("C:\\foo\\bar.txt"), ".txt");
/// assert_eq!(windows::extname("C:.foo"), "");
/// assert_eq!(windows::extname("file.d\\"), ".d");
/// ```
#[must_use]
pub fn extname(path: &str) -> String {
    let base = last_segment(path, file_part_start(path), is_windows_separator);
    split_extension(base).1.to_string()
}

/// Split `path` into root, directory, base, name and extension.
///
/// A path that is only a root (`\`, `C:\`, `\\server\share`) reports the
/// root as its directory and `\` as its base; `C:` reports an empty base.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// let parsed = windows::parse("C:\\path\\dir\\file.txt");
/// assert_eq!(parsed.root, "C:\\");
/// assert_eq!(parsed.dir, "C:\\path\\dir");
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

    let root = scan_root(path);
    let root_text = &path[..root.end];
    parsed.root = root_text.to_string();
    parsed.dir = root_text.to_string();

    if root.end == path.len() {
        if root.absolute {
            parsed.base = SEPARATOR.to_string();
        }
        return parsed;
    }

    if let Some((begin, end)) = last_segment_range(path, root.end, is_windows_separator) {
        let base = &path[begin..end];
        let (name, ext) = split_extension(base);
        parsed.base = base.to_string();
        parsed.name = name.to_string();
        parsed.ext = ext.to_string();
        if begin > root.end {
            parsed.dir =
                strip_trailing_separators(&path[..begin], root.end, is_windows_separator)
                    .to_string();
        }
    }
    parsed
}

/// Assemble a path from its parts; the inverse of [`parse`].
///
/// # Examples
///
/// ```
/// use crosspath::path::{windows, ParsedPath};
///
/// let parsed = ParsedPath {
///     dir: "C:\\path\\dir".to_string(),
///     base: "file.txt".to_string(),
///     ..ParsedPath::default()
/// };
/// assert_eq!(windows::format(&parsed), "C:\\path\\dir\\file.txt");
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
/// use crosspath::path::windows;
///
/// assert_eq!(windows::from_file_url("file:///C:/Users/me").unwrap(), "C:\\Users\\me");
/// assert_eq!(windows::from_file_url("file://server/share/f").unwrap(), "\\\\server\\share\\f");
/// ```
pub fn from_file_url(url: &str) -> Result<String> {
    from_url(&parse_url(url)?)
}

/// Convert a parsed `file:` URL into a path.
///
/// A drive letter at the start of the URL path wins over any host. Other
/// hosts, except `localhost`, become a UNC prefix.
///
/// # Errors
///
/// Returns [`Error::NotAFileUrl`] if the scheme is not `file`.
pub fn from_url(url: &Url) -> Result<String> {
    ensure_file_scheme(url)?;
    let path = decode_path(&url.path().replace('/', "\\"));

    if let Some(drive_path) = strip_to_drive(&path) {
        return Ok(drive_path);
    }
    match url.host_str() {
        Some(host) if !host.is_empty() && !host.eq_ignore_ascii_case("localhost") => {
            Ok(format!("\\\\{host}{path}"))
        }
        _ => Ok(path),
    }
}

/// Rewrite `\\C:\rest` or `\C:` into `C:\rest` / `C:\`. Returns `None`
/// if the path does not start with a drive.
fn strip_to_drive(path: &str) -> Option<String> {
    let trimmed = path.trim_start_matches('\\');
    match trimmed.as_bytes() {
        [drive, b':'] if is_drive_letter(*drive) => Some(format!("{trimmed}\\")),
        [drive, b':', b'\\', ..] if is_drive_letter(*drive) => Some(trimmed.to_string()),
        _ => None,
    }
}

/// Convert an absolute path into a `file:` URL.
///
/// A UNC path (`\\server\share\...`) puts `server` in the URL host, except
/// for `localhost`, which is dropped.
///
/// # Errors
///
/// Returns [`Error::NotAbsolutePath`] if `path` is not absolute and
/// [`Error::InvalidHostname`] if a UNC host is empty or not a valid URL
/// host.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// let url = windows::to_file_url("C:\\Users\\me\\file name.txt").unwrap();
/// assert_eq!(url.as_str(), "file:///C:/Users/me/file%20name.txt");
///
/// let url = windows::to_file_url("\\\\server\\share\\dir").unwrap();
/// assert_eq!(url.as_str(), "file://server/share/dir");
/// ```
pub fn to_file_url(path: &str) -> Result<Url> {
    if !is_absolute(path) {
        return Err(Error::NotAbsolutePath {
            path: path.to_string(),
        });
    }

    let (host, pathname) = split_unc_host(path)?;
    let mut pathname = pathname.replace('\\', "/");
    if !pathname.starts_with('/') {
        pathname.insert(0, '/');
    }
    let mut url = file_url_with_path(&pathname, WINDOWS_PATH_ESCAPES)?;

    if let Some(host) = host {
        if !host.eq_ignore_ascii_case("localhost") {
            let invalid = || Error::InvalidHostname {
                hostname: host.to_string(),
            };
            url.set_host(Some(host)).map_err(|_| invalid())?;
            if url.host_str().map_or(true, str::is_empty) {
                return Err(invalid());
            }
        }
    }
    Ok(url)
}

/// Split a leading `\\host` off `path`.
fn split_unc_host(path: &str) -> Result<(Option<&str>, &str)> {
    let bytes = path.as_bytes();
    if bytes.len() < 2 || !is_sep(bytes[0]) || !is_sep(bytes[1]) {
        return Ok((None, path));
    }

    let host_end = (2..bytes.len())
        .find(|&i| is_sep(bytes[i]))
        .unwrap_or(bytes.len());
    let host = &path[2..host_end];
    if host.is_empty() {
        return Err(Error::InvalidHostname {
            hostname: host.to_string(),
        });
    }
    Ok((Some(host), &path[host_end..]))
}

/// Namespaced (`\\?\`) form of `path`, resolving against the process
/// working directory.
///
/// # Errors
///
/// Returns an error if the working directory is needed and cannot be read.
pub fn to_namespaced_path(path: &str) -> Result<String> {
    to_namespaced_path_with(&ProcessDir, path)
}

/// Namespaced (`\\?\`) form of `path`.
///
/// Drive-rooted paths become `\\?\C:\...` and UNC paths become
/// `\\?\UNC\server\share\...`. Anything else, including paths that are
/// already namespaced, is returned unchanged.
///
/// # Errors
///
/// Returns an error if `cwd` is consulted and fails.
///
/// # Examples
///
/// ```
/// use crosspath::path::windows;
///
/// let cwd = "C:\\";
/// assert_eq!(windows::to_namespaced_path_with(cwd, "C:\\foo\\bar").unwrap(), "\\\\?\\C:\\foo\\bar");
/// assert_eq!(
///     windows::to_namespaced_path_with(cwd, "\\\\server\\share\\f").unwrap(),
///     "\\\\?\\UNC\\server\\share\\f"
/// );
/// ```
pub fn to_namespaced_path_with<C>(cwd: &C, path: &str) -> Result<String>
where
    C: CurrentDir + ?Sized,
{
    if path.is_empty() {
        return Ok(String::new());
    }

    let resolved = resolve_with(cwd, &[path])?;
    match resolved.as_bytes() {
        [b'\\', b'\\', third, ..] if *third != b'?' && *third != b'.' => {
            Ok(format!("\\\\?\\UNC\\{}", &resolved[2..]))
        }
        [drive, b':', b'\\', ..] if is_drive_letter(*drive) => Ok(format!("\\\\?\\{resolved}")),
        _ => Ok(path.to_string()),
    }
}

/// Longest common leading directory of `paths` (see [`common::common`]).
#[must_use]
pub fn common<S: AsRef<str>>(paths: &[S]) -> String {
    common::common(paths, SEPARATOR)
}
