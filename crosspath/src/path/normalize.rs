//! Segment normalization primitives.
//!
//! Every grammar funnels its paths through [`normalize_string`], which
//! collapses `.`/`..` segments and redundant separators for a given
//! separator character and separator predicate. The grammar modules only
//! deal with roots (leading `/`, drive letters, UNC shares) and delegate the
//! tail of the path here.
//!
//! The remaining helpers in this module are the byte-level scans shared by
//! `basename`, `extname`, `dirname` and `parse` in both grammars.

use crate::path::types::GlobOptions;

/// Predicate identifying a path separator byte for a grammar.
pub type SeparatorPredicate = fn(u8) -> bool;

/// Returns `true` for the POSIX separator `/`.
#[must_use]
pub fn is_posix_separator(byte: u8) -> bool {
    byte == b'/'
}

/// Returns `true` for either Windows separator, `/` or `\`.
#[must_use]
pub fn is_windows_separator(byte: u8) -> bool {
    byte == b'/' || byte == b'\\'
}

/// Returns `true` for an ASCII letter that can name a Windows drive.
#[must_use]
pub fn is_drive_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Resolve `.` and `..` segments and collapse separators.
///
/// `allow_above_root` decides what happens to a `..` that has nothing left
/// to pop: relative paths keep it, absolute paths drop it. The result never
/// contains empty or `.` segments and is joined with `separator`. A path
/// that collapses completely yields an empty string; callers decide
/// whether that means `.` or the root.
///
/// # Examples
///
/// ```
/// use crosspath::path::normalize::{is_posix_separator, normalize_string};
///
/// assert_eq!(
///     normalize_string("foo/bar//baz/asdf/quux/..", false, '/', is_posix_separator),
///     "foo/bar/baz/asdf"
/// );
///
/// // Relative paths keep leading `..` segments
/// assert_eq!(normalize_string("../a/../..", true, '/', is_posix_separator), "../..");
///
/// // Absolute paths drop them
/// assert_eq!(normalize_string("../a/../..", false, '/', is_posix_separator), "");
/// ```
#[must_use]
pub fn normalize_string(
    path: &str,
    allow_above_root: bool,
    separator: char,
    is_separator: SeparatorPredicate,
) -> String {
    normalize_string_with(
        path,
        allow_above_root,
        separator,
        is_separator,
        GlobOptions::default(),
    )
}

/// Glob-aware variant of [`normalize_string`].
///
/// With `options.globstar` set, a `..` that directly follows a `**` segment
/// is kept instead of popping the `**`. The kept `..` behaves like an
/// ordinary segment afterwards, so a further `..` removes it.
///
/// # Examples
///
/// ```
/// use crosspath::path::normalize::{is_posix_separator, normalize_string_with};
/// use crosspath::path::GlobOptions;
///
/// let globstar = GlobOptions::default().with_globstar(true);
/// assert_eq!(
///     normalize_string_with("a/**/../b", true, '/', is_posix_separator, globstar),
///     "a/**/../b"
/// );
/// assert_eq!(
///     normalize_string_with("a/**/../b", true, '/', is_posix_separator, GlobOptions::default()),
///     "a/b"
/// );
/// ```
#[must_use]
pub fn normalize_string_with(
    path: &str,
    allow_above_root: bool,
    separator: char,
    is_separator: SeparatorPredicate,
    options: GlobOptions,
) -> String {
    // Each kept segment remembers whether a later `..` may pop it. Only
    // `..` segments that climbed above the start are fixed.
    let mut kept: Vec<(&str, bool)> = Vec::new();
    let mut previous: Option<&str> = None;

    for segment in split_segments(path, is_separator) {
        if segment.is_empty() {
            continue;
        }
        match segment {
            "." => {}
            ".." => {
                let after_globstar = options.globstar && previous == Some("**");
                match kept.last() {
                    Some(_) if after_globstar => kept.push(("..", true)),
                    Some(&(_, true)) => {
                        kept.pop();
                    }
                    _ if allow_above_root => kept.push(("..", false)),
                    _ => {}
                }
            }
            other => kept.push((other, true)),
        }
        previous = Some(segment);
    }

    let mut out = String::with_capacity(path.len());
    for (i, (segment, _)) in kept.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(segment);
    }
    out
}

/// Split `path` on every byte accepted by `is_separator`.
fn split_segments(path: &str, is_separator: SeparatorPredicate) -> impl Iterator<Item = &str> {
    path.split(move |c: char| c.is_ascii() && is_separator(c as u8))
}

/// Byte range of the last segment of `path[start..]`, ignoring trailing
/// separators. Returns `None` when there is no non-separator byte.
pub(crate) fn last_segment_range(
    path: &str,
    start: usize,
    is_separator: SeparatorPredicate,
) -> Option<(usize, usize)> {
    let bytes = path.as_bytes();
    let end = (start..bytes.len())
        .rev()
        .find(|&i| !is_separator(bytes[i]))?
        + 1;
    let begin = (start..end)
        .rev()
        .find(|&i| is_separator(bytes[i]))
        .map_or(start, |i| i + 1);
    Some((begin, end))
}

/// The last segment of `path[start..]`, or `""` if it has none.
pub(crate) fn last_segment(path: &str, start: usize, is_separator: SeparatorPredicate) -> &str {
    last_segment_range(path, start, is_separator).map_or("", |(begin, end)| &path[begin..end])
}

/// Drop trailing separators from `path`, keeping at least `floor` bytes.
pub(crate) fn strip_trailing_separators(
    path: &str,
    floor: usize,
    is_separator: SeparatorPredicate,
) -> &str {
    let bytes = path.as_bytes();
    let mut end = bytes.len();
    while end > floor.max(1) && is_separator(bytes[end - 1]) {
        end -= 1;
    }
    &path[..end]
}

/// Split a segment into `(name, ext)`.
///
/// The extension starts at the last dot, unless that dot is the first byte
/// of the segment (`.bashrc`) or the segment is `..`.
pub(crate) fn split_extension(base: &str) -> (&str, &str) {
    match base.rfind('.') {
        Some(dot) if dot > 0 && base != ".." => (&base[..dot], &base[dot..]),
        _ => (base, ""),
    }
}

/// Remove `suffix` from `name` when it is a proper suffix of it.
pub(crate) fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || suffix.len() >= name.len() {
        return name;
    }
    name.strip_suffix(suffix).unwrap_or(name)
}
