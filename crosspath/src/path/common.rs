//! Longest shared leading path of a set of paths.

/// Find the common leading path of `paths`, split on `separator`.
///
/// Segments are compared byte for byte; comparison stops at the first
/// segment that differs or is missing in any path. When it stopped on a
/// differing segment the result ends with `separator`, since the shared
/// part is then a directory. A path that every other path merely extends
/// is returned as written. With no paths the result is empty, and a
/// single path is returned unchanged.
///
/// # Examples
///
/// ```
/// use crosspath::path::common::common;
///
/// let paths = ["./proj/std/path/mod.ts", "./proj/std/fs/mod.ts"];
/// assert_eq!(common(&paths, '/'), "./proj/std/");
///
/// assert_eq!(common(&["/a/b", "/c"], '/'), "/");
/// assert_eq!(common(&["a/b", "c/d"], '/'), "");
/// assert_eq!(common(&["/a/b", "/a"], '/'), "/a");
/// ```
#[must_use]
pub fn common<S: AsRef<str>>(paths: &[S], separator: char) -> String {
    let (first, rest) = match paths {
        [] => return String::new(),
        [only] => return only.as_ref().to_owned(),
        [first, rest @ ..] => (first.as_ref(), rest),
    };

    let first_segments: Vec<&str> = first.split(separator).collect();
    let mut matched = first_segments.len();
    let mut diverged = false;

    for path in rest {
        let segments: Vec<&str> = path.as_ref().split(separator).collect();
        if segments.len() <= matched {
            matched = segments.len();
            diverged = false;
        }
        if let Some(at) = first_segments[..matched]
            .iter()
            .zip(&segments)
            .position(|(a, b)| a != b)
        {
            matched = at;
            diverged = at > 0;
        }
    }

    let mut prefix = first_segments[..matched].join(&separator.to_string());
    if diverged {
        prefix.push(separator);
    }
    prefix
}
