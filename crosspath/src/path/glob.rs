//! Glob detection.
//!
//! Glob-aware normalization (`normalize_glob`, `join_globs`) lives in each
//! grammar module next to the plain `normalize`/`join` it wraps; this module
//! only answers whether a string is a glob at all.

use std::sync::OnceLock;

use regex::Regex;

/// Escaped character, or any glob construct: leading `!`, `*`, `?`, an
/// optional `]`/`.`/`+`/`)`, a bracket class, a brace set, a lookaround-like
/// group or an alternation group.
const GLOB_SYNTAX: &str = r"\\(.)|(^!|\*|\?|[\].+)]\?|\[[^\\\]]+\]|\{[^\\}]+\}|\(\?[:!=][^\\)]+\)|\([^|]+\|[^\\)]+\))";

fn glob_syntax() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(GLOB_SYNTAX).expect("glob syntax pattern is valid"))
}

/// Closing character for an escaped opening bracket, brace or paren.
fn closing_for(open: &str) -> Option<char> {
    match open {
        "{" => Some('}'),
        "(" => Some(')'),
        "[" => Some(']'),
        _ => None,
    }
}

/// Test whether a string contains glob syntax.
///
/// Escaped characters do not count; an escaped opening bracket, brace or
/// paren also hides everything up to its closing partner.
///
/// # Examples
///
/// ```
/// use crosspath::path::is_glob;
///
/// assert!(is_glob("src/**/*.rs"));
/// assert!(is_glob("file.{js,ts}"));
/// assert!(is_glob("!negated"));
/// assert!(!is_glob("plain/path.txt"));
/// assert!(!is_glob("\\*escaped"));
/// assert!(!is_glob(""));
/// ```
#[must_use]
pub fn is_glob(input: &str) -> bool {
    let pattern = glob_syntax();
    let mut rest = input;

    while let Some(captures) = pattern.captures(rest) {
        if captures.get(2).is_some() {
            return true;
        }
        let Some(whole) = captures.get(0) else {
            break;
        };
        let mut next = whole.end();

        if let Some(close) = captures.get(1).and_then(|open| closing_for(open.as_str())) {
            if let Some(offset) = rest[next..].find(close) {
                next += offset + 1;
            }
        }
        rest = &rest[next..];
    }

    false
}
