//! Property-based tests for both grammars.
//!
//! Note: The normalize module already has property tests for
//! `normalize_string`. This module checks the public operations.

use super::{posix, windows, ParsedPath};
use proptest::prelude::*;

// Strategy for generating path segments, including dot segments
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,12}",
        1 => "[a-z]{1,6}\\.[a-z]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 0..8),
        any::<bool>(),
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut path = parts.join("/");
            if absolute {
                path.insert(0, '/');
            }
            if trailing && !path.is_empty() {
                path.push('/');
            }
            path
        })
}

fn posix_absolute_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 0..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(String::new()),
            Just("\\".to_string()),
            Just("C:".to_string()),
            Just("C:\\".to_string()),
            Just("d:/".to_string()),
            Just("\\\\server\\share\\".to_string()),
        ],
        prop::collection::vec(segment_strategy(), 0..8),
        prop_oneof![Just("\\"), Just("/")],
    )
        .prop_map(|(root, parts, separator)| format!("{root}{}", parts.join(separator)))
}

fn windows_absolute_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("C:\\"),
            Just("c:\\"),
            Just("D:\\"),
            Just("\\\\srv\\one\\"),
            Just("\\\\SRV\\One\\"),
            Just("\\\\srv\\two\\"),
        ],
        prop::collection::vec("[a-cA-C]{1,3}", 0..5),
    )
        .prop_map(|(root, parts)| format!("{root}{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn posix_normalize_idempotent(path in posix_path_strategy()) {
        let once = posix::normalize(&path);
        let twice = posix::normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn windows_normalize_idempotent(path in windows_path_strategy()) {
        let once = windows::normalize(&path);
        let twice = windows::normalize(&once);
        prop_assert_eq!(once, twice);
    }

    // join is normalize of the separator-joined non-empty parts
    #[test]
    fn posix_join_is_normalized_concat(parts in prop::collection::vec(posix_path_strategy(), 1..4)) {
        let non_empty: Vec<&str> = parts.iter().map(String::as_str).filter(|p| !p.is_empty()).collect();
        let expected = if non_empty.is_empty() {
            ".".to_string()
        } else {
            posix::normalize(&non_empty.join("/"))
        };
        prop_assert_eq!(posix::join(&parts), expected);
    }

    // Normalized Windows output never contains a forward slash
    #[test]
    fn windows_normalize_uses_backslash(path in windows_path_strategy()) {
        prop_assert!(!windows::normalize(&path).contains('/'));
    }

    // format(parse(p)) denotes the same location as p
    #[test]
    fn posix_parse_format_round_trip(path in posix_path_strategy()) {
        // parse drops a trailing separator, normalize keeps it
        prop_assume!(path == "/" || !path.ends_with('/'));
        let parsed = posix::parse(&path);
        prop_assert_eq!(posix::normalize(&posix::format(&parsed)), posix::normalize(&path));
    }

    #[test]
    fn windows_parse_format_round_trip(path in windows_path_strategy()) {
        let parsed = windows::parse(&path);
        prop_assert_eq!(windows::normalize(&windows::format(&parsed)), windows::normalize(&path));
    }

    // base == name + ext
    #[test]
    fn posix_parse_base_is_name_and_ext(path in posix_path_strategy()) {
        let ParsedPath { base, name, ext, .. } = posix::parse(&path);
        if base != "/" {
            prop_assert_eq!(base, format!("{name}{ext}"));
        }
    }

    // resolve always yields an absolute path when the cwd is absolute
    #[test]
    fn posix_resolve_is_absolute(paths in prop::collection::vec(posix_path_strategy(), 0..4)) {
        let resolved = posix::resolve_with("/cwd", &paths).unwrap();
        prop_assert!(posix::is_absolute(&resolved));
        prop_assert_eq!(posix::normalize(&resolved), resolved);
    }

    #[test]
    fn windows_resolve_is_absolute(paths in prop::collection::vec(windows_path_strategy(), 0..4)) {
        let resolved = windows::resolve_with("C:\\cwd", &paths).unwrap();
        prop_assert!(windows::is_absolute(&resolved));
    }

    // resolve(from, relative(from, to)) == resolve(to)
    #[test]
    fn posix_relative_inverts_resolve(from in posix_absolute_strategy(), to in posix_absolute_strategy()) {
        let rel = posix::relative_with("/", &from, &to).unwrap();
        let back = posix::resolve_with("/", &[from.as_str(), rel.as_str()]).unwrap();
        prop_assert_eq!(back, posix::resolve_with("/", &[to.as_str()]).unwrap());
    }

    // Drives and shares compare without case, so only the location must match
    #[test]
    fn windows_relative_inverts_resolve(from in windows_absolute_strategy(), to in windows_absolute_strategy()) {
        let cwd = "C:\\cwd";
        let rel = windows::relative_with(cwd, &from, &to).unwrap();
        let back = windows::resolve_with(cwd, &[from.as_str(), rel.as_str()]).unwrap();
        let expected = windows::resolve_with(cwd, &[to.as_str()]).unwrap();
        prop_assert!(back.eq_ignore_ascii_case(&expected), "{} -> {} via {:?}: {}", from, to, rel, back);
    }

    // dirname never grows the path
    #[test]
    fn posix_dirname_is_prefix(path in posix_absolute_strategy()) {
        let dir = posix::dirname(&path);
        prop_assert!(path.starts_with(&dir));
    }

    // File URL conversion round trips for absolute paths
    #[test]
    fn posix_file_url_round_trip(path in posix_absolute_strategy()) {
        let url = posix::to_file_url(&path).unwrap();
        prop_assert_eq!(posix::from_url(&url).unwrap(), path);
    }
}
