//! Integration tests for the path engine.
//!
//! Exercises the public surface of both grammars end to end: the
//! documented scenarios, the algebraic laws that tie the operations
//! together, and runtime dispatch through `Grammar`. Per-function edge
//! cases live in the unit tests of each grammar module.

mod common;

use common::{POSIX_CWD, WINDOWS_CWD};
use crosspath::path::{is_glob, posix, windows, GlobOptions, Grammar, ParsedPath};
use crosspath::Error;

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_posix_normalize_collapses_dot_dot() {
    assert_eq!(
        posix::normalize("/foo/bar//baz/asdf/quux/.."),
        "/foo/bar/baz/asdf"
    );
}

#[test]
fn test_posix_resolve_segments() {
    assert_eq!(
        posix::resolve(&["/foo", "bar", "baz/asdf", "quux", ".."]).unwrap(),
        "/foo/bar/baz/asdf"
    );
}

#[test]
fn test_windows_normalize_unc() {
    assert_eq!(
        windows::normalize("//server/share/dir/file.ext"),
        "\\\\server\\share\\dir\\file.ext"
    );
}

#[test]
fn test_windows_parse_unc_root() {
    assert_eq!(
        windows::parse("\\\\server\\share"),
        ParsedPath {
            root: "\\\\server\\share".to_string(),
            dir: "\\\\server\\share".to_string(),
            base: "\\".to_string(),
            ext: String::new(),
            name: String::new(),
        }
    );
}

#[test]
fn test_posix_from_file_url() {
    assert_eq!(
        posix::from_file_url("file:///home/foo%20bar").unwrap(),
        "/home/foo bar"
    );

    let err = posix::from_file_url("http://localhost/foo").unwrap_err();
    assert!(matches!(err, Error::NotAFileUrl { .. }));
    assert!(err.is_type_error());
    assert!(err.to_string().contains("received \"http:\""));
}

#[test]
fn test_windows_to_namespaced_path() {
    assert_eq!(
        windows::to_namespaced_path_with(WINDOWS_CWD, "C:\\foo\\bar").unwrap(),
        "\\\\?\\C:\\foo\\bar"
    );
    assert_eq!(
        windows::to_namespaced_path_with(WINDOWS_CWD, "\\\\path\\to\\file.txt").unwrap(),
        "\\\\?\\UNC\\path\\to\\file.txt"
    );
}

#[test]
fn test_windows_to_namespaced_path_returns_unmatched_input() {
    // A POSIX working directory resolves to no Windows root pattern, so the
    // input comes back untouched rather than resolved.
    assert_eq!(
        windows::to_namespaced_path_with("/srv", "relative\\file").unwrap(),
        "relative\\file"
    );
    assert_eq!(
        windows::to_namespaced_path_with(WINDOWS_CWD, "\\\\?\\C:\\x").unwrap(),
        "\\\\?\\C:\\x"
    );
}

// ============================================================================
// Laws
// ============================================================================

const POSIX_SAMPLES: &[&str] = &[
    "",
    ".",
    "/",
    "//",
    "a/b/c",
    "/a/./b/../../..",
    "../../x",
    "./foo/",
    "/foo/bar//baz/asdf/quux/..",
    "foo/**/../bar",
];

const WINDOWS_SAMPLES: &[&str] = &[
    "",
    "C:",
    "C:\\",
    "c:/a/../b",
    "C:..\\x",
    "\\\\server\\share",
    "//server/share/dir/../f",
    "\\a\\.\\b\\",
    "..\\..\\y",
    "a/b\\c",
];

#[test]
fn test_normalize_is_idempotent() {
    for path in POSIX_SAMPLES {
        let once = posix::normalize(path);
        assert_eq!(posix::normalize(&once), once, "posix {path:?}");
    }
    for path in WINDOWS_SAMPLES {
        let once = windows::normalize(path);
        assert_eq!(windows::normalize(&once), once, "windows {path:?}");
    }
}

#[test]
fn test_join_equals_normalized_concatenation() {
    let triples = [("a", "b", "c"), ("foo", "..", "bar"), ("x.y", ".", "z")];
    for (a, b, c) in triples {
        assert_eq!(posix::join(&[a, b, c]), posix::normalize(&format!("{a}/{b}/{c}")));
        assert_eq!(
            windows::join(&[a, b, c]),
            windows::normalize(&format!("{a}\\{b}\\{c}"))
        );
    }
}

#[test]
fn test_resolve_is_absolute() {
    for path in POSIX_SAMPLES {
        let resolved = posix::resolve_with(POSIX_CWD, &[path]).unwrap();
        assert!(posix::is_absolute(&resolved), "posix {path:?} -> {resolved}");
    }
    for path in WINDOWS_SAMPLES {
        let resolved = windows::resolve_with(WINDOWS_CWD, &[path]).unwrap();
        assert!(windows::is_absolute(&resolved), "windows {path:?} -> {resolved}");
    }
}

#[test]
fn test_relative_inverts_resolve() {
    let pairs = [
        ("/a/b/c", "/a/d"),
        ("/", "/x/y"),
        ("/x/y", "/"),
        ("rel", "/abs/path"),
        ("/same", "/same"),
    ];
    for (from, to) in pairs {
        let rel = posix::relative_with(POSIX_CWD, from, to).unwrap();
        assert_eq!(
            posix::resolve_with(POSIX_CWD, &[from, rel.as_str()]).unwrap(),
            posix::resolve_with(POSIX_CWD, &[to]).unwrap(),
            "{from} -> {to} via {rel:?}"
        );
    }

    let pairs = [
        ("C:\\a\\b", "C:\\a\\c\\d"),
        ("C:\\a", "D:\\b"),
        ("\\\\srv\\share\\x", "\\\\srv\\share\\y"),
        ("\\\\srv\\one\\x", "\\\\srv\\two\\y"),
        ("C:\\x", "C:\\x"),
    ];
    for (from, to) in pairs {
        let rel = windows::relative_with(WINDOWS_CWD, from, to).unwrap();
        assert_eq!(
            windows::resolve_with(WINDOWS_CWD, &[from, rel.as_str()]).unwrap(),
            windows::resolve_with(WINDOWS_CWD, &[to]).unwrap(),
            "{from} -> {to} via {rel:?}"
        );
    }
}

#[test]
fn test_parse_format_round_trip() {
    for path in ["/home/user/file.txt", "/", "file", "dir/.bashrc", "a/b.tar.gz"] {
        let parsed = posix::parse(path);
        if parsed.base != "/" {
            assert_eq!(parsed.base, format!("{}{}", parsed.name, parsed.ext));
        }
        assert_eq!(posix::normalize(&posix::format(&parsed)), posix::normalize(path));
    }
    for path in ["C:\\dir\\file.txt", "C:\\", "\\\\server\\share", "C:abc", "x\\.git"] {
        let parsed = windows::parse(path);
        assert_eq!(windows::normalize(&windows::format(&parsed)), windows::normalize(path));
    }
}

#[test]
fn test_format_prefers_dir_and_base() {
    let parsed = ParsedPath {
        root: "/ignored".to_string(),
        dir: "/home/user/dir".to_string(),
        base: "file.txt".to_string(),
        ext: ".ignored".to_string(),
        name: "ignored".to_string(),
    };
    assert_eq!(posix::format(&parsed), "/home/user/dir/file.txt");

    let parsed = ParsedPath {
        root: "C:\\".to_string(),
        name: "file".to_string(),
        ext: ".txt".to_string(),
        ..ParsedPath::default()
    };
    assert_eq!(windows::format(&parsed), "C:\\file.txt");
}

// ============================================================================
// Common prefix and globs
// ============================================================================

#[test]
fn test_common_prefix() {
    assert_eq!(
        posix::common(&["/usr/local/bin", "/usr/local/lib"]),
        "/usr/local/"
    );
    assert_eq!(
        posix::common(&["/usr/local/bin", "/usr/local/lib", "/usr/local"]),
        "/usr/local"
    );
    assert_eq!(posix::common(&["/a/b", "/a/b"]), posix::common(&["/a/b"]));
    assert_eq!(posix::common(&["/a", "/b"]), "/");
    assert_eq!(posix::common(&["a", "b"]), "");
    assert_eq!(
        windows::common(&["C:\\proj\\std\\path", "C:\\proj\\std\\fs"]),
        "C:\\proj\\std\\"
    );
    let none: [&str; 0] = [];
    assert_eq!(posix::common(&none), "");
}

#[test]
fn test_globstar_keeps_parent_segment() {
    let globstar = GlobOptions::default().with_globstar(true);
    assert_eq!(posix::normalize_glob("src/**/../lib", globstar), "src/**/../lib");
    assert_eq!(posix::normalize_glob("src/**/../lib", GlobOptions::default()), "src/lib");
    assert_eq!(
        windows::join_globs(&["src", "**", "..", "lib"], globstar),
        "src\\**\\..\\lib"
    );
    assert!(is_glob("src/**/*.rs"));
    assert!(!is_glob("src/main.rs"));
}

// ============================================================================
// Runtime dispatch
// ============================================================================

#[test]
fn test_grammar_dispatch_matches_modules() {
    let cases = ["/a//b/../c", "C:/x/./y", "\\\\srv\\share\\z", "rel/x.tar.gz"];
    for path in cases {
        assert_eq!(Grammar::Posix.normalize(path), posix::normalize(path));
        assert_eq!(Grammar::Windows.normalize(path), windows::normalize(path));
        assert_eq!(Grammar::Posix.parse_path(path), posix::parse(path));
        assert_eq!(Grammar::Windows.parse_path(path), windows::parse(path));
        assert_eq!(Grammar::Windows.extname(path), windows::extname(path));
        assert_eq!(Grammar::Posix.is_absolute(path), posix::is_absolute(path));
    }
}

#[test]
fn test_grammar_resolve_with_cwd() {
    assert_eq!(
        Grammar::Posix.resolve_with(POSIX_CWD, &["..", "other"]).unwrap(),
        "/home/tester/other"
    );
    assert_eq!(
        Grammar::Windows.resolve_with(WINDOWS_CWD, &["..", "other"]).unwrap(),
        "C:\\Users\\tester\\other"
    );
}

#[test]
fn test_grammar_names_round_trip() {
    for grammar in [Grammar::Posix, Grammar::Windows] {
        assert_eq!(grammar.name().parse::<Grammar>().unwrap(), grammar);
    }
    assert_eq!(Grammar::Posix.separator(), '/');
    assert_eq!(Grammar::Windows.delimiter(), ';');
    assert!("vms".parse::<Grammar>().is_err());
}
