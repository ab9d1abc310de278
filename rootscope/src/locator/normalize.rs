//! Locator normalization.
//!
//! Normalization maps every supported locator syntax onto one comparison
//! form:
//! - Backslashes become `/`
//! - Archive and virtual-file schemes (`jar:`, `zip:`, `vfszip:`, ...) are
//!   stripped
//! - `file:` URLs are decoded to local paths
//! - Nested-archive separators (`!/`) are flattened to `/`
//! - Empty and `.` components are dropped and `..` is resolved lexically
//! - Trailing separators are removed
//!
//! Normalization never touches the filesystem and never fails.

use url::Url;

use crate::locator::types::NormalizedPath;

/// The only separator used in normalized paths.
pub const SEPARATOR: char = '/';

/// Separator between an archive and an entry inside it.
pub const NESTED_ARCHIVE_SEPARATOR: &str = "!/";

/// Schemes that wrap a local path without changing where it points.
const WRAPPER_SCHEMES: &[&str] = &["jar:", "zip:", "wsjar:", "vfszip:", "vfsfile:", "vfs:"];

const FILE_SCHEME: &str = "file:";

/// Normalize a raw locator into its comparison form.
///
/// # Examples
///
/// ```
/// use rootscope::locator::normalize::normalize;
///
/// assert_eq!(normalize("/a/b/").as_str(), "/a/b");
/// assert_eq!(normalize("file:/a/b/").as_str(), "/a/b");
/// assert_eq!(normalize("file:///a/my%20lib.jar").as_str(), "/a/my lib.jar");
/// assert_eq!(
///     normalize("jar:file:/a/app.jar!/lib/inner.jar!/com/Foo.class").as_str(),
///     "/a/app.jar/lib/inner.jar/com/Foo.class"
/// );
/// ```
#[must_use]
pub fn normalize(locator: &str) -> NormalizedPath {
    let unified = locator.replace('\\', "/");
    let unwrapped = strip_wrapper_schemes(&unified);
    let local = decode_file_scheme(unwrapped);
    let flattened = flatten_nested_archives(&local);
    let resolved = resolve_components(&flattened);
    NormalizedPath::from_normalized(strip_drive_slash(resolved))
}

/// Strip any number of leading wrapper schemes, case-insensitively.
///
/// # Examples
///
/// ```
/// use rootscope::locator::normalize::strip_wrapper_schemes;
///
/// assert_eq!(strip_wrapper_schemes("jar:file:/a.jar!/"), "file:/a.jar!/");
/// assert_eq!(strip_wrapper_schemes("VFSZIP:/a.jar"), "/a.jar");
/// assert_eq!(strip_wrapper_schemes("/plain"), "/plain");
/// ```
#[must_use]
pub fn strip_wrapper_schemes(locator: &str) -> &str {
    let mut rest = locator;
    'strip: loop {
        for scheme in WRAPPER_SCHEMES {
            if starts_with_ignore_case(rest, scheme) {
                rest = &rest[scheme.len()..];
                continue 'strip;
            }
        }
        return rest;
    }
}

/// Decode a `file:` URL into a local path string.
///
/// Non-`file:` input is returned unchanged. URLs the `url` crate cannot turn
/// into a local path (remote hosts, drive-less paths on Windows) fall back to
/// dropping the scheme and collapsing the authority slashes.
///
/// # Examples
///
/// ```
/// use rootscope::locator::normalize::decode_file_scheme;
///
/// assert_eq!(decode_file_scheme("file:/opt/a%20b"), "/opt/a b");
/// assert_eq!(decode_file_scheme("/opt/a"), "/opt/a");
/// ```
#[must_use]
pub fn decode_file_scheme(locator: &str) -> String {
    if !starts_with_ignore_case(locator, FILE_SCHEME) {
        return locator.to_string();
    }

    if let Some(path) = Url::parse(locator)
        .ok()
        .and_then(|url| url.to_file_path().ok())
    {
        return path.to_string_lossy().replace('\\', "/");
    }

    let rest = &locator[FILE_SCHEME.len()..];
    if rest.starts_with(SEPARATOR) {
        format!("{SEPARATOR}{}", rest.trim_start_matches(SEPARATOR))
    } else {
        rest.to_string()
    }
}

/// Flatten nested-archive separators into plain separators.
///
/// Every run of `!` closing a component is dropped, so `a.jar!!/x` flattens
/// in one pass rather than leaving `a.jar!/x` behind.
///
/// # Examples
///
/// ```
/// use rootscope::locator::normalize::flatten_nested_archives;
///
/// assert_eq!(flatten_nested_archives("/a.jar!/b.jar!/c"), "/a.jar/b.jar/c");
/// assert_eq!(flatten_nested_archives("/a.jar!"), "/a.jar");
/// assert_eq!(flatten_nested_archives("/a!!/b"), "/a/b");
/// ```
#[must_use]
pub fn flatten_nested_archives(locator: &str) -> String {
    locator
        .split(SEPARATOR)
        .map(|component| component.trim_end_matches('!'))
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve `.`, `..` and empty components of a `/`-separated path.
///
/// `..` never climbs above the root of an absolute path. Leading `..` of a
/// relative path is kept, since there is nothing to resolve it against.
///
/// # Examples
///
/// ```
/// use rootscope::locator::normalize::resolve_components;
///
/// assert_eq!(resolve_components("/a/./b/../c/"), "/a/c");
/// assert_eq!(resolve_components("//a//b"), "/a/b");
/// assert_eq!(resolve_components("/a/../.."), "/");
/// assert_eq!(resolve_components("../lib/./x"), "../lib/x");
/// ```
#[must_use]
pub fn resolve_components(path: &str) -> String {
    let absolute = path.starts_with(SEPARATOR);
    let mut parts: Vec<&str> = Vec::new();

    for component in path.split(SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("{SEPARATOR}{joined}")
    } else {
        joined
    }
}

/// `/C:/x` (a drive path that came out of a URL) becomes `C:/x`.
fn strip_drive_slash(path: String) -> String {
    let bytes = path.as_bytes();
    let is_drive = bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
        && (bytes.len() == 3 || bytes[3] == b'/');
    if is_drive {
        path[1..].to_string()
    } else {
        path
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_lose_trailing_separator() {
        assert_eq!(normalize("/a/b/").as_str(), "/a/b");
        assert_eq!(normalize("/a/b").as_str(), "/a/b");
        assert_eq!(normalize("/").as_str(), "/");
    }

    #[test]
    fn test_file_urls_match_plain_paths() {
        assert_eq!(normalize("file:/a/b/"), normalize("/a/b"));
        assert_eq!(normalize("file:///a/b"), normalize("/a/b"));
        assert_eq!(normalize("FILE:/a/b"), normalize("/a/b"));
    }

    #[test]
    fn test_percent_encoding_is_decoded() {
        assert_eq!(normalize("file:/a/my%20dir/").as_str(), "/a/my dir");
    }

    #[test]
    fn test_jar_url_flattens_to_archive_path() {
        assert_eq!(
            normalize("jar:file:/lib/app.jar!/com/example/Foo.class").as_str(),
            "/lib/app.jar/com/example/Foo.class"
        );
        assert_eq!(normalize("jar:file:/lib/app.jar!/").as_str(), "/lib/app.jar");
    }

    #[test]
    fn test_nested_archives_flatten() {
        assert_eq!(
            normalize("jar:file:/app.jar!/BOOT-INF/lib/dep.jar!/org/Dep.class").as_str(),
            "/app.jar/BOOT-INF/lib/dep.jar/org/Dep.class"
        );
    }

    #[test]
    fn test_virtual_schemes_are_stripped() {
        assert_eq!(
            normalize("vfszip:/srv/app.war/WEB-INF/lib/a.jar/").as_str(),
            "/srv/app.war/WEB-INF/lib/a.jar"
        );
        assert_eq!(normalize("vfsfile:/srv/classes/").as_str(), "/srv/classes");
        assert_eq!(normalize("zip:/srv/a.zip!/x").as_str(), "/srv/a.zip/x");
        assert_eq!(normalize("wsjar:file:/srv/a.jar!/x").as_str(), "/srv/a.jar/x");
    }

    #[test]
    fn test_backslashes_become_separators() {
        assert_eq!(normalize(r"C:\work\lib\a.jar").as_str(), "C:/work/lib/a.jar");
    }

    #[test]
    fn test_drive_slash_is_dropped() {
        assert_eq!(normalize("/C:/work").as_str(), "C:/work");
        assert_eq!(normalize("/C:").as_str(), "C:");
        assert_eq!(normalize("/Cx/work").as_str(), "/Cx/work");
    }

    #[test]
    fn test_remote_file_host_falls_back() {
        assert_eq!(normalize("file://server/share/a.jar").as_str(), "/server/share/a.jar");
    }

    #[test]
    fn test_dot_components_resolve() {
        assert_eq!(normalize("/a/./b/../c").as_str(), "/a/c");
        assert_eq!(normalize("/a/../../b").as_str(), "/b");
    }

    #[test]
    fn test_relative_locators_stay_relative() {
        assert_eq!(normalize("lib/a.jar/").as_str(), "lib/a.jar");
        assert_eq!(normalize("").as_str(), "");
    }

    #[test]
    fn test_repeated_archive_markers_flatten_in_one_pass() {
        assert_eq!(normalize("/a!!/b").as_str(), "/a/b");
        assert_eq!(normalize("/a!!/b"), normalize("/a!/b"));
        assert_eq!(normalize("jar:file:/lib/app.jar!!!/x!").as_str(), "/lib/app.jar/x");
    }

    #[test]
    fn test_normalize_is_idempotent_on_examples() {
        for raw in [
            "jar:file:/a.jar!/b/",
            "file:/x/%7Euser/",
            "/a/./b/../c",
            r"D:\x\y\",
            "/a!!/b",
            "jar:file:/a.jar!!/!/b!",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once, "not idempotent for {raw}");
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn component() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_!-]{1,10}"
        }

        fn absolute_path() -> impl Strategy<Value = String> {
            prop::collection::vec(component(), 1..=6)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Normalizing a normalized path changes nothing
            #[test]
            fn normalize_idempotent(s in absolute_path()) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(once.as_str()), once);
            }

            /// Trailing separators never survive
            #[test]
            fn no_trailing_separator(s in absolute_path()) {
                let normalized = normalize(&format!("{s}/"));
                prop_assert!(!normalized.as_str().ends_with('/'));
            }

            /// Wrapping a path in file: or jar:file: does not change its form
            #[test]
            fn schemes_do_not_matter(s in absolute_path()) {
                let plain = normalize(&s);
                prop_assert_eq!(&normalize(&format!("file:{s}")), &plain);
                prop_assert_eq!(&normalize(&format!("jar:file:{s}!/")), &plain);
            }
        }
    }
}
