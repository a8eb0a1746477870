use crate::trim::trim;
use regex::Regex;
use std::sync::LazyLock;

static RE_SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\\/]{2,}").unwrap());

/// Rewrites `path` with single backslash separators.
///
/// Surrounding whitespace is trimmed. A leading `\\` (network share) is
/// kept; any other run of mixed separators collapses to one backslash.
///
/// ```
/// use strkit::to_windows_path_separator;
/// assert_eq!(to_windows_path_separator("C:/my_projects//s/s.go"), r"C:\my_projects\s\s.go");
/// assert_eq!(to_windows_path_separator(r"\\server//share/x"), r"\\server\share\x");
/// ```
pub fn to_windows_path_separator(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let path = trim(path);

    let (unc, rest) = match path.strip_prefix(r"\\") {
        Some(rest) => (true, rest.trim_start_matches(['\\', '/'])),
        None => (false, path),
    };

    let collapsed = RE_SEPARATOR_RUN.replace_all(rest, r"\").replace('/', r"\");
    if unc {
        format!(r"\\{}", collapsed)
    } else {
        collapsed
    }
}

/// Rewrites `path` with single forward-slash separators.
pub fn to_linux_path_separator(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    RE_SEPARATOR_RUN.replace_all(path, "/").replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_windows() {
        assert_eq!(to_windows_path_separator(""), "");
        assert_eq!(to_windows_path_separator("C:/my_projects/s/s.go"), r"C:\my_projects\s\s.go");
        assert_eq!(to_windows_path_separator(r"C:\\a//b\/c"), r"C:\a\b\c");
        assert_eq!(to_windows_path_separator("  a/b \n"), r"a\b");
    }

    #[test]
    fn test_to_windows_unc() {
        assert_eq!(to_windows_path_separator(r"\\server\share"), r"\\server\share");
        assert_eq!(to_windows_path_separator(r"\\\/server/share"), r"\\server\share");
        assert_eq!(to_windows_path_separator(r"\\"), r"\\");
    }

    #[test]
    fn test_to_windows_whitespace_only() {
        assert_eq!(to_windows_path_separator("   "), "");
    }

    #[test]
    fn test_to_linux() {
        assert_eq!(to_linux_path_separator(""), "");
        assert_eq!(to_linux_path_separator(r"C:\my_projects\s\s.go"), "C:/my_projects/s/s.go");
        assert_eq!(to_linux_path_separator(r"a\\//b\c"), "a/b/c");
        assert_eq!(to_linux_path_separator(r"\\server\share"), "/server/share");
        assert_eq!(to_linux_path_separator(" a\\b "), " a/b ");
    }
}
