use regex::Regex;
use std::sync::LazyLock;

static RE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

/// Line separator convention of a block of text.
///
/// A lone `\r` is never a separator, so there is no `Cr` variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// U+000A
    #[default]
    Lf,
    /// U+000D U+000A
    Crlf,
}

impl LineEnding {
    /// CRLF if `s` contains `\r\n` anywhere, LF otherwise.
    pub fn detect(s: &str) -> LineEnding {
        if s.contains("\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// Rewrites LF-normalized text into this convention.
    pub fn apply(&self, s: &str) -> String {
        match self {
            LineEnding::Lf => to_lf(s),
            LineEnding::Crlf => to_crlf(s),
        }
    }
}

pub fn to_lf(s: &str) -> String {
    s.replace("\r\n", "\n")
}

pub fn to_crlf(s: &str) -> String {
    RE_NEWLINE.replace_all(s, "\r\n").into_owned()
}
