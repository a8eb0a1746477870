pub mod chars;
pub mod config;
pub mod error;
pub mod line_ending;
pub mod pad;
pub mod path;
pub mod pattern;
pub mod reflow;
pub mod succ;
pub mod trim;

pub use chars::{
    append, dedupe, each_char, len_byte, len_graphemes, len_rune, length_byte, length_rune,
    prepend,
};
pub use error::PatternError;
pub use line_ending::{to_crlf, to_lf, LineEnding};
pub use pad::{left_pad, pad, repeat, right_pad};
pub use path::{to_linux_path_separator, to_windows_path_separator};
pub use pattern::{
    filter_lines, grep, group, highlight, is_match, reject_lines, try_filter_lines, try_grep,
    try_group, try_highlight, try_is_match, try_reject_lines,
};
pub use reflow::{indent, indent_width, indent_width_lines, unindent};
pub use succ::succ;
pub use trim::{lstrip, rstrip, strip, trim, trim_left, trim_right, WHITESPACE};

use config::Config;

/// One transformation over a block of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Trim,
    Ltrim,
    Rtrim,
    Unindent,
    /// Prefix every line; `None` takes the prefix from the config.
    Indent { prefix: Option<String> },
    IndentWidth,
    Succ,
    Dedupe,
    Len { graphemes: bool, bytes: bool },
    Pad { width: usize, with: Option<String> },
    Lpad { width: usize, with: Option<String> },
    Rpad { width: usize, with: Option<String> },
    /// Every match, one per line.
    Grep { pattern: String },
    IsMatch { pattern: String },
    Group { pattern: String, group: String },
    Highlight {
        pattern: String,
        left: Option<String>,
        right: Option<String>,
    },
    Filter { pattern: String, invert: bool },
    WinPath,
    LinuxPath,
}

/// Runs `op` over `text`, then rewrites line endings if the config asks to.
pub fn apply(text: &str, op: &Operation, config: &Config) -> String {
    let output = match op {
        Operation::Trim => trim(text).to_string(),
        Operation::Ltrim => trim_left(text).to_string(),
        Operation::Rtrim => trim_right(text).to_string(),
        Operation::Unindent => unindent(text),
        Operation::Indent { prefix } => indent(text, prefix.as_deref().unwrap_or(&config.indent)),
        Operation::IndentWidth => indent_width(text).to_string(),
        Operation::Succ => succ(text),
        Operation::Dedupe => dedupe(text),
        Operation::Len { graphemes, bytes } => {
            let n = if *graphemes {
                len_graphemes(text)
            } else if *bytes {
                len_byte(text)
            } else {
                len_rune(text)
            };
            n.to_string()
        }
        Operation::Pad { width, with } => pad(text, with.as_deref().unwrap_or(&config.pad), *width),
        Operation::Lpad { width, with } => {
            left_pad(text, with.as_deref().unwrap_or(&config.pad), *width)
        }
        Operation::Rpad { width, with } => {
            right_pad(text, with.as_deref().unwrap_or(&config.pad), *width)
        }
        Operation::Grep { pattern } => grep(text, pattern).join("\n"),
        Operation::IsMatch { pattern } => is_match(text, pattern).to_string(),
        Operation::Group { pattern, group: name } => group(text, pattern, name),
        Operation::Highlight {
            pattern,
            left,
            right,
        } => highlight(
            text,
            pattern,
            left.as_deref().unwrap_or(&config.highlight_left),
            right.as_deref().unwrap_or(&config.highlight_right),
        ),
        Operation::Filter { pattern, invert } => {
            if *invert {
                reject_lines(text, pattern)
            } else {
                filter_lines(text, pattern)
            }
        }
        Operation::WinPath => to_windows_path_separator(text),
        Operation::LinuxPath => to_linux_path_separator(text),
    };

    match config.line_ending.target() {
        Some(ending) => ending.apply(&output),
        None => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineEndingMode;

    #[test]
    fn test_apply_uses_config_defaults() {
        let config = Config::default();
        assert_eq!(apply("a\nb", &Operation::Indent { prefix: None }, &config), "  a\n  b");
        assert_eq!(
            apply("x", &Operation::Pad { width: 3, with: None }, &config),
            " x "
        );
        let op = Operation::Highlight {
            pattern: "b".to_string(),
            left: None,
            right: None,
        };
        assert_eq!(apply("abc", &op, &config), "a[b]c");
    }

    #[test]
    fn test_apply_flag_overrides_config() {
        let config = Config::default();
        let op = Operation::Indent {
            prefix: Some("> ".to_string()),
        };
        assert_eq!(apply("a", &op, &config), "> a");
        let op = Operation::Lpad {
            width: 4,
            with: Some("0".to_string()),
        };
        assert_eq!(apply("42", &op, &config), "0042");
    }

    #[test]
    fn test_apply_scalar_results() {
        let config = Config::default();
        assert_eq!(apply("  a\n   b", &Operation::IndentWidth, &config), "2");
        assert_eq!(
            apply(
                "e\u{0301}",
                &Operation::Len {
                    graphemes: true,
                    bytes: false
                },
                &config
            ),
            "1"
        );
        let op = Operation::IsMatch {
            pattern: "^a".to_string(),
        };
        assert_eq!(apply("abc", &op, &config), "true");
    }

    #[test]
    fn test_apply_grep_one_per_line() {
        let config = Config::default();
        let op = Operation::Grep {
            pattern: r"\d+".to_string(),
        };
        assert_eq!(apply("a1 b22 c333", &op, &config), "1\n22\n333");
    }

    #[test]
    fn test_apply_line_ending_override() {
        let mut config = Config::default();
        config.line_ending = LineEndingMode::Crlf;
        assert_eq!(apply("\n  a\n  b\n", &Operation::Unindent, &config), "a\r\nb");

        config.line_ending = LineEndingMode::Lf;
        assert_eq!(apply("x\r\ny", &Operation::Dedupe, &config), "x\ny");
    }
}
