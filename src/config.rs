use crate::line_ending::LineEnding;
use serde::Deserialize;

/// Line ending written by the command-line front end.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingMode {
    /// Whatever the operation produced.
    #[default]
    Preserve,
    Lf,
    Crlf,
}

impl LineEndingMode {
    pub fn target(&self) -> Option<LineEnding> {
        match self {
            LineEndingMode::Preserve => None,
            LineEndingMode::Lf => Some(LineEnding::Lf),
            LineEndingMode::Crlf => Some(LineEnding::Crlf),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_indent")]
    pub indent: String,

    #[serde(default = "default_pad")]
    pub pad: String,

    #[serde(default = "default_highlight_left")]
    pub highlight_left: String,

    #[serde(default = "default_highlight_right")]
    pub highlight_right: String,

    #[serde(default)]
    pub line_ending: LineEndingMode,
}

fn default_indent() -> String {
    "  ".to_string()
}
fn default_pad() -> String {
    " ".to_string()
}
fn default_highlight_left() -> String {
    "[".to_string()
}
fn default_highlight_right() -> String {
    "]".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: default_indent(),
            pad: default_pad(),
            highlight_left: default_highlight_left(),
            highlight_right: default_highlight_right(),
            line_ending: LineEndingMode::Preserve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, "  ");
        assert_eq!(config.pad, " ");
        assert_eq!(config.highlight_left, "[");
        assert_eq!(config.highlight_right, "]");
        assert_eq!(config.line_ending, LineEndingMode::Preserve);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "indent": "\t",
            "pad": "0",
            "highlight_left": "<<",
            "highlight_right": ">>",
            "line_ending": "crlf"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.indent, "\t");
        assert_eq!(config.pad, "0");
        assert_eq!(config.highlight_left, "<<");
        assert_eq!(config.highlight_right, ">>");
        assert_eq!(config.line_ending, LineEndingMode::Crlf);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"pad": "-"}"#).unwrap();
        assert_eq!(config.pad, "-");
        assert_eq!(config.indent, "  ");
        assert_eq!(config.line_ending, LineEndingMode::Preserve);
    }

    #[test]
    fn test_line_ending_variants() {
        let lf: Config = serde_json::from_str(r#"{"line_ending": "lf"}"#).unwrap();
        assert_eq!(lf.line_ending.target(), Some(LineEnding::Lf));

        let keep: Config = serde_json::from_str(r#"{"line_ending": "preserve"}"#).unwrap();
        assert_eq!(keep.line_ending.target(), None);

        assert!(serde_json::from_str::<Config>(r#"{"line_ending": "cr"}"#).is_err());
    }
}
