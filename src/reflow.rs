use crate::line_ending::{to_lf, LineEnding};
use crate::trim::is_blank;

const LINE_BREAK: &[char] = &['\r', '\n'];
const INDENT_CHARS: &[char] = &[' ', '\t'];

/// Splits `s` on LF after folding CRLF, remembering the original convention.
fn split_lines(s: &str) -> (LineEnding, Vec<String>) {
    let ending = LineEnding::detect(s);
    let lines = to_lf(s).split('\n').map(str::to_string).collect();
    (ending, lines)
}

fn leading_indent(line: &str) -> usize {
    let line = line.trim_end_matches(LINE_BREAK);
    line.len() - line.trim_start_matches(INDENT_CHARS).len()
}

/// Smallest leading space/tab run across the lines of `s`.
///
/// Tabs count as one column. A blank line counts as zero.
pub fn indent_width(s: &str) -> usize {
    let (_, lines) = split_lines(s);
    indent_width_lines(&lines)
}

/// Same as [`indent_width`] over lines that are already split.
///
/// Returns `usize::MAX` for an empty slice, meaning there is nothing to
/// constrain the width.
pub fn indent_width_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| leading_indent(line.as_ref()))
        .min()
        .unwrap_or(usize::MAX)
}

/// Removes the indentation shared by every line of `s`.
///
/// A blank first line and a blank last line are dropped before measuring,
/// so a block written as an indented literal comes back flush left. The
/// result uses the same line ending as the input.
pub fn unindent(s: &str) -> String {
    let (ending, mut lines) = split_lines(s);

    if lines.first().is_some_and(|l| is_blank(l)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }

    let indent = indent_width_lines(&lines);
    let out: Vec<&str> = lines
        .iter()
        .map(|line| {
            let stripped = line.trim_end_matches(LINE_BREAK);
            // Shorter lines are kept whole
            stripped.get(indent..).unwrap_or(line.as_str())
        })
        .collect();

    out.join(ending.as_str())
}

/// Prefixes every line of `s` with `prefix`, blank lines included.
pub fn indent(s: &str, prefix: &str) -> String {
    let (ending, lines) = split_lines(s);
    lines
        .iter()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join(ending.as_str())
}
