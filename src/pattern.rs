//! Regex helpers over caller-supplied patterns.
//!
//! Each helper comes in two flavors. The plain one never fails: a pattern
//! that does not compile gives the same answer as a pattern that does not
//! match (`false`, an empty list, an empty string or the input unchanged).
//! The `try_` one reports the bad pattern as a [`PatternError`].

use crate::error::PatternError;
use crate::line_ending::{to_lf, LineEnding};
use regex::{Captures, Regex};

fn compile(pattern: &str) -> Result<Regex, PatternError> {
    compile_as(pattern, pattern)
}

/// Compiles `regex`, reporting failures against the caller's `pattern`.
fn compile_as(pattern: &str, regex: &str) -> Result<Regex, PatternError> {
    Regex::new(regex).map_err(|source| PatternError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn or_neutral<T>(result: Result<T, PatternError>, neutral: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|e| {
        log::debug!("{}", e);
        neutral()
    })
}

/// Wraps an unanchored pattern so it may match anywhere in the subject.
fn loosen(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    if !pattern.starts_with('^') {
        out.push_str(".*");
    }
    out.push_str(pattern);
    if !pattern.ends_with('$') {
        out.push_str(".*");
    }
    out
}

pub fn try_is_match(s: &str, pattern: &str) -> Result<bool, PatternError> {
    let re = compile_as(pattern, &loosen(pattern))?;
    Ok(re.is_match(s))
}

/// Whether `pattern` matches somewhere in `s`.
///
/// `^` and `$` keep their anchoring meaning; without them the pattern may
/// match a substring.
pub fn is_match(s: &str, pattern: &str) -> bool {
    or_neutral(try_is_match(s, pattern), || false)
}

pub fn try_grep(s: &str, pattern: &str) -> Result<Vec<String>, PatternError> {
    let re = compile(pattern)?;
    Ok(re.find_iter(s).map(|m| m.as_str().to_string()).collect())
}

/// Every non-overlapping match of `pattern`, whole match only.
pub fn grep(s: &str, pattern: &str) -> Vec<String> {
    or_neutral(try_grep(s, pattern), Vec::new)
}

fn lookup<'h>(re: &Regex, caps: &Captures<'h>, group: &str) -> Option<&'h str> {
    if let Ok(index) = group.parse::<i64>() {
        let index = usize::try_from(index).ok()?;
        return caps.get(index).map(|m| m.as_str());
    }
    // Unnamed groups, the whole match included, answer to ""
    let index = re
        .capture_names()
        .position(|name| name.unwrap_or("") == group)?;
    caps.get(index).map(|m| m.as_str())
}

/// Capture `group` of the first match. `Ok(None)` when nothing matched or
/// the group is unknown or did not take part in the match.
pub fn try_group(s: &str, pattern: &str, group: &str) -> Result<Option<String>, PatternError> {
    let re = compile(pattern)?;
    Ok(re
        .captures(s)
        .and_then(|caps| lookup(&re, &caps, group))
        .map(str::to_string))
}

/// Text of capture `group` in the first match of `pattern`.
///
/// `group` is either a decimal index (`"0"` is the whole match) or a
/// capture name.
pub fn group(s: &str, pattern: &str, group: &str) -> String {
    or_neutral(try_group(s, pattern, group), || None).unwrap_or_default()
}

pub fn try_highlight(
    s: &str,
    pattern: &str,
    left: &str,
    right: &str,
) -> Result<String, PatternError> {
    let re = compile(pattern)?;
    Ok(re
        .replace_all(s, |caps: &Captures| format!("{}{}{}", left, &caps[0], right))
        .into_owned())
}

/// Surrounds every match of `pattern` with `left` and `right`.
pub fn highlight(s: &str, pattern: &str, left: &str, right: &str) -> String {
    or_neutral(try_highlight(s, pattern, left, right), || s.to_string())
}

fn select_lines(s: &str, pattern: &str, keep: bool) -> Result<String, PatternError> {
    let re = compile(pattern)?;
    let ending = LineEnding::detect(s);
    let normalized = to_lf(s);
    let lines: Vec<&str> = normalized
        .split('\n')
        .filter(|line| re.is_match(line) == keep)
        .collect();
    Ok(lines.join(ending.as_str()))
}

pub fn try_filter_lines(s: &str, pattern: &str) -> Result<String, PatternError> {
    select_lines(s, pattern, true)
}

pub fn try_reject_lines(s: &str, pattern: &str) -> Result<String, PatternError> {
    select_lines(s, pattern, false)
}

/// Keeps the lines of `s` that match `pattern`, in the input's line ending.
pub fn filter_lines(s: &str, pattern: &str) -> String {
    or_neutral(try_filter_lines(s, pattern), || s.to_string())
}

/// Keeps the lines of `s` that do not match `pattern`.
pub fn reject_lines(s: &str, pattern: &str) -> String {
    or_neutral(try_reject_lines(s, pattern), || s.to_string())
}
