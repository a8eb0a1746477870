/// Characters stripped by the trim family and skipped by blank-line checks.
pub const WHITESPACE: &[char] = &['\t', '\n', '\r', ' '];

pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

pub fn trim_left(s: &str) -> &str {
    s.trim_start_matches(WHITESPACE)
}

pub fn trim_right(s: &str) -> &str {
    s.trim_end_matches(WHITESPACE)
}

pub fn strip(s: &str) -> &str {
    trim(s)
}

pub fn lstrip(s: &str) -> &str {
    trim_left(s)
}

pub fn rstrip(s: &str) -> &str {
    trim_right(s)
}

pub(crate) fn is_blank(s: &str) -> bool {
    trim(s).is_empty()
}
