use unicode_segmentation::UnicodeSegmentation;

/// Number of code points in `s`.
pub fn len_rune(s: &str) -> usize {
    s.chars().count()
}

pub fn length_rune(s: &str) -> usize {
    len_rune(s)
}

pub fn len_byte(s: &str) -> usize {
    s.len()
}

pub fn length_byte(s: &str) -> usize {
    len_byte(s)
}

/// Number of user-perceived characters (extended grapheme clusters).
pub fn len_graphemes(s: &str) -> usize {
    s.graphemes(true).count()
}

pub fn each_char<F>(s: &str, mut f: F)
where
    F: FnMut(char, usize),
{
    for (i, c) in s.chars().enumerate() {
        f(c, i);
    }
}

/// Collapses every run of the same code point into one.
pub fn dedupe(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = None;
    for c in s.chars() {
        if prev != Some(c) {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

pub fn append(s: &str, suffixes: &[&str]) -> String {
    let extra: usize = suffixes.iter().map(|x| x.len()).sum();
    let mut out = String::with_capacity(s.len() + extra);
    out.push_str(s);
    for suffix in suffixes {
        out.push_str(suffix);
    }
    out
}

/// Puts `prefixes` in front of `s`, each one in front of the previous.
pub fn prepend(s: &str, prefixes: &[&str]) -> String {
    let extra: usize = prefixes.iter().map(|x| x.len()).sum();
    let mut out = String::with_capacity(s.len() + extra);
    for prefix in prefixes.iter().rev() {
        out.push_str(prefix);
    }
    out.push_str(s);
    out
}
