use crate::chars::len_rune;

pub fn repeat(s: &str, count: usize) -> String {
    s.repeat(count)
}

/// Leading run of `needed` code points cut from `pad` repeated end to end.
fn fill(pad: &str, needed: usize) -> String {
    pad.chars().cycle().take(needed).collect()
}

/// Pads `s` on the left with `pad` until it is `length` code points long.
///
/// Returns `s` unchanged when it is already long enough or `pad` is empty.
/// The last copy of `pad` is cut short if it does not fit.
pub fn left_pad(s: &str, pad: &str, length: usize) -> String {
    let len = len_rune(s);
    if len >= length || pad.is_empty() {
        return s.to_string();
    }
    let mut out = fill(pad, length - len);
    out.push_str(s);
    out
}

/// Pads `s` on the right; see [`left_pad`].
pub fn right_pad(s: &str, pad: &str, length: usize) -> String {
    let len = len_rune(s);
    if len >= length || pad.is_empty() {
        return s.to_string();
    }
    let mut out = s.to_string();
    out.push_str(&fill(pad, length - len));
    out
}

/// Pads both sides of `s`, one copy of `pad` at a time, left first.
///
/// The left side ends up at most one `pad` wider than the right.
pub fn pad(s: &str, pad: &str, length: usize) -> String {
    let len = len_rune(s);
    if len >= length || pad.is_empty() {
        return s.to_string();
    }

    let unit = len_rune(pad);
    let (mut left, mut right) = (0, 0);
    let mut on_left = true;
    while left + len + right < length {
        let room = length - (left + len + right);
        if on_left {
            left += unit.min(room);
        } else {
            right += unit.min(room);
        }
        on_left = !on_left;
    }

    let padded = left_pad(s, pad, left + len);
    right_pad(&padded, pad, left + len + right)
}
