use unicode_general_category::{get_general_category, GeneralCategory};

/// Letters of any script and decimal digits. Other numerics such as `²`,
/// `½` or Roman numerals do not start a carry.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

fn bump(c: char) -> char {
    char::from_u32(c as u32 + 1).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Advances `c` by one place, returning the new character and whether the
/// increment carries into the position on its left.
fn step(c: char) -> (char, bool) {
    match c {
        '9' => ('0', true),
        'z' => ('a', true),
        'Z' => ('A', true),
        _ => (bump(c), false),
    }
}

/// Character to insert when a carry runs off the left edge.
fn overflow_prefix(leftmost: char) -> Option<char> {
    if leftmost.is_ascii_digit() {
        Some('1')
    } else if leftmost.is_uppercase() {
        Some('A')
    } else if leftmost.is_lowercase() {
        Some('a')
    } else {
        None
    }
}

/// Returns the successor of `s` in odometer order.
///
/// The rightmost letter or decimal digit is incremented; `9`, `z` and `Z`
/// roll over to `0`, `a` and `A` and carry to the left. A carry past the
/// first character grows the string by one. Strings with no letter or
/// digit get their last character bumped instead.
///
/// ```
/// assert_eq!(strkit::succ("az"), "ba");
/// assert_eq!(strkit::succ("Zz"), "AAa");
/// assert_eq!(strkit::succ("a9"), "b0");
/// ```
pub fn succ(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let Some(last) = chars.len().checked_sub(1) else {
        return String::new();
    };

    let Some(start) = chars.iter().rposition(|&c| is_letter_or_digit(c)) else {
        chars[last] = bump(chars[last]);
        return chars.into_iter().collect();
    };

    let mut carry = true;
    for pos in (0..=start).rev() {
        let (next, more) = step(chars[pos]);
        chars[pos] = next;
        if !more {
            carry = false;
            break;
        }
    }

    let mut out = String::with_capacity(s.len() + 1);
    if carry {
        // Never None in practice: punctuation absorbs the carry
        if let Some(prefix) = overflow_prefix(chars[0]) {
            out.push(prefix);
        }
    }
    out.extend(chars);
    out
}
