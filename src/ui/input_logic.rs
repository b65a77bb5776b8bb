use crate::config::{
    FIELD_TEXT_CAPACITY, LEADING_POINT_TEXT, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS,
    MAX_INTEGER_LEN_BEFORE_POINT, ZERO_TEXT,
};
use crate::ui::FieldText;

fn text_of(s: &str) -> FieldText {
    let mut out = FieldText::new();
    // Constants are far shorter than the buffer.
    let _ = out.push_str(s);
    out
}

/// The "0" text a cleared field shows.
pub fn zero() -> FieldText {
    text_of(ZERO_TEXT)
}

/// Text of an armed field after its first key: `.` becomes "0.".
pub fn first_key(ch: char) -> FieldText {
    if ch == '.' {
        text_of(LEADING_POINT_TEXT)
    } else {
        let mut out = FieldText::new();
        let _ = out.push(ch);
        out
    }
}

/// Whether an accumulating field with `text` takes `ch`.
///
/// Without a point: digits while the text has at most 2 characters, a
/// point while it has at most 3. With a point: any character while fewer
/// than 2 follow the last point (so "1.." and "123.4" are reachable).
pub fn accepts(text: &str, ch: char) -> bool {
    if text.len() >= FIELD_TEXT_CAPACITY {
        return false;
    }
    match text.rfind('.') {
        None if text.len() <= MAX_INTEGER_LEN_BEFORE_POINT => {
            (text.len() <= MAX_INTEGER_DIGITS && ch != '.') || ch == '.'
        }
        None => false,
        Some(pos) => text.len() - pos - 1 < MAX_FRACTION_DIGITS,
    }
}

/// Append `ch` if accepted.
pub fn append(text: &mut FieldText, ch: char) {
    if accepts(text, ch) {
        let _ = text.push(ch);
    }
}

/// Drop the last character, flooring at "0".
pub fn delete_last(text: &mut FieldText) {
    if text.len() <= 1 {
        *text = zero();
    } else {
        text.pop();
    }
}
