//! On-screen numeric keypad.
//!
//! Layout (4 rows x 3 columns):
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! _ 0 .
//! ```
//! The bottom-left slot is a blank key that does nothing.

/// A keypad key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Decimal digit. Values above 9 are treated as blank.
    Digit(u8),
    /// Decimal point.
    Point,
    /// Empty slot.
    Blank,
}

/// Keypad keys in row-major order.
pub const KEYPAD_LAYOUT: [[Key; 3]; 4] = [
    [Key::Digit(1), Key::Digit(2), Key::Digit(3)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6)],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9)],
    [Key::Blank, Key::Digit(0), Key::Point],
];

impl Key {
    /// Map a keypad character (`'0'..='9'` or `'.'`) to a key.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Key::Point),
            _ => c.to_digit(10).map(|d| Key::Digit(d as u8)),
        }
    }

    /// Character this key types, or `None` for a blank key.
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            Key::Point => Some('.'),
            Key::Blank => None,
        }
    }

    /// Caption printed on the key.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or(""),
            Key::Point => ".",
            Key::Blank => "",
        }
    }

    /// Key at `row`, `col` of the layout.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        KEYPAD_LAYOUT.get(row)?.get(col).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char('.'), Some(Key::Point));
        assert_eq!(Key::from_char('a'), None);
        assert_eq!(Key::from_char(','), None);
        assert_eq!(Key::Digit(0).as_char(), Some('0'));
        assert_eq!(Key::Digit(12).as_char(), None);
        assert_eq!(Key::Blank.as_char(), None);
    }

    #[test]
    fn layout_labels() {
        let labels: Vec<&str> = KEYPAD_LAYOUT.iter().flatten().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "", "0", "."]
        );
    }

    #[test]
    fn key_lookup_by_position() {
        assert_eq!(Key::at(0, 0), Some(Key::Digit(1)));
        assert_eq!(Key::at(3, 2), Some(Key::Point));
        assert_eq!(Key::at(3, 0), Some(Key::Blank));
        assert_eq!(Key::at(4, 0), None);
        assert_eq!(Key::at(0, 3), None);
    }
}
