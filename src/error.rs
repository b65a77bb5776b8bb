//! Unified error type for bmicalc.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for on-target logging.

use core::fmt;

use crate::config::ADVISORY_MESSAGE;
use crate::ui::Field;

/// Errors raised by the calculator. The input state machine never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The field's text is not a plain non-negative decimal literal.
    Parse(Field),

    /// Height converts to zero meters.
    DivisionByZero,
}

impl Error {
    /// Message shown to the user, identical for every error kind.
    pub const fn advisory(&self) -> &'static str {
        ADVISORY_MESSAGE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(field) => write!(f, "invalid input in {} field", field.title()),
            Error::DivisionByZero => f.write_str("height is zero"),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_shows_the_same_advisory() {
        assert_eq!(
            Error::Parse(Field::Weight).advisory(),
            Error::DivisionByZero.advisory()
        );
        assert_eq!(Error::DivisionByZero.advisory(), ADVISORY_MESSAGE);
    }

    #[test]
    fn display_names_the_field() {
        assert_eq!(
            Error::Parse(Field::Height).to_string(),
            "invalid input in Height field"
        );
        assert_eq!(Error::DivisionByZero.to_string(), "height is zero");
    }
}
