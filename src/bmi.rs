//! BMI calculation and classification.
//!
//! `compute` is a pure function of the two field texts and their units:
//! both are converted to metric, BMI is rounded half-up to one decimal,
//! and the rounded value is classified.
//!
//! Ranges (on the rounded value):
//! ```text
//! [0, 18.5)    Underweight
//! [18.5, 25)   Normal
//! [25, ...)    Overweight   (value reported as 0.0 above 100)
//! otherwise    Invalid      (negative or non-finite)
//! ```

use core::fmt::Write;

use crate::config::{NORMAL_LOWER_BOUND, OVERWEIGHT_LOWER_BOUND, REPORTABLE_UPPER_BOUND};
use crate::error::{Error, Result};
use crate::ui::Field;
use crate::units::{HeightUnit, WeightUnit};

/// Health classification of a BMI value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    #[default]
    Invalid,
}

/// Colour family the result card uses for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    Blue,
    Green,
    Red,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Invalid => "Invalid",
        }
    }

    /// Underweight is blue, Normal green, everything else red.
    pub const fn tone(self) -> Tone {
        match self {
            Category::Underweight => Tone::Blue,
            Category::Normal => Tone::Green,
            _ => Tone::Red,
        }
    }

    /// Classify a BMI already rounded to one decimal.
    pub fn classify(bmi: f64) -> Self {
        if !bmi.is_finite() || bmi < 0.0 {
            Category::Invalid
        } else if bmi < NORMAL_LOWER_BOUND {
            Category::Underweight
        } else if bmi < OVERWEIGHT_LOWER_BOUND {
            Category::Normal
        } else {
            Category::Overweight
        }
    }
}

/// Result card contents. Replaced wholesale on every calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BmiResult {
    /// BMI rounded to one decimal; 0.0 when above the reportable range.
    pub value: f64,
    pub category: Category,
    /// Whether the card is on screen.
    pub visible: bool,
}

impl BmiResult {
    /// The initial, not-yet-computed result.
    pub const HIDDEN: BmiResult = BmiResult {
        value: 0.0,
        category: Category::Invalid,
        visible: false,
    };

    /// Same result, taken off screen.
    pub const fn hidden(self) -> Self {
        BmiResult {
            visible: false,
            ..self
        }
    }

    /// Value formatted the way the card prints it, e.g. "20.8" or "0.0".
    pub fn display_value(&self) -> heapless::String<16> {
        let mut out = heapless::String::new();
        // 16 bytes holds any one-decimal value up to the reportable bound.
        let _ = write!(out, "{:.1}", self.value);
        out
    }
}

/// Compute the BMI for the given field texts and units.
///
/// Fails with [`Error::Parse`] if either text is not a plain decimal
/// literal, and with [`Error::DivisionByZero`] if the height converts to
/// zero meters.
pub fn compute(
    weight_text: &str,
    weight_unit: WeightUnit,
    height_text: &str,
    height_unit: HeightUnit,
) -> Result<BmiResult> {
    let weight = parse_decimal(weight_text).ok_or(Error::Parse(Field::Weight))?;
    let height = parse_decimal(height_text).ok_or(Error::Parse(Field::Height))?;

    let weight_kg = weight_unit.to_kilograms(weight);
    let height_m = height_unit.to_meters(height);
    if height_m == 0.0 {
        return Err(Error::DivisionByZero);
    }

    let bmi = round_tenths(weight_kg / (height_m * height_m));
    let category = Category::classify(bmi);
    let value = if bmi > REPORTABLE_UPPER_BOUND { 0.0 } else { bmi };

    Ok(BmiResult {
        value,
        category,
        visible: true,
    })
}

/// Parse a keypad decimal literal: ASCII digits with at most one `.`,
/// at least one digit. Signs, exponents and `inf`/`NaN` are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let mut points = 0;
    let mut digits = 0;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    text.parse().ok()
}

/// Round half-up to one decimal place.
///
/// Saturates on overflow; the caller treats such values as out of range.
fn round_tenths(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scaled = x * 10.0 + 0.5;
    let mut whole = scaled as i64;
    // `as` truncates toward zero; step down to get the floor of negatives.
    if (whole as f64) > scaled {
        whole -= 1;
    }
    whole as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_screen_values_are_normal() {
        let r = compute("60", WeightUnit::Kilograms, "170", HeightUnit::Centimeter).unwrap();
        assert!(close(r.value, 20.8));
        assert_eq!(r.category, Category::Normal);
        assert!(r.visible);
    }

    #[test]
    fn exact_twenty() {
        let r = compute("45", WeightUnit::Kilograms, "150", HeightUnit::Centimeter).unwrap();
        assert!(close(r.value, 20.0));
        assert_eq!(r.category, Category::Normal);
    }

    #[test]
    fn imperial_rounds_up_into_overweight() {
        let r = compute("150", WeightUnit::Pounds, "65", HeightUnit::Inches).unwrap();
        assert!(close(r.value, 25.0));
        assert_eq!(r.category, Category::Overweight);
    }

    #[test]
    fn meters_and_feet() {
        let r = compute("80", WeightUnit::Kilograms, "2", HeightUnit::Meter).unwrap();
        assert!(close(r.value, 20.0));

        // 70 / (6 * 0.3048)^2 = 20.93...
        let r = compute("70", WeightUnit::Kilograms, "6", HeightUnit::Feet).unwrap();
        assert!(close(r.value, 20.9));
    }

    #[test]
    fn zero_height_is_a_division_error() {
        assert_eq!(
            compute("60", WeightUnit::Kilograms, "0", HeightUnit::Centimeter),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            compute("0", WeightUnit::Pounds, "0.", HeightUnit::Feet),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn unparsable_text_names_the_field() {
        assert_eq!(
            compute("1.2.", WeightUnit::Kilograms, "170", HeightUnit::Centimeter),
            Err(Error::Parse(Field::Weight))
        );
        assert_eq!(
            compute("60", WeightUnit::Kilograms, "", HeightUnit::Centimeter),
            Err(Error::Parse(Field::Height))
        );
    }

    #[test]
    fn parse_decimal_accepts_keypad_literals_only() {
        assert_eq!(parse_decimal("60"), Some(60.0));
        assert_eq!(parse_decimal("0."), Some(0.0));
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal("123.45"), Some(123.45));
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-5"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("1.."), None);
    }

    #[test]
    fn above_one_hundred_reports_zero_but_stays_overweight() {
        // 99 / 0.5^2 = 396
        let r = compute("99", WeightUnit::Kilograms, "50", HeightUnit::Centimeter).unwrap();
        assert_eq!(r.value, 0.0);
        assert_eq!(r.category, Category::Overweight);
        assert!(r.visible);
    }

    #[test]
    fn exactly_one_hundred_is_reported() {
        // 100 / 1^2 = 100
        let r = compute("100", WeightUnit::Kilograms, "1", HeightUnit::Meter).unwrap();
        assert!(close(r.value, 100.0));
        assert_eq!(r.category, Category::Overweight);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(Category::classify(0.0), Category::Underweight);
        assert_eq!(Category::classify(18.4), Category::Underweight);
        assert_eq!(Category::classify(18.5), Category::Normal);
        assert_eq!(Category::classify(24.9), Category::Normal);
        assert_eq!(Category::classify(25.0), Category::Overweight);
        assert_eq!(Category::classify(250.0), Category::Overweight);
        assert_eq!(Category::classify(-0.1), Category::Invalid);
        assert_eq!(Category::classify(f64::NAN), Category::Invalid);
    }

    #[test]
    fn rounding_is_half_up() {
        assert!(close(round_tenths(20.75), 20.8));
        assert!(close(round_tenths(20.749), 20.7));
        assert!(close(round_tenths(0.04), 0.0));
        assert!(close(round_tenths(-1.25), -1.2));
    }

    #[test]
    fn tones_follow_the_card_colours() {
        assert_eq!(Category::Underweight.tone(), Tone::Blue);
        assert_eq!(Category::Normal.tone(), Tone::Green);
        assert_eq!(Category::Overweight.tone(), Tone::Red);
        assert_eq!(Category::Invalid.tone(), Tone::Red);
    }

    #[test]
    fn display_value_keeps_one_decimal() {
        let r = BmiResult {
            value: 20.0,
            category: Category::Normal,
            visible: true,
        };
        assert_eq!(r.display_value().as_str(), "20.0");
        assert_eq!(BmiResult::HIDDEN.display_value().as_str(), "0.0");
    }

    #[test]
    fn hidden_keeps_value() {
        let r = compute("60", WeightUnit::Kilograms, "170", HeightUnit::Centimeter)
            .unwrap()
            .hidden();
        assert!(!r.visible);
        assert_eq!(r.category, Category::Normal);
    }
}
