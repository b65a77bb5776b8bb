//! Application-wide constants and compile-time configuration.
//!
//! Screen defaults, conversion factors, and classification thresholds
//! live here so they can be tuned in one place.

// Screen defaults

/// Weight text shown when the screen is first created.
pub const DEFAULT_WEIGHT_TEXT: &str = "60";

/// Height text shown when the screen is first created.
pub const DEFAULT_HEIGHT_TEXT: &str = "170";

/// Text a field is reset to by the AC key and by deleting its last character.
pub const ZERO_TEXT: &str = "0";

/// Text a field gets when `.` is the first key pressed after arming it.
pub const LEADING_POINT_TEXT: &str = "0.";

// Keypad text limits
//
// The keypad logic caps input at 2 integer digits and 2 fractional digits,
// with two known leaks (a third integer digit followed by `.`, and repeated
// `.` keys while the fraction is short). The buffer capacity bounds the
// second leak.

/// Capacity of a field's text buffer (bytes, ASCII only).
pub const FIELD_TEXT_CAPACITY: usize = 16;

/// Integer-part length up to which digits are still appended.
pub const MAX_INTEGER_DIGITS: usize = 2;

/// Integer-part length up to which a `.` may still be appended.
pub const MAX_INTEGER_LEN_BEFORE_POINT: usize = 3;

/// Fraction length below which any key is still appended.
pub const MAX_FRACTION_DIGITS: usize = 2;

// Unit conversion

/// Kilograms per pound.
pub const KG_PER_POUND: f64 = 0.4536;

/// Meters per centimeter.
pub const M_PER_CENTIMETER: f64 = 0.01;

/// Meters per foot.
pub const M_PER_FOOT: f64 = 0.3048;

/// Meters per inch.
pub const M_PER_INCH: f64 = 0.0254;

// Classification

/// Lowest BMI classified as Normal.
pub const NORMAL_LOWER_BOUND: f64 = 18.5;

/// Lowest BMI classified as Overweight.
pub const OVERWEIGHT_LOWER_BOUND: f64 = 25.0;

/// Largest BMI whose value is reported; anything above is shown as 0.0.
pub const REPORTABLE_UPPER_BOUND: f64 = 100.0;

/// Tick labels drawn under the result card's category bar.
pub const SCALE_MARKERS: [f64; 4] = [16.0, 18.5, 25.0, 40.0];

// Messages

/// Leading text of the exported share message.
pub const SHARE_MESSAGE_PREFIX: &str = "Hey Guys! Checkout my Body Mass Index: ";

/// Capacity of the share message buffer.
pub const SHARE_MESSAGE_CAPACITY: usize = 96;

/// Single advisory shown for any calculation failure.
pub const ADVISORY_MESSAGE: &str =
    "This BMI does not look good, check again the height and weight value.";
