//! Logic core of a single-screen BMI calculator.
//!
//! The user types weight and height on a numeric keypad, picks units, and
//! presses GO. This crate holds everything with behaviour: the keypad input
//! state machine and the unit-conversion / classification arithmetic.
//! Rendering, theming and platform share wiring belong to the front end,
//! which draws [`ui::Snapshot`]s and forwards gestures as [`ui::Event`]s.
//!
//! Usage: `cargo test`
//!
//! Note: the crate is `no_std` and allocation-free so the same core can
//! drive a touch-panel firmware or a desktop/mobile shell. Enable the
//! `defmt` feature for on-target logging.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod bmi;
pub mod config;
pub mod error;
pub mod share;
pub mod ui;
pub mod units;

// ═══════════════════════════════════════════════════════════════════════════
// Public API Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use bmi::{compute, BmiResult, Category, Tone};
pub use error::{Error, Result};
pub use share::{ShareMessage, ShareSink};
pub use ui::{reduce, Event, Field, FieldState, Key, Observer, Phase, Screen, Snapshot};
pub use units::{HeightUnit, Unit, WeightUnit};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_matches_screen_defaults() {
        let s = Snapshot::new();
        assert_eq!(s.weight.text(), "60");
        assert_eq!(s.weight.unit, WeightUnit::Kilograms);
        assert_eq!(s.weight.phase, Phase::Armed);
        assert_eq!(s.height.text(), "170");
        assert_eq!(s.height.unit, HeightUnit::Centimeter);
        assert_eq!(s.height.phase, Phase::Idle);
        assert!(!s.result.visible);
        assert_eq!(s.sheet, None);
        assert_eq!(s.notice, None);
    }

    #[test]
    fn defaults_compute_to_normal() {
        let s = reduce(Snapshot::new(), Event::Trigger);
        assert!(s.result.visible);
        assert!((s.result.value - 20.8).abs() < 1e-9);
        assert_eq!(s.result.category, Category::Normal);
    }

    #[test]
    fn error_advisory_is_generic() {
        let err = compute("60", WeightUnit::Kilograms, "0", HeightUnit::Meter).unwrap_err();
        assert_eq!(err, Error::DivisionByZero);
        assert!(err.advisory().starts_with("This BMI does not look good"));
    }
}
