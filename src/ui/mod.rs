//! User interface core - the two input fields and the keypad state machine.
//!
//! The renderer forwards gestures as [`Event`]s; [`reduce`] folds each one
//! into a new [`Snapshot`], which the renderer draws.
//!
//! ## Components
//!
//! - **Keypad**: 4x3 grid of digit, point, and blank keys
//! - **Input logic**: text editing rules for an accumulating field
//! - **State**: snapshot + pure reducer
//! - **Screen**: owns the current snapshot and notifies an observer

pub mod input_logic;
pub mod keypad;
pub mod screen;
pub mod state;


pub use keypad::{Key, KEYPAD_LAYOUT};
pub use screen::{Observer, Screen};
pub use state::{reduce, Event, Snapshot};

use crate::config::FIELD_TEXT_CAPACITY;

/// Text buffer backing one field.
pub type FieldText = heapless::String<FIELD_TEXT_CAPACITY>;

/// The two numeric fields on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Weight,
    Height,
}

impl Field {
    /// Row caption, also used as the unit picker sheet title.
    pub const fn title(self) -> &'static str {
        match self {
            Field::Weight => "Weight",
            Field::Height => "Height",
        }
    }

    pub const fn other(self) -> Field {
        match self {
            Field::Weight => Field::Height,
            Field::Height => Field::Weight,
        }
    }
}

/// Edit phase of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not selected.
    #[default]
    Idle,
    /// Selected; the next key replaces the whole text.
    Armed,
    /// Mid-entry; keys append under the keypad limits.
    Accumulating,
}

/// One numeric field: its text, edit phase, and selected unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldState<U> {
    pub text: FieldText,
    pub phase: Phase,
    pub unit: U,
}

impl<U> FieldState<U> {
    /// Create a field. Text longer than the buffer is truncated.
    pub fn new(text: &str, phase: Phase, unit: U) -> Self {
        let mut buf = FieldText::new();
        for c in text.chars() {
            if buf.push(c).is_err() {
                break;
            }
        }
        Self {
            text: buf,
            phase,
            unit,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether the field should be highlighted as the edit target.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Same field with a new phase.
    pub fn with_phase(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }

    /// Same field with a new unit.
    pub fn with_unit(self, unit: U) -> Self {
        Self { unit, ..self }
    }

    /// Apply a keypad key according to the current phase.
    ///
    /// Armed: the key replaces the text and the field starts accumulating.
    /// Accumulating: the key is appended if the input logic accepts it.
    /// Idle fields and blank keys are left unchanged.
    pub fn with_key(mut self, key: Key) -> Self {
        let Some(ch) = key.as_char() else {
            return self;
        };
        match self.phase {
            Phase::Idle => {}
            Phase::Armed => {
                self.text = input_logic::first_key(ch);
                self.phase = Phase::Accumulating;
            }
            Phase::Accumulating => input_logic::append(&mut self.text, ch),
        }
        self
    }

    /// Reset to "0" and re-arm.
    pub fn cleared(self) -> Self {
        Self {
            text: input_logic::zero(),
            phase: Phase::Armed,
            ..self
        }
    }

    /// Drop the last character; a single character becomes "0". The phase is kept.
    pub fn with_last_deleted(mut self) -> Self {
        input_logic::delete_last(&mut self.text);
        self
    }
}
