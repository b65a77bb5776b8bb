//! Screen snapshot and the pure reducer that advances it.
//!
//! Every gesture is an [`Event`]; `reduce(snapshot, event)` returns the
//! next snapshot and never fails. At most one field is non-idle at a time.

use crate::bmi::{self, BmiResult};
use crate::config::{DEFAULT_HEIGHT_TEXT, DEFAULT_WEIGHT_TEXT};
use crate::error::Error;
use crate::share::{self, ShareMessage};
use crate::ui::{Field, FieldState, Key, Phase};
use crate::units::{self, HeightUnit, Unit, WeightUnit};

/// Gestures forwarded by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Tap on a field's value: arm it, idle the other, hide the result.
    SelectField(Field),
    /// Tap on a field's caption: open its unit picker sheet.
    OpenUnitPicker(Field),
    /// Close the picker sheet without choosing.
    DismissUnitPicker,
    /// Choose the entry at this index of the open picker sheet.
    PickSheetItem(usize),
    /// Set a unit directly.
    SelectUnit(Unit),
    /// Keypad key.
    EnterDigit(Key),
    /// AC key.
    ClearActiveField,
    /// Backspace key.
    DeleteLastDigit,
    /// GO key: compute the BMI.
    Trigger,
}

/// Everything the renderer draws.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub weight: FieldState<WeightUnit>,
    pub height: FieldState<HeightUnit>,
    pub result: BmiResult,
    /// Field whose unit picker sheet is open.
    pub sheet: Option<Field>,
    /// Error from the last `Trigger`, cleared by the next event.
    pub notice: Option<Error>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    /// Initial screen: weight "60" kg armed, height "170" cm idle, no result.
    pub fn new() -> Self {
        Self {
            weight: FieldState::new(DEFAULT_WEIGHT_TEXT, Phase::Armed, WeightUnit::Kilograms),
            height: FieldState::new(DEFAULT_HEIGHT_TEXT, Phase::Idle, HeightUnit::Centimeter),
            result: BmiResult::HIDDEN,
            sheet: None,
            notice: None,
        }
    }

    /// Field receiving keypad input. Weight wins if both are somehow active.
    pub fn active_field(&self) -> Option<Field> {
        if self.weight.is_active() {
            Some(Field::Weight)
        } else if self.height.is_active() {
            Some(Field::Height)
        } else {
            None
        }
    }

    pub fn phase(&self, field: Field) -> Phase {
        match field {
            Field::Weight => self.weight.phase,
            Field::Height => self.height.phase,
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Weight => self.weight.text(),
            Field::Height => self.height.text(),
        }
    }

    pub fn unit_label(&self, field: Field) -> &'static str {
        match field {
            Field::Weight => self.weight.unit.label(),
            Field::Height => self.height.unit.label(),
        }
    }

    /// Title of the open picker sheet.
    pub fn sheet_title(&self) -> Option<&'static str> {
        self.sheet.map(Field::title)
    }

    /// Entries of the open picker sheet; empty when none is open.
    pub fn sheet_items(&self) -> &'static [&'static str] {
        match self.sheet {
            Some(field) => units::picker_labels(field),
            None => &[],
        }
    }

    /// Share text for the visible result, if any.
    pub fn share_message(&self) -> Option<ShareMessage> {
        self.result
            .visible
            .then(|| share::message(&self.result))
    }

    /// Run the calculator against the current field texts.
    pub fn compute(&self) -> Result<BmiResult, Error> {
        bmi::compute(
            self.weight.text(),
            self.weight.unit,
            self.height.text(),
            self.height.unit,
        )
    }

    fn map_active(
        self,
        weight: impl FnOnce(FieldState<WeightUnit>) -> FieldState<WeightUnit>,
        height: impl FnOnce(FieldState<HeightUnit>) -> FieldState<HeightUnit>,
    ) -> Self {
        match self.active_field() {
            Some(Field::Weight) => Self {
                weight: weight(self.weight),
                ..self
            },
            Some(Field::Height) => Self {
                height: height(self.height),
                ..self
            },
            None => self,
        }
    }

    fn with_unit(self, unit: Unit) -> Self {
        match unit {
            Unit::Weight(u) => Self {
                weight: self.weight.with_unit(u),
                ..self
            },
            Unit::Height(u) => Self {
                height: self.height.with_unit(u),
                ..self
            },
        }
    }
}

/// Fold one event into the snapshot.
pub fn reduce(state: Snapshot, event: Event) -> Snapshot {
    let state = Snapshot {
        notice: None,
        ..state
    };

    match event {
        Event::SelectField(field) => {
            let (weight, height) = match field {
                Field::Weight => (Phase::Armed, Phase::Idle),
                Field::Height => (Phase::Idle, Phase::Armed),
            };
            Snapshot {
                weight: state.weight.with_phase(weight),
                height: state.height.with_phase(height),
                result: state.result.hidden(),
                ..state
            }
        }
        Event::OpenUnitPicker(field) => Snapshot {
            sheet: Some(field),
            ..state
        },
        Event::DismissUnitPicker => Snapshot {
            sheet: None,
            ..state
        },
        Event::PickSheetItem(index) => match state.sheet.and_then(|f| Unit::nth(f, index)) {
            Some(unit) => Snapshot {
                sheet: None,
                ..state.with_unit(unit)
            },
            None => state,
        },
        Event::SelectUnit(unit) => state.with_unit(unit),
        Event::EnterDigit(key) => state.map_active(|f| f.with_key(key), |f| f.with_key(key)),
        Event::ClearActiveField => state.map_active(FieldState::cleared, FieldState::cleared),
        Event::DeleteLastDigit => {
            state.map_active(FieldState::with_last_deleted, FieldState::with_last_deleted)
        }
        Event::Trigger => match state.compute() {
            Ok(result) => Snapshot { result, ..state },
            Err(err) => Snapshot {
                result: state.result.hidden(),
                notice: Some(err),
                ..state
            },
        },
    }
}
