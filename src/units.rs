//! Measurement units offered by the unit picker, and their conversion
//! to metric.
//!
//! Labels are the exact strings shown in the picker sheet; `ALL` lists
//! them in picker order.

use crate::config::{KG_PER_POUND, M_PER_CENTIMETER, M_PER_FOOT, M_PER_INCH};
use crate::ui::Field;

/// Units accepted by the weight field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl WeightUnit {
    /// Picker order.
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kilograms, WeightUnit::Pounds];

    pub const fn label(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "Kilograms",
            WeightUnit::Pounds => "Pounds",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.label() == label)
    }

    /// Convert `value` in this unit to kilograms.
    pub fn to_kilograms(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value * KG_PER_POUND,
        }
    }
}

/// Units accepted by the height field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeightUnit {
    #[default]
    Centimeter,
    Meter,
    Feet,
    Inches,
}

impl HeightUnit {
    /// Picker order.
    pub const ALL: [HeightUnit; 4] = [
        HeightUnit::Centimeter,
        HeightUnit::Meter,
        HeightUnit::Feet,
        HeightUnit::Inches,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HeightUnit::Centimeter => "Centimeter",
            HeightUnit::Meter => "Meter",
            HeightUnit::Feet => "Feet",
            HeightUnit::Inches => "Inches",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.label() == label)
    }

    /// Convert `value` in this unit to meters.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            HeightUnit::Centimeter => value * M_PER_CENTIMETER,
            HeightUnit::Meter => value,
            HeightUnit::Feet => value * M_PER_FOOT,
            HeightUnit::Inches => value * M_PER_INCH,
        }
    }
}

/// A unit for either field. The variant decides which field it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    Weight(WeightUnit),
    Height(HeightUnit),
}

impl Unit {
    /// Field this unit belongs to.
    pub const fn field(self) -> Field {
        match self {
            Unit::Weight(_) => Field::Weight,
            Unit::Height(_) => Field::Height,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Unit::Weight(unit) => unit.label(),
            Unit::Height(unit) => unit.label(),
        }
    }

    /// Resolve a picker label for `field`. Labels of the other field are rejected.
    pub fn from_label(field: Field, label: &str) -> Option<Self> {
        match field {
            Field::Weight => WeightUnit::from_label(label).map(Unit::Weight),
            Field::Height => HeightUnit::from_label(label).map(Unit::Height),
        }
    }

    /// Picker entry at `index` for `field`, in picker order.
    pub fn nth(field: Field, index: usize) -> Option<Self> {
        match field {
            Field::Weight => WeightUnit::ALL.get(index).copied().map(Unit::Weight),
            Field::Height => HeightUnit::ALL.get(index).copied().map(Unit::Height),
        }
    }
}

impl From<WeightUnit> for Unit {
    fn from(unit: WeightUnit) -> Self {
        Unit::Weight(unit)
    }
}

impl From<HeightUnit> for Unit {
    fn from(unit: HeightUnit) -> Self {
        Unit::Height(unit)
    }
}

/// Static picker listing for `field`.
pub const fn picker_labels(field: Field) -> &'static [&'static str] {
    match field {
        Field::Weight => &["Kilograms", "Pounds"],
        Field::Height => &["Centimeter", "Meter", "Feet", "Inches"],
    }
}
