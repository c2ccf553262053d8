mod display;
pub mod registry;
mod resolve;

use std::fmt;
use serde::Serialize;

pub use display::{display_name, plural_name, UNRESOLVED_NAME};
pub use registry::UNITS;
pub use resolve::resolve;

/// Conversion compatibility class. Only units of the same type convert into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitType {
    Mass,
    Distance,
    Temperature,
}

impl UnitType {
    /// Label used when a quantity of this type fails the sign check
    pub fn quantity_label(&self) -> &'static str {
        match self {
            UnitType::Distance => "Length",
            UnitType::Mass => "Weight",
            UnitType::Temperature => "Temperature",
        }
    }

    /// Distance and mass can't be zero or negative, temperature can
    pub fn requires_positive(&self) -> bool {
        matches!(self, UnitType::Distance | UnitType::Mass)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::Mass => write!(f, "mass"),
            UnitType::Distance => write!(f, "distance"),
            UnitType::Temperature => write!(f, "temperature"),
        }
    }
}

/// Identifies every unit in the registry. Declaration order matches `UNITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitId {
    Celsius,
    Fahrenheit,
    Kelvin,
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
}

impl UnitId {
    /// The registry entry for this id
    pub fn unit(self) -> &'static Unit {
        registry::unit(self)
    }
}

/// A unit of measure. All instances live in the static registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    #[serde(skip)]
    pub id: UnitId,

    /// Primary identifier (e.g. "FOOT")
    pub name: &'static str,

    #[serde(rename = "type")]
    pub unit_type: UnitType,

    /// What one of this unit equals in the type's intermediate unit
    /// (meters for distance, grams for mass). Zero for temperature.
    pub inter_unit_value: f64,

    /// Accepted names and abbreviations. For temperature units index 0 is the
    /// singular display form and index 1 the plural one.
    pub aliases: &'static [&'static str],

    /// Plural form when it isn't the name plus "s"
    pub irregular_plural: Option<&'static str>,
}

impl Unit {
    pub fn has_irregular_plural(&self) -> bool {
        self.irregular_plural.is_some()
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.unit_type == other.unit_type
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
