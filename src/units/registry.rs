//! Static table of every supported unit
//!
//! Order matters: name resolution returns the first unit that matches, scanning
//! this table top to bottom. Entries are laid out in `UnitId` declaration order
//! so that an id doubles as an index.
//!
//! # Intermediate units
//!
//! - Distance: meter
//! - Mass: gram
//! - Temperature: none, converted by formula through Celsius

use super::{Unit, UnitId, UnitType};

const fn temperature(id: UnitId, name: &'static str, aliases: &'static [&'static str]) -> Unit {
    Unit {
        id,
        name,
        unit_type: UnitType::Temperature,
        inter_unit_value: 0.0,
        aliases,
        irregular_plural: None,
    }
}

const fn scaled(
    id: UnitId,
    name: &'static str,
    unit_type: UnitType,
    inter_unit_value: f64,
    aliases: &'static [&'static str],
) -> Unit {
    Unit {
        id,
        name,
        unit_type,
        inter_unit_value,
        aliases,
        irregular_plural: None,
    }
}

const fn with_plural(unit: Unit, plural: &'static str) -> Unit {
    Unit {
        irregular_plural: Some(plural),
        ..unit
    }
}

pub static UNITS: [Unit; 16] = [
    // Temperature
    temperature(UnitId::Celsius, "CELSIUS", &["degree Celsius", "degrees Celsius", "dc", "c"]),
    temperature(UnitId::Fahrenheit, "FAHRENHEIT", &["degree Fahrenheit", "degrees Fahrenheit", "df", "f"]),
    temperature(UnitId::Kelvin, "KELVIN", &["kelvin", "kelvins", "k"]),

    // Distance
    scaled(UnitId::Meter, "METER", UnitType::Distance, 1.0, &["m"]),
    scaled(UnitId::Kilometer, "KILOMETER", UnitType::Distance, 1000.0, &["km"]),
    scaled(UnitId::Centimeter, "CENTIMETER", UnitType::Distance, 0.01, &["cm"]),
    scaled(UnitId::Millimeter, "MILLIMETER", UnitType::Distance, 0.001, &["mm"]),
    scaled(UnitId::Mile, "MILE", UnitType::Distance, 1609.35, &["mi"]),
    scaled(UnitId::Yard, "YARD", UnitType::Distance, 0.9144, &["yd"]),
    with_plural(scaled(UnitId::Foot, "FOOT", UnitType::Distance, 0.3048, &["ft"]), "feet"),
    with_plural(scaled(UnitId::Inch, "INCH", UnitType::Distance, 0.0254, &["in"]), "inches"),

    // Mass
    scaled(UnitId::Gram, "GRAM", UnitType::Mass, 1.0, &["g"]),
    scaled(UnitId::Kilogram, "KILOGRAM", UnitType::Mass, 1000.0, &["kg"]),
    scaled(UnitId::Milligram, "MILLIGRAM", UnitType::Mass, 0.001, &["mg"]),
    scaled(UnitId::Pound, "POUND", UnitType::Mass, 453.592, &["lb"]),
    scaled(UnitId::Ounce, "OUNCE", UnitType::Mass, 28.3495, &["oz"]),
];

/// Look up a unit by id
#[inline]
pub fn unit(id: UnitId) -> &'static Unit {
    &UNITS[id as usize]
}

/// All units in declaration order
pub fn all() -> impl Iterator<Item = &'static Unit> {
    UNITS.iter()
}

/// Units of one type, in declaration order
pub fn by_type(unit_type: UnitType) -> Vec<&'static Unit> {
    all().filter(|u| u.unit_type == unit_type).collect()
}
