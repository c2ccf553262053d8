//! Numeric conversion between units of the same type
//!
//! Distance and mass go through their intermediate unit (meter, gram):
//! `value * source.inter_unit_value / target.inter_unit_value`.
//! Temperature goes through Celsius using the usual offset formulas.
//!
//! No rounding happens here; formatting is left to the caller.

use tracing::trace;

use super::ConversionError;
use crate::units::{Unit, UnitId, UnitType};

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert `value` from `source` to `target`.
///
/// Both units must share a type; check with [`is_possible`](super::is_possible) first.
pub fn convert(value: f64, source: &Unit, target: &Unit) -> Result<f64, ConversionError> {
    if !source.is_compatible(target) {
        return Err(ConversionError::IncompatibleTypes {
            from: source.name,
            to: target.name,
        });
    }

    let result = match source.unit_type {
        UnitType::Distance | UnitType::Mass => {
            let intermediate = to_intermediate(value, source);
            from_intermediate(intermediate, target)
        }
        UnitType::Temperature => {
            let celsius = to_celsius(value, source);
            from_celsius(celsius, target)
        }
    };

    trace!(value, from = source.name, to = target.name, result, "converted");
    Ok(result)
}

/// Meters or grams, depending on the unit's type
#[inline]
fn to_intermediate(value: f64, unit: &Unit) -> f64 {
    value * unit.inter_unit_value
}

#[inline]
fn from_intermediate(value: f64, unit: &Unit) -> f64 {
    value / unit.inter_unit_value
}

fn to_celsius(value: f64, unit: &Unit) -> f64 {
    match unit.id {
        UnitId::Kelvin => value - KELVIN_OFFSET,
        UnitId::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        _ => value,
    }
}

fn from_celsius(value: f64, unit: &Unit) -> f64 {
    match unit.id {
        UnitId::Kelvin => value + KELVIN_OFFSET,
        UnitId::Fahrenheit => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::registry::{by_type, unit};

    use approx::assert_relative_eq;
    use uom::si::f64::{Length, Mass, ThermodynamicTemperature};
    use uom::si::{length, mass, thermodynamic_temperature as temp};

    fn c(value: f64, from: UnitId, to: UnitId) -> f64 {
        convert(value, unit(from), unit(to)).unwrap()
    }

    fn uom_meters(value: f64, id: UnitId) -> f64 {
        let l = match id {
            UnitId::Meter => Length::new::<length::meter>(value),
            UnitId::Kilometer => Length::new::<length::kilometer>(value),
            UnitId::Centimeter => Length::new::<length::centimeter>(value),
            UnitId::Millimeter => Length::new::<length::millimeter>(value),
            UnitId::Mile => Length::new::<length::mile>(value),
            UnitId::Yard => Length::new::<length::yard>(value),
            UnitId::Foot => Length::new::<length::foot>(value),
            UnitId::Inch => Length::new::<length::inch>(value),
            other => panic!("{:?} is not a distance unit", other),
        };
        l.get::<length::meter>()
    }

    fn uom_grams(value: f64, id: UnitId) -> f64 {
        let m = match id {
            UnitId::Gram => Mass::new::<mass::gram>(value),
            UnitId::Kilogram => Mass::new::<mass::kilogram>(value),
            UnitId::Milligram => Mass::new::<mass::milligram>(value),
            UnitId::Pound => Mass::new::<mass::pound>(value),
            UnitId::Ounce => Mass::new::<mass::ounce>(value),
            other => panic!("{:?} is not a mass unit", other),
        };
        m.get::<mass::gram>()
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(c(0.0, UnitId::Celsius, UnitId::Kelvin), 273.15);
        assert_eq!(c(32.0, UnitId::Fahrenheit, UnitId::Celsius), 0.0);
        assert_eq!(c(100.0, UnitId::Celsius, UnitId::Fahrenheit), 212.0);
        assert_eq!(c(212.0, UnitId::Fahrenheit, UnitId::Celsius), 100.0);
        assert_eq!(c(-40.0, UnitId::Celsius, UnitId::Fahrenheit), -40.0);
    }

    #[test]
    fn test_temperature_through_celsius() {
        // Kelvin -> Fahrenheit goes K -> C -> F
        assert_relative_eq!(c(273.15, UnitId::Kelvin, UnitId::Fahrenheit), 32.0, epsilon = 1e-9);
        assert_relative_eq!(c(0.0, UnitId::Kelvin, UnitId::Celsius), -273.15);
        assert_relative_eq!(c(451.0, UnitId::Fahrenheit, UnitId::Kelvin), 505.9277777777, epsilon = 1e-6);
    }

    #[test]
    fn test_identity() {
        assert_eq!(c(12.5, UnitId::Celsius, UnitId::Celsius), 12.5);
        assert_eq!(c(12.5, UnitId::Kelvin, UnitId::Kelvin), 12.5);
        assert_eq!(c(12.5, UnitId::Yard, UnitId::Yard), 12.5);
    }

    #[test]
    fn test_distance_and_mass() {
        assert_eq!(c(1.0, UnitId::Mile, UnitId::Meter), 1609.35);
        assert_eq!(c(1000.0, UnitId::Gram, UnitId::Kilogram), 1.0);
        assert_relative_eq!(c(5.0, UnitId::Meter, UnitId::Kilometer), 0.005);
        assert_relative_eq!(c(1.0, UnitId::Foot, UnitId::Inch), 12.0, epsilon = 1e-9);
        assert_relative_eq!(c(1.0, UnitId::Pound, UnitId::Ounce), 16.0, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_values_convert() {
        // sign checks belong to is_possible, not the engine
        assert_relative_eq!(c(-2.0, UnitId::Kilometer, UnitId::Meter), -2000.0);
    }

    #[test]
    fn test_mismatched_types() {
        let err = convert(5.0, unit(UnitId::Meter), unit(UnitId::Kilogram)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::IncompatibleTypes { from: "METER", to: "KILOGRAM" }
        );

        assert!(convert(5.0, unit(UnitId::Celsius), unit(UnitId::Gram)).is_err());
    }

    #[test]
    fn test_distance_round_trip() {
        let units = by_type(UnitType::Distance);
        for u in &units {
            for v in &units {
                let there = convert(123.456, u, v).unwrap();
                let back = convert(there, v, u).unwrap();
                assert_relative_eq!(back, 123.456, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_distance_against_uom() {
        for u in by_type(UnitType::Distance) {
            let meters = c(3.5, u.id, UnitId::Meter);
            // mile is 1609.35 here, 1609.344 in uom
            assert_relative_eq!(meters, uom_meters(3.5, u.id), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_mass_against_uom() {
        for u in by_type(UnitType::Mass) {
            let grams = c(7.25, u.id, UnitId::Gram);
            assert_relative_eq!(grams, uom_grams(7.25, u.id), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_temperature_against_uom() {
        let cases = [
            (UnitId::Fahrenheit, UnitId::Celsius, ThermodynamicTemperature::new::<temp::degree_fahrenheit>(98.6).get::<temp::degree_celsius>()),
            (UnitId::Celsius, UnitId::Kelvin, ThermodynamicTemperature::new::<temp::degree_celsius>(98.6).get::<temp::kelvin>()),
            (UnitId::Kelvin, UnitId::Fahrenheit, ThermodynamicTemperature::new::<temp::kelvin>(98.6).get::<temp::degree_fahrenheit>()),
        ];

        for (from, to, expected) in cases {
            assert_relative_eq!(c(98.6, from, to), expected, max_relative = 1e-9);
        }
    }
}
