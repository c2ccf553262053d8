use std::fmt;
use serde::Serialize;

use super::{convert, ConversionError};
use crate::units::{display_name, Unit};

/// A finished conversion, ready to be shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub value: f64,
    pub source: &'static Unit,
    pub result: f64,
    pub target: &'static Unit,
    /// "5.0 meters is 0.005 kilometers"
    pub sentence: String,
}

impl ConversionReport {
    pub fn new(
        value: f64,
        source: &'static Unit,
        target: &'static Unit,
    ) -> Result<Self, ConversionError> {
        let result = convert(value, source, target)?;
        let sentence = format!(
            "{} {} is {} {}",
            format_value(value),
            display_name(Some(source), value),
            format_value(result),
            display_name(Some(target), result),
        );

        Ok(Self {
            value,
            source,
            result,
            target,
            sentence,
        })
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sentence)
    }
}

/// Shortest form that reads back to the same value, always with a decimal
/// point for whole numbers ("5.0", "0.005", "1609.35").
///
/// Large and small magnitudes print as `10000000.0` and `1e-5`, not in the
/// `1.0E7` / `1.0E-5` style of JVM doubles.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}
