use tracing::debug;

use super::ConversionError;
use crate::units::{plural_name, Unit};

/// Whether `value` can be converted from `source` to `target`.
///
/// Both units have to be resolved and of the same type. Lengths and weights
/// must also be strictly positive; temperatures may take any sign.
pub fn is_possible(value: f64, source: Option<&Unit>, target: Option<&Unit>) -> bool {
    let (Some(source), Some(target)) = (source, target) else {
        return false;
    };

    if !source.is_compatible(target) {
        return false;
    }

    !source.unit_type.requires_positive() || value > 0.0
}

/// User-facing reason why [`is_possible`] rejected a conversion.
///
/// Returns `ConversionError::ConversionPossible` when there is nothing to explain.
pub fn explain_impossibility(
    value: f64,
    source: Option<&Unit>,
    target: Option<&Unit>,
) -> Result<String, ConversionError> {
    if let (Some(s), Some(t)) = (source, target) {
        if s.is_compatible(t) {
            if s.unit_type.requires_positive() && value <= 0.0 {
                debug!(value, unit_type = %s.unit_type, "rejected by sign check");
                // zero is rejected too, the wording stays "negative"
                return Ok(format!("{} shouldn't be negative", s.unit_type.quantity_label()));
            }
            return Err(ConversionError::ConversionPossible);
        }
    }

    debug!(
        source = source.map(|u| u.name),
        target = target.map(|u| u.name),
        "no conversion between units"
    );
    Ok(format!(
        "Conversion from {} to {} is impossible",
        plural_name(source),
        plural_name(target)
    ))
}
