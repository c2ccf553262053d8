use super::{Unit, UnitType};

/// Shown in place of a unit name that couldn't be resolved
pub const UNRESOLVED_NAME: &str = "???";

/// Unit name in the grammatical number that fits `quantity`.
///
/// Exactly 1.0 gives the singular form, anything else (0 and negatives
/// included) the plural. Temperature units use their "degree(s) ..." display
/// aliases; other units use the lower-cased canonical name, pluralized with
/// the irregular form when there is one and a trailing "s" otherwise.
pub fn display_name(unit: Option<&Unit>, quantity: f64) -> String {
    let Some(unit) = unit else {
        return UNRESOLVED_NAME.to_string();
    };

    let singular = quantity == 1.0;

    match (unit.unit_type, singular) {
        (UnitType::Temperature, true) => unit.aliases[0].to_string(),
        (UnitType::Temperature, false) => unit.aliases[1].to_string(),
        (_, true) => unit.name.to_lowercase(),
        (_, false) => match unit.irregular_plural {
            Some(plural) => plural.to_string(),
            None => format!("{}s", unit.name.to_lowercase()),
        },
    }
}

/// Plural name, as used when talking about a unit in general
pub fn plural_name(unit: Option<&Unit>) -> String {
    display_name(unit, 0.0)
}
