use tracing::{debug, trace};

use super::registry;
use super::Unit;

/// Names this long or shorter keep a trailing "s" (so "ms" stays an abbreviation)
const MIN_PLURAL_LEN: usize = 4;

/// Strip a trailing "s" from names longer than three characters
fn singular_form(entered: &str) -> Option<&str> {
    if entered.chars().count() >= MIN_PLURAL_LEN
        && entered.as_bytes().last().is_some_and(|b| b.eq_ignore_ascii_case(&b's'))
    {
        Some(&entered[..entered.len() - 1])
    } else {
        None
    }
}

fn matches_unit(unit: &Unit, entered: &str, singular: Option<&str>) -> bool {
    if unit.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(entered)) {
        return true;
    }

    if unit.name.eq_ignore_ascii_case(entered)
        || singular.is_some_and(|s| unit.name.eq_ignore_ascii_case(s))
    {
        return true;
    }

    unit.irregular_plural
        .is_some_and(|plural| plural.eq_ignore_ascii_case(entered))
}

/// Find the unit a user-entered name refers to.
///
/// Per unit, in registry order, a name matches when it equals one of the
/// unit's aliases, its canonical name (also after dropping a plural "s"),
/// or its irregular plural. All comparisons ignore case. Returns `None`
/// when nothing matches.
pub fn resolve(entered: &str) -> Option<&'static Unit> {
    let singular = singular_form(entered);
    if let Some(s) = singular {
        trace!(entered, singular = s, "trying singular form");
    }

    let found = registry::all().find(|unit| matches_unit(unit, entered, singular));

    match found {
        Some(unit) => debug!(entered, unit = unit.name, "resolved unit"),
        None => debug!(entered, "unknown unit"),
    }
    found
}
