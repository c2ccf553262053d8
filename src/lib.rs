//! Natural-language unit converter
//!
//! Resolves unit names typed by a user ("feet", "kg", "degrees Celsius"),
//! checks that a conversion makes sense and converts distance, mass and
//! temperature values.

pub mod units;
pub mod conversion;
pub mod cli;

pub use units::*;
pub use conversion::*;
