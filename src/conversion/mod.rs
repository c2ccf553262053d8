mod engine;
mod report;
mod validity;

pub use engine::convert;
pub use report::{format_value, ConversionReport};
pub use validity::{explain_impossibility, is_possible};

/// Caller errors. User mistakes (unknown names, mismatched types, bad sign)
/// are reported through `is_possible`/`explain_impossibility` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Conversion from {from} to {to} is impossible")]
    IncompatibleTypes {
        from: &'static str,
        to: &'static str,
    },

    #[error("Conversion is possible")]
    ConversionPossible,
}
