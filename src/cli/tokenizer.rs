//! Splits a raw input line into a conversion request
//!
//! Accepted shapes, after normalization:
//!
//! ```text
//! 5 m to km
//! 1 degree celsius in kelvins
//! 100 kelvins to degrees fahrenheit
//! 3 degrees fahrenheit to degrees celsius
//! ```
//!
//! The keyword between the units can be any word ("to", "in", "convertto"...).

use std::num::ParseFloatError;
use std::sync::LazyLock;

use regex::Regex;

static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)? [a-z]+ ([a-z]+ )?(in|to|[a-z]+) [a-z]+( [a-z]+)?$")
        .expect("conversion pattern is valid")
});

static EXIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*exit\s*$").expect("exit pattern is valid"));

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Parse error")]
    Unrecognized(String),

    #[error("The string should consist of 4-6 tokens, got {0}")]
    TokenCount(usize),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseFloatError),
}

/// Value and unit names as typed, before resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub source_name: String,
    pub target_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Convert(ConversionRequest),
    Exit,
}

/// Trim, collapse runs of whitespace and lower-case
pub fn normalize(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let input = normalize(line);

    if EXIT.is_match(&input) {
        return Ok(Command::Exit);
    }

    if !CONVERSION.is_match(&input) {
        return Err(InputError::Unrecognized(input));
    }

    extract_request(&input).map(Command::Convert)
}

fn extract_request(input: &str) -> Result<ConversionRequest, InputError> {
    let tokens: Vec<&str> = input.split(' ').collect();

    let (source_name, target_name) = match tokens.as_slice() {
        [_, src, _, tgt] => (src.to_string(), tgt.to_string()),
        [_, s1, s2, _, t1, t2] => (format!("{} {}", s1, s2), format!("{} {}", t1, t2)),
        // "degree" can only start a two-word source, so it decides the split
        [_, s1, s2, _, tgt] if s1.contains("degree") => (format!("{} {}", s1, s2), tgt.to_string()),
        [_, src, _, t1, t2] => (src.to_string(), format!("{} {}", t1, t2)),
        _ => return Err(InputError::TokenCount(tokens.len())),
    };

    let value = tokens[0].parse::<f64>()?;

    Ok(ConversionRequest {
        value,
        source_name,
        target_name,
    })
}
