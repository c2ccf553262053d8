//! Console front end: turns typed sentences into conversion requests
//! and prints the results.

mod repl;
mod tokenizer;

pub use repl::{evaluate, Outcome, Repl, ReplError, PROMPT};
pub use tokenizer::{normalize, parse_command, Command, ConversionRequest, InputError};
