use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::tokenizer::{parse_command, Command, ConversionRequest};
use crate::conversion::{explain_impossibility, is_possible, ConversionError, ConversionReport};
use crate::units::resolve;

pub const PROMPT: &str = "Enter what you want to convert (or exit): ";

#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Outcome of one conversion request
#[derive(Debug)]
pub enum Outcome {
    Converted(ConversionReport),
    Rejected {
        reason: String,
        /// Units were fine, the value failed the sign check
        sign_check: bool,
    },
}

impl Outcome {
    /// Text printed for this outcome. Everything but a sign-check message is
    /// followed by a blank line.
    pub fn message(&self) -> String {
        match self {
            Outcome::Converted(report) => format!("{}\n", report),
            Outcome::Rejected { reason, sign_check: true } => reason.clone(),
            Outcome::Rejected { reason, sign_check: false } => format!("{}\n", reason),
        }
    }
}

/// Resolve the names in a request and convert, or explain why not
pub fn evaluate(request: &ConversionRequest) -> Result<Outcome, ConversionError> {
    let source = resolve(&request.source_name);
    let target = resolve(&request.target_name);

    match (source, target) {
        (Some(s), Some(t)) if is_possible(request.value, source, target) => {
            Ok(Outcome::Converted(ConversionReport::new(request.value, s, t)?))
        }
        _ => {
            let reason = explain_impossibility(request.value, source, target)?;
            let sign_check = matches!((source, target), (Some(s), Some(t)) if s.is_compatible(t));
            Ok(Outcome::Rejected { reason, sign_check })
        }
    }
}

/// Interactive read-convert-print loop
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until "exit" or end of input
    pub fn run(&mut self) -> Result<(), ReplError> {
        let mut line = String::new();

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                writeln!(self.output)?;
                return Ok(());
            }

            match parse_command(&line) {
                Ok(Command::Exit) => {
                    info!("exit requested");
                    return Ok(());
                }
                Ok(Command::Convert(request)) => {
                    let outcome = evaluate(&request)?;
                    writeln!(self.output, "{}", outcome.message())?;
                }
                Err(e) => {
                    debug!(error = %e, input = line.trim_end(), "unparseable input");
                    writeln!(self.output, "Parse error\n")?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
