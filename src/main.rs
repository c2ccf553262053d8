use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use unit_converter::cli::{evaluate, parse_command, Command, Outcome, Repl};

#[derive(Parser)]
#[command(name = "converter")]
#[command(about = "Converts distance, mass and temperature values written as plain sentences")]
struct Args {
    /// Conversion to run once, e.g. `5 meters to km`. Starts an interactive
    /// session when omitted.
    query: Vec<String>,

    /// Print the result as JSON (one-shot mode only)
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_once(line: &str, json: bool) -> Result<ExitCode> {
    let request = match parse_command(line) {
        Ok(Command::Convert(request)) => request,
        Ok(Command::Exit) => return Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(error = %e, "unparseable query");
            eprintln!("Parse error");
            return Ok(ExitCode::from(2));
        }
    };

    match evaluate(&request)? {
        Outcome::Converted(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected { reason, .. } => {
            eprintln!("{}", reason);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.query.is_empty() {
        let line = args.query.join(" ");
        info!(query = %line, "one-shot conversion");
        return run_once(&line, args.json);
    }

    info!("starting interactive session");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), &mut stdout);
    repl.run().context("interactive session failed")?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
