//! Kalkulator command-line shell.
//!
//! A thin presentation layer over `kalkulator-core`: evaluate once, run an
//! interactive session, or evaluate a batch file.

mod batch;
mod config;
mod output;
mod session;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use kalkulator_core::{evaluate_request, EvaluationRequest, Locale, Operation};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};

/// How a command finished, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// A result was shown, or a batch ran to completion
    Success,
    /// A single evaluation was rejected
    Rejected,
    /// Config or input files could not be read or parsed
    Failure,
}

impl Status {
    fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Rejected => 1,
            Status::Failure => 2,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kalkulator")]
#[command(about = "Two-number calculator with input validation")]
#[command(version)]
struct Cli {
    /// Message language ('pl' or 'en')
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a single expression, e.g. `kalkulator eval 5 / 2`
    Eval {
        /// First number
        #[arg(allow_hyphen_values = true)]
        first: String,

        /// Operation: + - × ÷ (or add, sub, mul, div, *, x, /, :)
        #[arg(allow_hyphen_values = true)]
        operation: Operation,

        /// Second number
        #[arg(allow_hyphen_values = true)]
        second: String,
    },

    /// Start an interactive session on stdin
    Session,

    /// Evaluate every request in a YAML or JSON file
    Batch {
        /// Request file (`.json` for JSON, anything else is read as YAML)
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<Status> {
    let config = CliConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.locale, cli.format);
    tracing::debug!(locale = %config.locale, format = ?config.format, "configuration resolved");

    match cli.command {
        Command::Eval {
            first,
            operation,
            second,
        } => {
            let request = EvaluationRequest::new(first, second, operation);
            let report = evaluate_request(&request, config.locale);
            println!("{}", output::render_report(&report, config.format)?);

            if report.outcome.is_value() {
                Ok(Status::Success)
            } else {
                Ok(Status::Rejected)
            }
        }
        Command::Session => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session::run_session(stdin.lock(), io::stdout().lock(), config.locale, prompt)?;
            Ok(Status::Success)
        }
        Command::Batch { file } => {
            let requests = batch::load_requests(&file)?;
            let reports = batch::run_batch(&requests, config.locale);
            println!("{}", output::render_reports(&reports, config.format)?);
            Ok(Status::Success)
        }
    }
}

/// Run a parsed command line, reporting any error on stderr.
fn execute(cli: Cli) -> Status {
    match run(cli) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {:#}", err);
            Status::Failure
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ExitCode::from(execute(cli).code())
}
