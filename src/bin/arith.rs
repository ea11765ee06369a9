//! Command-line interface for arith
//! Tokenizes and checks an arithmetic expression, printing the tokens or the diagnostic.
//!
//! Usage:
//!   arith `<expression>` [--format `<format>`] [--config `<file>`]  - Check an expression
//!   arith - | arith                                          - Read the expression from stdin
//!   arith --list-formats                                     - List all available formats
//!
//! Exit status is 0 when the expression is accepted (or only tokenized), 1 when it is
//! rejected, and 2 on usage, configuration or I/O errors.

use arith_lex::arith::config::Loader;
use arith_lex::arith::processor::{available_formats, process, ProcessingError};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
    #[error("Error reading expression: {0}")]
    Io(#[from] std::io::Error),
}

fn cli() -> Command {
    Command::new("arith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize and check decimal arithmetic expressions")
        .arg(
            Arg::new("expression")
                .help("Expression to check; '-' or nothing reads stdin")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'verdict-json', 'token-simple')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every check to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match handle_check_command(&matches) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Handle the default command; returns whether the expression was accepted
fn handle_check_command(matches: &ArgMatches) -> Result<bool, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }
    let config = loader.build()?;

    init_logging(&config.logging.level, matches.get_flag("verbose"));

    let spec = config.processing_spec()?;
    let expression = read_expression(matches.get_one::<String>("expression"))?;
    debug!(format = %spec.name(), length = expression.len(), "checking expression");

    let processed = process(&expression, &spec, config.output.pretty)?;
    println!("{}", processed.output);
    Ok(processed.accepted)
}

fn read_expression(arg: Option<&String>) -> Result<String, std::io::Error> {
    match arg.map(String::as_str) {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(expression) => Ok(expression.to_string()),
    }
}

fn init_logging(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
