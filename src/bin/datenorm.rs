//! Command-line interface for datenorm
//!
//! Normalizes free-text date values into EDTF, one JSON result per line.
//!
//! Usage:
//!   datenorm normalize `<value>`...             - Normalize the given values
//!   datenorm normalize --generic `<value>`...   - Treat values as generic (non-date) properties
//!   datenorm normalize                        - Read values from stdin, one per line

use clap::{Arg, ArgAction, Command};
use datenorm::normalizer::{DatesNormalizer, NormalizationResult};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let matches = Command::new("datenorm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalizes free-text date values into EDTF")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("normalize")
                .about("Normalize date values, printing one JSON result per line")
                .arg(
                    Arg::new("generic")
                        .long("generic")
                        .action(ArgAction::SetTrue)
                        .help("Treat values as generic properties that may hold non-date text"),
                )
                .arg(
                    Arg::new("value")
                        .help("Values to normalize; when omitted, values are read from stdin")
                        .num_args(0..)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("normalize", normalize_matches)) => {
            let generic = normalize_matches.get_flag("generic");
            let values: Vec<String> = normalize_matches
                .get_many::<String>("value")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            handle_normalize_command(&values, generic);
        }
        _ => unreachable!(),
    }
}

fn handle_normalize_command(values: &[String], generic: bool) {
    let normalizer = DatesNormalizer::new();
    let mut stdout = io::stdout().lock();
    if values.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                }
            };
            print_result(&mut stdout, normalize(&normalizer, &line, generic));
        }
    } else {
        for value in values {
            print_result(&mut stdout, normalize(&normalizer, value, generic));
        }
    }
}

fn normalize(normalizer: &DatesNormalizer, value: &str, generic: bool) -> NormalizationResult {
    if generic {
        normalizer.normalize_generic_property(value)
    } else {
        normalizer.normalize_date_property(value)
    }
}

fn print_result(out: &mut impl Write, result: NormalizationResult) {
    match serde_json::to_string(&result) {
        Ok(json) => {
            if writeln!(out, "{}", json).is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
