use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use tracing::{debug, Level};

use sprintf::rendering::{self, Identity, Terminal};
use sprintf::{Options, Value};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let values = || {
        [
            Arg::new("template")
                .required(true)
                .help("The format template, containing % directives."),
            Arg::new("values")
                .action(ArgAction::Append)
                .help("Values to format into the template, in order."),
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Read each value as a JSON literal, falling back to text if it does not parse."),
            Arg::new("precision")
                .long("precision")
                .value_parser(clap::value_parser!(usize))
                .help("Precision used when a directive does not give one [default: 6]"),
            Arg::new("bias")
                .long("bias")
                .value_parser(clap::value_parser!(usize))
                .help("Extra significant digits for fixed notation verbs [default: 1]"),
            Arg::new("no-audit")
                .long("no-audit")
                .action(ArgAction::SetTrue)
                .help("Do not report arguments that were supplied but never used."),
        ]
    };

    let matches = Command::new("sprintf")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Printf-style formatting with in-band error annotations.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit debugging output to standard error."),
        )
        .subcommand(
            Command::new("format")
                .about("Expand the template and print the result")
                .args(values())
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes to highlight annotations even if output is redirected to a pipe or file."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Expand the template and report any problems, exiting non-zero if there were some")
                .args(values()),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            let (template, options, values) = read_arguments(submatches);
            let expansion = sprintf::expand(&options, template, &values);

            let raw_output = submatches.get_flag("raw-control-chars");
            let result = if raw_output
                || std::io::stdout().is_terminal()
            {
                rendering::highlight(&expansion, &Terminal)
            } else {
                rendering::highlight(&expansion, &Identity)
            };

            println!("{}", result);
        }
        Some(("check", submatches)) => {
            let (template, options, values) = read_arguments(submatches);
            let expansion = sprintf::expand(&options, template, &values);

            debug!("{} problem{}", expansion.problems.len(), if expansion.problems.len() == 1 { "" } else { "s" });

            if expansion.is_clean() {
                return;
            }

            let colour = std::io::stderr().is_terminal();
            for p in &expansion.problems {
                let line = if colour {
                    problem::concise_problem(p, template, &Terminal)
                } else {
                    problem::concise_problem(p, template, &Identity)
                };
                eprintln!("{}", line);
            }
            std::process::exit(1);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: sprintf [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn read_arguments(submatches: &ArgMatches) -> (&str, Options, Vec<Value>) {
    let template = submatches
        .get_one::<String>("template")
        .map(String::as_str)
        .unwrap_or("");

    let json = submatches.get_flag("json");
    let values = submatches
        .get_many::<String>("values")
        .into_iter()
        .flatten()
        .map(|text| read_value(text, json))
        .collect();

    let mut options = Options::default();
    if let Some(precision) = submatches.get_one::<usize>("precision") {
        options.default_precision = *precision;
    }
    if let Some(bias) = submatches.get_one::<usize>("bias") {
        options.precision_bias = *bias;
    }
    if submatches.get_flag("no-audit") {
        options.audit = false;
    }

    debug!(?options);
    (template, options, values)
}

fn read_value(text: &str, json: bool) -> Value {
    if json {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(parsed) => return Value::from(parsed),
            Err(error) => debug!(%error, "Not JSON; using as text: {}", text),
        }
    }
    Value::from(text)
}
