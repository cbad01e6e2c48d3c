//! Command-line interface for bl
//! This binary parses BL programs and prints them in one of several formats.
//!
//! Usage:
//!   bl parse `<path>` [--format `<format>`] [--statement] [--config `<file>`]  - Parse and print a program
//!   bl tokens `<path>`                                                     - Print the token stream
//!   bl list-formats                                                      - List available output formats
//!
//! A `bl.toml` in the working directory is layered over the built-in defaults;
//! `--config` adds one more layer on top.

use bl_parser::bl::ast::format_source_context;
use bl_parser::bl::config::{BlConfig, Loader};
use bl_parser::bl::formats::OutputFormat;
use bl_parser::bl::lexing::tokens;
use bl_parser::bl::processor::{format_tokens, process_source, resolve_format, ProcessingError};
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

fn main() {
    let matches = Command::new("bl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting BL programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a BL file and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the BL file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats); defaults to inspect.default_format"),
                )
                .arg(
                    Arg::new("statement")
                        .long("statement")
                        .short('s')
                        .help("Parse a bare statement sequence instead of a program")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Additional configuration file"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a BL file")
                .arg(
                    Arg::new("path")
                        .help("Path to the BL file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches
                .get_one::<String>("path")
                .expect("path is a required argument");
            let format = parse_matches.get_one::<String>("format");
            let config = parse_matches.get_one::<String>("config");
            let statement = parse_matches.get_flag("statement");
            handle_parse_command(path, format.map(String::as_str), statement, config);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches
                .get_one::<String>("path")
                .expect("path is a required argument");
            handle_tokens_command(path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: Option<&str>, statement: bool, config: Option<&String>) {
    let config = load_config(config).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    let format = resolve_format(format.unwrap_or(&config.inspect.default_format))
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Run `bl list-formats` to see the available formats");
            std::process::exit(1);
        });

    let source = read_source(path);

    match process_source(&source, format, statement, &config) {
        Ok(output) => print!("{}", output),
        Err(ProcessingError::Parse(error)) => {
            eprintln!("Parse error in {}: {}", path, error);
            eprintln!();
            eprint!("{}", format_source_context(&source, error.position()));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    print!("{}", format_tokens(&tokens(&source)));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format);
        println!("    {}", format.description());
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn load_config(extra: Option<&String>) -> Result<BlConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file("bl.toml");
    if let Some(path) = extra {
        loader = loader.with_file(path);
    }
    loader.build()
}

/// Logs go to stderr. `RUST_LOG` is honoured, and `--verbose` raises everything to trace.
fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr).format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Trace);
    }
    builder.init();
}
