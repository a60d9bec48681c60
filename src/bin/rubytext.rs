//! Command-line interface for rubytext
//! Parses ruby annotation markup and prints the segments in one of the bundled formats.
//!
//! Usage:
//!   rubytext parse `<path>` [--format `<format>`] [--strict] [--compact]  - Parse a file (`-` for stdin)
//!   rubytext check `<path>`                                            - Report strict-mode diagnostics
//!   rubytext list-formats                                            - List all available formats
//!
//! Every subcommand accepts `--config <file>` to layer a TOML file over the defaults.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rubytext::ruby::config::{Loader, RubyConfig};
use rubytext::ruby::processor::{read_source, Processor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "rubytext=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("rubytext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing ruby (furigana) annotation markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print its segments")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'html', 'treeviz')"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Print diagnostics to stderr while parsing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Drop empty plain segments")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report suspicious markup; exits with status 2 when anything is found")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("list-formats", list_matches)) => handle_list_formats_command(list_matches),
        _ => unreachable!(),
    }
}

fn exit_with_error(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}

/// Build the configuration from defaults, `--config` and per-command overrides.
fn load_config(matches: &ArgMatches, overrides: &[(&str, bool)]) -> RubyConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for (key, value) in overrides {
        loader = loader
            .set_override(key, *value)
            .unwrap_or_else(|e| exit_with_error(e));
    }

    if let Some(format) = matches
        .try_get_one::<String>("format")
        .ok()
        .flatten()
    {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| exit_with_error(e));
    }

    loader.build().unwrap_or_else(|e| exit_with_error(e))
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let mut overrides = Vec::new();
    if matches.get_flag("strict") {
        overrides.push(("check.strict", true));
    }
    if matches.get_flag("compact") {
        overrides.push(("parser.keep_empty_plain", false));
    }

    let config = load_config(matches, &overrides);
    let path = matches.get_one::<String>("path").unwrap();
    let format = config.output.format.clone();

    let processor = Processor::new(config);
    let output = processor
        .process_file(path, &format)
        .unwrap_or_else(|e| exit_with_error(e));

    if let Some(report) = &output.report {
        for diagnostic in &report.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
    }

    print!("{}", output.rendered);
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let config = load_config(matches, &[]);
    let path = matches.get_one::<String>("path").unwrap();
    let source = read_source(path).unwrap_or_else(|e| exit_with_error(e));

    let report = Processor::new(config).check_str(&source);
    if report.is_clean() {
        println!("{}: ok", path);
        return;
    }

    for diagnostic in &report.diagnostics {
        println!("{}:{}", path, diagnostic);
    }
    std::process::exit(2);
}

/// Handle the list-formats command
fn handle_list_formats_command(matches: &ArgMatches) {
    let config = load_config(matches, &[]);
    let processor = Processor::new(config);
    let registry = processor.registry();

    println!("Available output formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
