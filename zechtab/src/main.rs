//! # zechtab
//!
//! A CLI tool for printing Zech logarithm tables as LaTeX `tabular` rows.
//!
//! ## Overview
//!
//! zechtab is built on top of zechtablib. By default it prints the GF(5^3)
//! Zech logarithm table interleaved into 17 rows, each row a run of
//! `key & value` cells ending in `\\`, ready to paste into a document.
//!
//! ## Usage
//!
//! ```bash
//! # Print the embedded GF(125) table
//! zechtab
//!
//! # Lay out a table read from a file (or stdin with `-`)
//! zechtab table --input table.txt --stride 8
//!
//! # Generate the table for GF(2^4) and lay it out
//! zechtab table --prime 2 --modulus 1,0,0,1,1
//!
//! # Print the raw `key -> value` table
//! zechtab log-table --prime 5 --modulus 1,0,3,2
//!
//! # GF(p) addition and multiplication tables
//! zechtab arith --prime 7
//!
//! # Discrete log of x^2 + 2x
//! zechtab element --digits 1,2,0
//!
//! # Any command as JSON
//! zechtab table --output json
//! ```

mod render;

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zechtablib::{
    embedded_entries, read_table, Entry, ExtensionField, LatexTable, LayoutOptions, PrimeField,
};

use render::{ArithContext, ArithTables, ElementReport, LogTableContext, OutputMode, TableContext};

/// GF(5^3) with modulus x^3 + 3x + 2
const DEFAULT_PRIME: u64 = 5;
const DEFAULT_MODULUS: [u64; 4] = [1, 0, 3, 2];

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "ZECHTAB_LOG";

/// Command handler signature used by the App
type Handler = fn(&ArgMatches, &CommandContext) -> HandlerResult<serde_json::Value>;

fn prime_arg(help: &'static str) -> Arg {
    Arg::new("prime")
        .short('p')
        .long("prime")
        .value_parser(value_parser!(u64))
        .help(help)
}

fn modulus_arg() -> Arg {
    Arg::new("modulus")
        .short('m')
        .long("modulus")
        .value_delimiter(',')
        .value_parser(value_parser!(u64))
        .help("Modulus coefficients, highest degree first (comma-separated)")
}

/// Add the `table` arguments to a command (shared by the root command)
fn table_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .short('i')
            .long("input")
            .conflicts_with_all(["prime", "modulus"])
            .help("Read a `key -> value` table from a file (`-` for stdin)"),
    )
    .arg(prime_arg("Generate the table for GF(p^m) with this characteristic"))
    .arg(modulus_arg())
    .arg(
        Arg::new("stride")
            .short('s')
            .long("stride")
            .value_parser(value_parser!(usize))
            .help("Number of rows (default 17)"),
    )
    .arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .help("TOML file with layout options"),
    )
}

/// Add `--prime` and `--modulus`; GF(125) when omitted
fn field_args(cmd: Command) -> Command {
    cmd.arg(prime_arg("Field characteristic (GF(125) when omitted)"))
        .arg(modulus_arg())
}

/// Build the clap Command structure
///
/// `--output` is added by the outstanding App.
fn build_command() -> Command {
    let root = Command::new("zechtab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Zech logarithm tables laid out as LaTeX tabular rows")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug information to stderr"),
        );

    table_args(root)
        .subcommand(table_args(
            Command::new("table").about("Lay out a table as LaTeX rows (default command)"),
        ))
        .subcommand(field_args(
            Command::new("log-table").about("Print the Zech logarithm table of GF(p^m)"),
        ))
        .subcommand(
            Command::new("arith")
                .about("Print the GF(p) addition and multiplication tables")
                .arg(prime_arg("Field characteristic (5 when omitted)")),
        )
        .subcommand(
            field_args(
                Command::new("element")
                    .about("Show an element's polynomial form and discrete logarithm"),
            )
            .arg(
                Arg::new("digits")
                    .short('d')
                    .long("digits")
                    .required(true)
                    .value_delimiter(',')
                    .value_parser(value_parser!(u64))
                    .help("Element coefficients, highest degree first (comma-separated)"),
            ),
        )
}

fn prime(matches: &ArgMatches) -> u64 {
    matches
        .get_one::<u64>("prime")
        .copied()
        .unwrap_or(DEFAULT_PRIME)
}

/// Build the field named by `--prime`/`--modulus`
fn build_field(matches: &ArgMatches) -> zechtablib::Result<ExtensionField> {
    let modulus: Vec<u64> = matches
        .get_many::<u64>("modulus")
        .map(|v| v.copied().collect())
        .unwrap_or_else(|| DEFAULT_MODULUS.to_vec());

    ExtensionField::new(prime(matches), &modulus)
}

/// Resolve layout options: config file first, then `--stride`
fn build_layout(matches: &ArgMatches) -> zechtablib::Result<LayoutOptions> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => LayoutOptions::load(path)?,
        None => LayoutOptions::new(),
    };
    if let Some(&stride) = matches.get_one::<usize>("stride") {
        options = options.stride(stride);
    }
    options.validate()?;
    Ok(options)
}

/// Pick the entry source: input file, generated field, or embedded table
fn load_entries(matches: &ArgMatches) -> zechtablib::Result<Vec<Entry>> {
    if let Some(path) = matches.get_one::<String>("input") {
        debug!(path = %path, "reading table");
        return read_table(path);
    }
    if matches.contains_id("prime") || matches.contains_id("modulus") {
        return Ok(build_field(matches)?.zech_log_table());
    }
    embedded_entries()
}

/// Handler for table command
fn table_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let options = build_layout(matches)?;
    let entries = load_entries(matches)?;
    let table = LatexTable::from_entries(&entries, &options)?;
    debug!(
        entries = table.entry_count(),
        rows = table.row_count(),
        "laid out table"
    );

    // For JSON mode, return raw data
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&table)?));
    }

    let context = TableContext {
        body: table.render(&options),
    };
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Handler for log-table command
fn log_table_handler(
    matches: &ArgMatches,
    ctx: &CommandContext,
) -> HandlerResult<serde_json::Value> {
    let entries = build_field(matches)?.zech_log_table();

    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&entries)?));
    }
    Ok(Output::Render(serde_json::to_value(LogTableContext::new(&entries))?))
}

/// Handler for arith command
fn arith_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    let field = PrimeField::new(prime(matches))?;
    let tables = ArithTables {
        addition: field.addition_table()?,
        multiplication: field.multiplication_table()?,
    };

    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&tables)?));
    }
    Ok(Output::Render(serde_json::to_value(ArithContext::new(&tables))?))
}

/// Handler for element command
fn element_handler(
    matches: &ArgMatches,
    _ctx: &CommandContext,
) -> HandlerResult<serde_json::Value> {
    let field = build_field(matches)?;
    let digits: Vec<u64> = matches
        .get_many::<u64>("digits")
        .map(|v| v.copied().collect())
        .unwrap_or_default();
    let el = field.construct_from_digits(&digits)?;

    // Same data for both modes; the template reads the report fields
    Ok(Output::Render(serde_json::to_value(ElementReport::new(&field, &el))?))
}

/// Run a handler outside the App and render its output the same way
fn dispatch(
    handler: Handler,
    template: &str,
    matches: &ArgMatches,
    ctx: &CommandContext,
) -> anyhow::Result<String> {
    match handler(matches, ctx) {
        Ok(Output::Render(value)) => render::render_output(template, &value, ctx.output_mode),
        Ok(_) => Ok(String::new()),
        Err(e) => Err(anyhow::anyhow!("{e:#}")),
    }
}

/// Output mode selected with `--output` (outstanding stores it as `_output_mode`)
fn output_mode(matches: &ArgMatches) -> OutputMode {
    matches
        .get_one::<String>("_output_mode")
        .map(|s| match s.as_str() {
            "json" => OutputMode::Json,
            "text" => OutputMode::Text,
            "term-debug" => OutputMode::TermDebug,
            "term" => OutputMode::Term,
            _ => OutputMode::Auto,
        })
        .unwrap_or(OutputMode::Auto)
}

/// Matches of the invoked subcommand, or the root matches
fn leaf_matches(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map(|(_, sub)| sub).unwrap_or(matches)
}

/// Whether `--verbose` was given; read before dispatch so handlers can log
fn verbose_requested(args: &[String]) -> bool {
    build_command()
        .arg(Arg::new("_output_mode").long("output").global(true))
        .ignore_errors(true)
        .try_get_matches_from(args)
        .map(|matches| leaf_matches(&matches).get_flag("verbose"))
        .unwrap_or(false)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "zechtab=debug,zechtablib=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn report_error(message: &str) -> ExitCode {
    eprintln!("{} {}", style("Error:").for_stderr().red().bold(), message);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    init_tracing(verbose_requested(&args));

    let result = App::builder()
        .theme(render::create_theme())
        .command("table", table_handler, render::TABLE_TEMPLATE)
        .command("log-table", log_table_handler, render::LOG_TABLE_TEMPLATE)
        .command("arith", arith_handler, render::ARITH_TEMPLATE)
        .command("element", element_handler, render::ELEMENT_TEMPLATE)
        .run_to_string(build_command(), args);

    match result {
        RunResult::Handled(output) => {
            // Handler errors come back as text
            if let Some(message) = output.strip_prefix("Error:") {
                return report_error(message.trim());
            }
            print!("{}", output);
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(matches) => {
            // No subcommand: treat as table
            let ctx = CommandContext {
                output_mode: output_mode(&matches),
                command_path: vec![],
            };
            match dispatch(table_handler, render::TABLE_TEMPLATE, &matches, &ctx) {
                Ok(output) => {
                    print!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => report_error(&e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["zechtab"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    fn run_with(args: &[&str], output_mode: OutputMode) -> anyhow::Result<String> {
        let matches = matches_for(args);
        let ctx = CommandContext {
            output_mode,
            command_path: vec![],
        };
        match matches.subcommand() {
            Some(("table", sub)) => dispatch(table_handler, render::TABLE_TEMPLATE, sub, &ctx),
            Some(("log-table", sub)) => {
                dispatch(log_table_handler, render::LOG_TABLE_TEMPLATE, sub, &ctx)
            }
            Some(("arith", sub)) => dispatch(arith_handler, render::ARITH_TEMPLATE, sub, &ctx),
            Some(("element", sub)) => {
                dispatch(element_handler, render::ELEMENT_TEMPLATE, sub, &ctx)
            }
            _ => dispatch(table_handler, render::TABLE_TEMPLATE, &matches, &ctx),
        }
    }

    fn run(args: &[&str]) -> anyhow::Result<String> {
        run_with(args, OutputMode::Text)
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_root_defaults_to_embedded_table() {
        let output = run(&[]).unwrap();
        assert!(output.starts_with("Infinity & 0 & 16 & 24"));
        assert_eq!(output.lines().count(), 17);
    }

    #[test]
    fn test_table_text_is_library_render() {
        let options = LayoutOptions::default();
        let table = LatexTable::from_entries(&embedded_entries().unwrap(), &options).unwrap();
        assert_eq!(run(&[]).unwrap(), table.render(&options));
    }

    #[test]
    fn test_table_subcommand_matches_root() {
        assert_eq!(run(&[]).unwrap(), run(&["table"]).unwrap());
    }

    #[test]
    fn test_generated_table_matches_embedded() {
        let embedded = run(&["table"]).unwrap();
        let generated = run(&["table", "--prime", "5", "--modulus", "1,0,3,2"]).unwrap();
        assert_eq!(embedded, generated);
    }

    #[test]
    fn test_stride_flag() {
        let output = run(&["--stride", "5"]).unwrap();
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_zero_stride_is_an_error() {
        let err = run(&["--stride", "0"]).unwrap_err();
        assert!(err.to_string().contains("stride"));
    }

    #[test]
    fn test_huge_stride_is_an_error() {
        let err = run(&["--stride", "4000000000"]).unwrap_err();
        assert!(err.to_string().contains("stride must be between 1 and"));
    }

    #[test]
    fn test_input_conflicts_with_prime() {
        let result = build_command().try_get_matches_from([
            "zechtab", "table", "--input", "t.txt", "--prime", "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_json() {
        let output = run_with(&["table"], OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["stride"], 17);
        assert_eq!(value["rows"][0]["cells"][0], "Infinity & 0");
    }

    #[test]
    fn test_log_table_layout() {
        let output = run(&["log-table"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 125);
        assert_eq!(lines[0], "Infinity -> 0");
        assert_eq!(lines[1], "  0 -> 93");
        assert_eq!(lines[63], " 62 -> Infinity");
        assert_eq!(lines[124], "123 -> 102");
    }

    #[test]
    fn test_element_report() {
        let output = run(&["element", "--digits", "0,1,0"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["x", "primitive: \"x\"", "\"x\" = \"x\" ^ 1"]);
    }

    #[test]
    fn test_element_wrong_digit_count() {
        let err = run(&["element", "--digits", "1,2"]).unwrap_err();
        assert!(err.to_string().contains("expected 3 digits"));
    }

    #[test]
    fn test_arith_json() {
        let output = run_with(&["arith", "--prime", "3"], OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["addition"]["operator"], "+");
        assert_eq!(value["multiplication"]["cells"][2][2], 1);
    }

    #[test]
    fn test_arith_prime_too_large_for_tables() {
        let err = run(&["arith", "--prime", "65537"]).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_reducible_modulus_error() {
        let err = run(&["log-table", "--modulus", "1,0,4"]).unwrap_err();
        assert!(err.to_string().contains("reducible"));
    }

    #[test]
    fn test_default_field() {
        let matches = matches_for(&["log-table"]);
        let (_, sub) = matches.subcommand().unwrap();
        let field = build_field(sub).unwrap();
        assert_eq!(field.p(), DEFAULT_PRIME);
        assert_eq!(field.order(), 125);
    }

    #[test]
    fn test_verbose_requested() {
        assert!(verbose_requested(&argv(&["zechtab", "-v"])));
        assert!(verbose_requested(&argv(&[
            "zechtab", "table", "--output", "json", "--verbose"
        ])));
        assert!(!verbose_requested(&argv(&["zechtab", "table"])));
        assert!(!verbose_requested(&argv(&["zechtab", "--help"])));
    }
}
