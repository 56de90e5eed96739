//! Pyret front-end CLI.

use std::io::{self, IsTerminal};

use pyretc::commands::{check_files, explain_error, lex_file, parse_file};
use pyretc::{init_tracing, CliError, Options, Outcome};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return;
    };

    let code = match run(command, &args[2..]) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("error: {error}");
            if error.wants_usage() {
                eprintln!();
                print_usage();
            }
            CliError::EXIT_CODE
        }
    };
    std::process::exit(code);
}

fn run(command: &str, rest: &[String]) -> Result<Outcome, CliError> {
    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(Outcome::Clean);
        }
        "version" | "--version" | "-V" => {
            println!("pyretc {}", env!("CARGO_PKG_VERSION"));
            return Ok(Outcome::Clean);
        }
        _ => {}
    }

    let mut options = Options::parse(rest)?;
    options.diagnostics_tty = io::stderr().is_terminal();
    let mut out = io::stdout();
    let mut err = io::stderr();

    match command {
        "lex" => lex_file(
            options.single_path("pyretc lex <file.arr>")?,
            &options,
            &mut out,
            &mut err,
        ),
        "parse" => parse_file(
            options.single_path("pyretc parse [--tokens] <file.arr>")?,
            &options,
            &mut out,
            &mut err,
        ),
        "check" => check_files(&options, &mut out, &mut err),
        "explain" | "--explain" => {
            explain_error(options.single_path("pyretc explain <CODE>")?, &mut out)
        }
        _ => Err(CliError::UnknownCommand(command.to_string())),
    }
}

fn print_usage() {
    println!("Pyret front-end");
    println!();
    println!("Usage: pyretc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.arr>         Tokenize and display every token");
    println!("  parse <file.arr>       Parse and display the concrete syntax tree");
    println!("  check <file.arr>...    Check files for syntax errors");
    println!("  explain <code>         Explain an error code (e.g., E1003)");
    println!("  help                   Show this help message");
    println!("  version                Show the version");
    println!();
    println!("Options:");
    println!("  --color=<mode>         auto, always or never (default: auto)");
    println!("  --tokens               parse: print the tokens before the tree");
    println!("  --no-parallel          check: parse files one at a time");
    println!();
    println!("Environment:");
    println!("  RUST_LOG               Enable tracing, e.g. pyret_parse=debug");
    println!("  PYRET_LOG_TREE=1       Print tracing output nested by span");
}
