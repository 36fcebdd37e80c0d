//! denv CLI
//!
//! Inspect, query, and normalize dotenv-style configuration files.

mod commands;

use commands::{dump_file, format_file, get_value, lex_file, Options};

fn main() {
    denv::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let result = match command {
        "lex" | "dump" | "fmt" => {
            let (options, positional) = parse_options(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("Usage: denv {command} <file> [options]");
                std::process::exit(1);
            };
            match command {
                "lex" => lex_file(path, &options),
                "dump" => dump_file(path, &options),
                _ => format_file(path, &options),
            }
        }
        "get" => {
            let (options, positional) = parse_options(&args[2..]);
            let [path, key] = positional.as_slice() else {
                eprintln!("Usage: denv get <file> <key> [options]");
                std::process::exit(1);
            };
            get_value(path, key, &options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("denv {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn parse_options(args: &[String]) -> (Options, Vec<String>) {
    match Options::parse(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("denv - dotenv-style configuration engine");
    println!();
    println!("Usage: denv <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  dump <file>          Display parsed entries with their kinds");
    println!("  get <file> <key>     Print one value (exit 1 when absent)");
    println!("  fmt <file>           Print the normalized key=value text");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --delimiter=<d>      Nested key delimiter (default: .)");
    println!("  --var=<name>=<value> Bind a variable for ${{name}} interpolation (repeatable)");
    println!("  --mode=<mode>        Layer <file>.<mode> over <file> (default: the file's `mode` key)");
    println!("  --flat               Store delimited keys without nesting");
    println!("  --blocks=<policy>    Opaque block handling: empty, raw, decode (default)");
    println!("  --json               Output JSON (dump only)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=denv=debug) for tracing output.");
}
