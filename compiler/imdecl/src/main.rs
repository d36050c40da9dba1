//! imdecl CLI
//!
//! Tokenizes C-like declaration listings for binding generation.

use imdecl::commands::{lex_builtin, lex_file};

fn main() {
    imdecl::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match args.len() {
            2 => lex_builtin(),
            3 => lex_file(&args[2]),
            _ => {
                eprintln!("Usage: imdecl lex [<file>]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("imdecl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("imdecl: declaration scanner");
    println!();
    println!("Usage: imdecl <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [<file>]         Tokenize a declaration listing and print tokens");
    println!("                       (default: the built-in ImDrawList listing)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Output:");
    println!("  One line per token: `token: <kind_ordinal>, <token_text>`");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. imdecl=debug or imdecl_lexer=trace");
}
