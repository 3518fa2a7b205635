//! Tern driver.

use ternc::commands::{explain_error, print_rpn, run_scopes};

fn main() {
    tern_eval::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "rpn" => print_rpn(),
        "scopes" => run_scopes(),
        "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: ternc --explain <code>");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("ternc {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Tern scope chain driver");
    eprintln!();
    eprintln!("Usage: ternc <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  rpn                 Print (1 + 2) * (1 + 2) in postfix form");
    eprintln!("  scopes              Walk a global scope and a block, reporting each read");
    eprintln!("  --explain <code>    Explain an error code (e.g., E6021)");
    eprintln!("  help                Show this help message");
    eprintln!("  version             Show version information");
    eprintln!();
    eprintln!("Set RUST_LOG=tern_eval=trace to see scope pushes, pops and lookups.");
}
