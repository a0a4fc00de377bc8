//! Card Authorizer CLI
//!
//! Reads authorization requests as JSON lines, from a file or stdin, and
//! writes one JSON response line per request to stdout.
//!
//! # Usage
//!
//! ```bash
//! card-authorizer < operations.jsonl
//! card-authorizer operations.jsonl
//! card-authorizer --compact -vv operations.jsonl
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, read or write failure)

use card_authorizer::cli;
use card_authorizer::io::open_file;
use card_authorizer::processor;
use card_authorizer::AuthorizerError;
use std::io::{self, BufRead};
use std::process;
use tracing::info;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), AuthorizerError> {
    let input: Box<dyn BufRead> = match args.input_path() {
        Some(path) => {
            info!(path = %path.display(), "reading requests from file");
            Box::new(open_file(path)?)
        }
        None => {
            info!("reading requests from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    processor::process(input, &mut output, args.output_style())?;
    Ok(())
}
