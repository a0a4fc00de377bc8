use crate::io::OutputStyle;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Authorize card transactions against a single account
#[derive(Parser, Debug)]
#[command(name = "card-authorizer", version)]
#[command(about = "Authorize card transactions read as JSON lines", long_about = None)]
pub struct CliArgs {
    /// Input file with one JSON request per line
    #[arg(
        value_name = "INPUT",
        help = "Path to the input file; reads stdin when omitted or '-'"
    )]
    pub input_file: Option<PathBuf>,

    /// Emit compact JSON instead of the spaced style
    #[arg(long = "compact", help = "Write responses as compact JSON")]
    pub compact: bool,

    /// Log verbosity, repeatable
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Input path, or None for stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.input_file
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    pub fn output_style(&self) -> OutputStyle {
        if self.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::Spaced
        }
    }

    /// Default log filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
