//! Text file inspector.
//!
//! Lets the user pick a text file, echoes it line by line, then prints a
//! summary with line, word and character counts.

mod inspect;
mod report;
mod scan;
mod select;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use collector::exit_codes;
use collector::io::console::{ConsoleInput, ConsoleOutput, OutputSink};
use collector::logging;

use crate::inspect::inspect_file;
use crate::select::{StartDir, choose_file, resolve_start_dir};

#[derive(Parser)]
#[command(
    name = "inspector",
    version,
    about = "Echo a text file and report line, word and character counts"
)]
struct Cli {
    /// File to inspect. Prompts for a path when omitted.
    path: Option<PathBuf>,

    /// Directory that prompted paths are resolved against
    /// (default: `./src`, or `.` when that is missing).
    #[arg(long)]
    start_dir: Option<PathBuf>,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut output = ConsoleOutput::stdout();

    let path = match cli.path {
        Some(path) => path,
        None => {
            let start = match cli.start_dir {
                Some(path) => StartDir {
                    path,
                    warning: None,
                },
                None => {
                    let cwd = std::env::current_dir().context("read current directory")?;
                    resolve_start_dir(&cwd)
                }
            };
            let mut input = ConsoleInput::stdin();
            match choose_file(&start, &mut input, &mut output)? {
                Some(path) => path,
                None => {
                    output.write_line("");
                    output.write_line("File selection cancelled. No file was processed.");
                    return Ok(exit_codes::OK);
                }
            }
        }
    };

    inspect_file(&path, &mut output)?;
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positional_path() {
        let cli = Cli::parse_from(["inspector", "notes.txt"]);
        assert_eq!(cli.path, Some(PathBuf::from("notes.txt")));
        assert!(cli.start_dir.is_none());
    }

    #[test]
    fn parse_start_dir() {
        let cli = Cli::parse_from(["inspector", "--start-dir", "docs"]);
        assert!(cli.path.is_none());
        assert_eq!(cli.start_dir, Some(PathBuf::from("docs")));
    }
}
