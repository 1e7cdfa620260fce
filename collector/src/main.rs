//! Guided record collector.
//!
//! Prompts for person records (first name, last name, 6-digit id, email,
//! year of birth), re-asking until each field is valid, and saves them as a
//! `.csv` file under the configured output directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use collector::collect::{CollectOptions, CollectOutcome, run_collect};
use collector::exit_codes;
use collector::io::config::{DEFAULT_CONFIG_FILE, load_config};
use collector::io::console::{ConsoleInput, ConsoleOutput};
use collector::logging;
use collector::prompt::PromptError;

#[derive(Parser)]
#[command(
    name = "collector",
    version,
    about = "Collect validated person records into a CSV file"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory for the CSV file (overrides `output_dir` in config).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// CSV file name; `.csv` is appended when missing. Prompts when omitted.
    #[arg(long)]
    file_name: Option<String>,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!();
            eprintln!("{:#}", err);
            match err.downcast_ref::<PromptError>() {
                Some(PromptError::InputExhausted { .. }) => exit_codes::INPUT_CLOSED,
                _ => exit_codes::FAILED,
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
        config.validate()?;
    }
    let options = CollectOptions {
        config,
        file_name: cli.file_name,
    };

    let mut input = ConsoleInput::stdin();
    let mut output = ConsoleOutput::stdout();
    match run_collect(&options, &mut input, &mut output)? {
        CollectOutcome::Saved { .. } => Ok(exit_codes::OK),
        CollectOutcome::SaveFailed { .. } => Ok(exit_codes::FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["collector"]);
        assert_eq!(cli.config, PathBuf::from("collector.toml"));
        assert!(cli.output_dir.is_none());
        assert!(cli.file_name.is_none());
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::parse_from([
            "collector",
            "--config",
            "cfg.toml",
            "--output-dir",
            "data",
            "--file-name",
            "people",
        ]);
        assert_eq!(cli.config, PathBuf::from("cfg.toml"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("data")));
        assert_eq!(cli.file_name.as_deref(), Some("people"));
    }
}
