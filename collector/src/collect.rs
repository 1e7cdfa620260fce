//! Orchestration for the `collector` command: run a session, choose a file
//! name, and persist the records.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::record::Record;
use crate::core::schema::person_schema;
use crate::io::config::CollectorConfig;
use crate::io::console::{InputSource, OutputSink};
use crate::io::csv_store::save_records;
use crate::prompt::{PromptError, prompt_text};
use crate::session::run_session;

pub const FILE_NAME_PROMPT: &str = "Enter the name for the CSV file (e.g., mydata)";

/// Options resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub config: CollectorConfig,
    /// Skip the file-name prompt when set.
    pub file_name: Option<String>,
}

/// How a collection run ended.
#[derive(Debug)]
pub enum CollectOutcome {
    /// Records written to `path`.
    Saved { path: PathBuf, records: usize },
    /// Session finished but the save failed; records stay in memory.
    SaveFailed {
        records: Vec<Record>,
        error: anyhow::Error,
    },
}

/// Collect person records from `input` and save them under the configured
/// output directory.
///
/// Input exhaustion aborts with a [`PromptError`] in the error chain; save
/// failures are reported through [`CollectOutcome::SaveFailed`].
pub fn run_collect(
    options: &CollectOptions,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<CollectOutcome> {
    let config = &options.config;
    let schema = person_schema(config.birth_year.min, config.birth_year.max)
        .context("build person schema")?;

    output.write_line("--- Data Collection for CSV File ---");
    let records = run_session(&schema, input, output).context("collect records")?;
    output.write_line("");
    output.write_line("--- Data Collection Complete ---");

    let file_name = match &options.file_name {
        Some(name) => name.clone(),
        None => prompt_file_name(input, output).context("read file name")?,
    };

    match save_records(&config.output_dir, &file_name, &records) {
        Ok(path) => {
            info!(path = %path.display(), records = records.len(), "records saved");
            output.write_line(&format!("Data successfully saved to: {}", path.display()));
            Ok(CollectOutcome::Saved {
                path,
                records: records.len(),
            })
        }
        Err(error) => {
            output.write_line(&format!(
                "An I/O error occurred while writing the file: {error:#}"
            ));
            Ok(CollectOutcome::SaveFailed { records, error })
        }
    }
}

fn prompt_file_name(
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<String, PromptError> {
    prompt_text(FILE_NAME_PROMPT, input, output)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::{RecordingOutput, ScriptedInput};

    fn options(dir: PathBuf, file_name: Option<&str>) -> CollectOptions {
        CollectOptions {
            config: CollectorConfig {
                output_dir: dir,
                ..CollectorConfig::default()
            },
            file_name: file_name.map(str::to_string),
        }
    }

    #[test]
    fn collects_and_saves_with_prompted_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("src");
        let mut input = ScriptedInput::new([
            "Ann",
            "Lee",
            "12345",
            "000001",
            "a@b.com",
            "1850",
            "1990",
            "N",
            "",
            "people",
        ]);
        let mut output = RecordingOutput::new();

        let outcome = run_collect(&options(dir.clone(), None), &mut input, &mut output)
            .expect("collect");

        let CollectOutcome::Saved { path, records } = outcome else {
            panic!("expected saved outcome");
        };
        assert_eq!(records, 1);
        assert_eq!(path, dir.join("people.csv"));
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "Ann,Lee,000001,a@b.com,1990\n"
        );
        assert_eq!(output.lines_containing("required format").len(), 1);
        assert_eq!(output.lines_containing("out of range").len(), 1);
        assert_eq!(output.lines_containing("must not be empty").len(), 1);
    }

    #[test]
    fn file_name_option_skips_prompt() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut input =
            ScriptedInput::new(["Ann", "Lee", "000001", "a@b.com", "1990", "n"]);
        let mut output = RecordingOutput::new();

        let outcome = run_collect(
            &options(temp.path().to_path_buf(), Some("out.CSV")),
            &mut input,
            &mut output,
        )
        .expect("collect");

        assert!(matches!(outcome, CollectOutcome::Saved { records: 1, .. }));
        assert!(temp.path().join("out.CSV").exists());
        assert!(!output.prompts.iter().any(|p| p.contains("CSV file")));
    }

    #[test]
    fn save_failure_keeps_records() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").expect("seed");
        let mut input =
            ScriptedInput::new(["Ann", "Lee", "000001", "a@b.com", "1990", "N"]);
        let mut output = RecordingOutput::new();

        let outcome = run_collect(&options(blocker, Some("people")), &mut input, &mut output)
            .expect("collect");

        let CollectOutcome::SaveFailed { records, .. } = outcome else {
            panic!("expected save failure");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(output.lines_containing("I/O error").len(), 1);
    }

    #[test]
    fn exhausted_input_is_a_prompt_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut input = ScriptedInput::new(["Ann"]);
        let mut output = RecordingOutput::new();

        let err = run_collect(
            &options(temp.path().to_path_buf(), None),
            &mut input,
            &mut output,
        )
        .expect_err("exhausted");
        assert!(matches!(
            err.downcast_ref::<PromptError>(),
            Some(PromptError::InputExhausted { .. })
        ));
    }
}
