//! Retry-until-valid prompting.
//!
//! [`prompt`] shows a prompt, reads one line, and validates it. Rejections
//! are written to the output sink and the prompt is shown again; there is no
//! retry limit. The only ways out are an accepted value or a broken input
//! source.

use std::io;

use thiserror::Error;
use tracing::debug;

use crate::core::record::FieldValue;
use crate::core::validator::{self, Rejection, Validator};
use crate::io::console::{InputError, InputSource, OutputSink};

/// Session-breaking input failures. Validation rejections never appear here.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended while waiting for '{prompt}'")]
    InputExhausted { prompt: String },

    #[error("failed to read input for '{prompt}': {source}")]
    Io {
        prompt: String,
        #[source]
        source: io::Error,
    },
}

impl PromptError {
    fn from_input(prompt: &str, err: InputError) -> Self {
        match err {
            InputError::Exhausted => Self::InputExhausted {
                prompt: prompt.to_string(),
            },
            InputError::Io(source) => Self::Io {
                prompt: prompt.to_string(),
                source,
            },
        }
    }
}

/// Prompt until `validator` accepts a line, returning the accepted value.
pub fn prompt(
    text: &str,
    validator: &Validator,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<FieldValue, PromptError> {
    let decorated = validator.decorate_prompt(text);
    prompt_with(text, &decorated, |raw| validator.validate(raw), input, output)
}

/// Prompt for a non-blank line, returned trimmed.
pub fn prompt_text(
    text: &str,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<String, PromptError> {
    let decorated = Validator::NonBlank.decorate_prompt(text);
    prompt_with(text, &decorated, validator::non_blank, input, output)
}

/// Prompt for an integer in `[low, high]`.
pub fn prompt_int(
    text: &str,
    low: i64,
    high: i64,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<i64, PromptError> {
    let decorated = Validator::RangedInt { low, high }.decorate_prompt(text);
    prompt_with(
        text,
        &decorated,
        |raw| validator::ranged_int(raw, low, high),
        input,
        output,
    )
}

/// Prompt for a `Y`/`N` answer.
pub fn prompt_yes_no(
    text: &str,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<bool, PromptError> {
    let decorated = Validator::YesNo.decorate_prompt(text);
    prompt_with(text, &decorated, validator::yes_no, input, output)
}

fn prompt_with<T>(
    text: &str,
    decorated: &str,
    check: impl Fn(&str) -> Result<T, Rejection>,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<T, PromptError> {
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        output.write_prompt(decorated);
        let raw = input
            .read_line()
            .map_err(|err| PromptError::from_input(text, err))?;
        match check(&raw) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                debug!(prompt = text, attempt, reason = %rejection, "input rejected");
                output.write_line(&rejection.to_string());
            }
        }
    }
}
