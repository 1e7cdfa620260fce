//! Record session: fill every schema field in order, then ask whether to
//! continue.
//!
//! ```text
//! CollectingField(0) -> ... -> CollectingField(n-1) -> AskingContinue
//!        ^                                                  |
//!        +------------------- yes --------------------------+-- no --> Done
//! ```
//!
//! Fields are never skipped and accepted values are never revisited.

use tracing::{debug, info};

use crate::core::record::{FieldValue, Record};
use crate::core::schema::Schema;
use crate::io::console::{InputSource, OutputSink};
use crate::prompt::{PromptError, prompt, prompt_yes_no};

pub const CONTINUE_PROMPT: &str = "Do you want to add another record?";

/// Position in the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    CollectingField(usize),
    AskingContinue,
    Done,
}

/// Owns the records collected so far.
#[derive(Debug)]
pub struct Session<'a> {
    schema: &'a Schema,
    state: SessionState,
    pending: Vec<FieldValue>,
    records: Vec<Record>,
}

impl<'a> Session<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            state: SessionState::CollectingField(0),
            pending: Vec::with_capacity(schema.len()),
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Advance the state machine by one prompt.
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        output: &mut impl OutputSink,
    ) -> Result<SessionState, PromptError> {
        self.state = match self.state {
            SessionState::CollectingField(index) => {
                if index == 0 {
                    output.write_line("");
                    output.write_line("--- Enter New Record ---");
                }
                let field = &self.schema.fields()[index];
                let value = prompt(&field.prompt, &field.validator, input, output)?;
                debug!(field = %field.name, "field accepted");
                self.pending.push(value);
                if index + 1 < self.schema.len() {
                    SessionState::CollectingField(index + 1)
                } else {
                    let record = Record::new(std::mem::take(&mut self.pending));
                    output.write_line(&format!("Record added: {}", record.to_csv_line()));
                    self.records.push(record);
                    info!(records = self.records.len(), "record completed");
                    SessionState::AskingContinue
                }
            }
            SessionState::AskingContinue => {
                if prompt_yes_no(CONTINUE_PROMPT, input, output)? {
                    SessionState::CollectingField(0)
                } else {
                    SessionState::Done
                }
            }
            SessionState::Done => SessionState::Done,
        };
        Ok(self.state)
    }

    /// Run until the user declines to continue, returning every record.
    pub fn run(
        mut self,
        input: &mut impl InputSource,
        output: &mut impl OutputSink,
    ) -> Result<Vec<Record>, PromptError> {
        while self.step(input, output)? != SessionState::Done {}
        Ok(self.records)
    }
}

/// Prompt for every field of `schema` once, in order.
pub fn collect_record(
    schema: &Schema,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<Record, PromptError> {
    let mut values = Vec::with_capacity(schema.len());
    for field in schema.fields() {
        values.push(prompt(&field.prompt, &field.validator, input, output)?);
    }
    Ok(Record::new(values))
}

/// Collect records until the user answers `N` to the continuation prompt.
pub fn run_session(
    schema: &Schema,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<Vec<Record>, PromptError> {
    Session::new(schema).run(input, output)
}
