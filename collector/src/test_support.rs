//! Test-only scripted console doubles.

use std::collections::VecDeque;

use crate::io::console::{InputError, InputSource, OutputSink};

/// Input source that replays a fixed list of lines, then reports exhaustion.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Number of lines handed out so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, InputError> {
        let line = self.lines.pop_front().ok_or(InputError::Exhausted)?;
        self.reads += 1;
        Ok(line)
    }
}

/// Output sink that keeps prompts and lines apart for assertions.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines containing `needle`.
    pub fn lines_containing(&self, needle: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.contains(needle))
            .map(String::as_str)
            .collect()
    }
}

impl OutputSink for RecordingOutput {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn write_prompt(&mut self, text: &str) {
        self.prompts.push(text.to_string());
    }
}
