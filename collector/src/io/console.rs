//! Line-oriented input sources and output sinks.
//!
//! The prompt loop and session never touch stdin/stdout directly; they take
//! these traits by `&mut` so tests can script the conversation.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum InputError {
    /// No more lines will ever be available.
    #[error("input exhausted")]
    Exhausted,

    #[error("read input: {0}")]
    Io(#[from] io::Error),
}

/// Blocking source of raw input lines.
pub trait InputSource {
    /// Read one line without its terminator.
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// Fire-and-forget sink for user-facing text.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);

    /// Show a prompt immediately before reading input.
    fn write_prompt(&mut self, text: &str) {
        self.write_line(text);
    }
}

/// Input source backed by any buffered reader (stdin in the binaries).
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ConsoleInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Exhausted);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Output sink backed by any writer (stdout in the binaries).
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{text}") {
            warn!(error = %err, "failed to write console line");
        }
    }

    fn write_prompt(&mut self, text: &str) {
        let result = write!(self.writer, "\n{text}").and_then(|()| self.writer.flush());
        if let Err(err) = result {
            warn!(error = %err, "failed to write console prompt");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_input_strips_terminators() {
        let mut input = ConsoleInput::new("first\r\nsecond\nlast".as_bytes());
        assert_eq!(input.read_line().expect("line"), "first");
        assert_eq!(input.read_line().expect("line"), "second");
        assert_eq!(input.read_line().expect("line"), "last");
        assert!(matches!(input.read_line(), Err(InputError::Exhausted)));
    }

    #[test]
    fn console_input_keeps_blank_lines() {
        let mut input = ConsoleInput::new("\n\n".as_bytes());
        assert_eq!(input.read_line().expect("line"), "");
        assert_eq!(input.read_line().expect("line"), "");
        assert!(matches!(input.read_line(), Err(InputError::Exhausted)));
    }

    #[test]
    fn console_output_writes_prompts_without_newline() {
        let mut buf = Vec::new();
        {
            let mut output = ConsoleOutput::new(&mut buf);
            output.write_prompt("Name: ");
            output.write_line("ok");
        }
        assert_eq!(String::from_utf8(buf).expect("utf8"), "\nName: ok\n");
    }
}
