//! Stream a text file line by line, echoing it and counting as we go.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use collector::io::console::OutputSink;

/// Aggregate counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines: u64,
    pub words: u64,
    /// Characters excluding line terminators.
    pub chars: u64,
}

impl FileStats {
    /// Fold one line (without its terminator) into the counts.
    pub fn add_line(&mut self, line: &str) {
        self.lines += 1;
        self.chars += line.chars().count() as u64;
        self.words += line.split_whitespace().count() as u64;
    }
}

/// Lazy line iterator ending lines at `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are stripped. A terminator at end of input does not start an
/// extra empty line.
pub struct TextLines<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn fill(&mut self) -> io::Result<bool> {
        let mut chunk = Vec::new();
        if self.reader.read_until(b'\n', &mut chunk)? == 0 {
            return Ok(false);
        }
        let newline = chunk.last() == Some(&b'\n');
        if newline {
            chunk.pop();
            if chunk.last() == Some(&b'\r') {
                chunk.pop();
            }
        }
        let mut pieces: Vec<Vec<u8>> = chunk
            .split(|b| *b == b'\r')
            .map(<[u8]>::to_vec)
            .collect();
        // A lone `\r` right before end of input terminates the last line.
        if !newline && chunk.last() == Some(&b'\r') {
            pieces.pop();
        }
        self.pending.extend(pieces);
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
        let bytes = self.pending.pop_front()?;
        Some(
            String::from_utf8(bytes)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)),
        )
    }
}

/// Echo every line of `reader` to `output` and return the counts.
///
/// Lines are pulled lazily; the reader is consumed and cannot be rewound.
pub fn scan_lines(reader: impl BufRead, output: &mut impl OutputSink) -> Result<FileStats> {
    let mut stats = FileStats::default();
    for (index, line) in TextLines::new(reader).enumerate() {
        let line = line.with_context(|| format!("read line {}", index + 1))?;
        output.write_line(&line);
        stats.add_line(&line);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use collector::test_support::RecordingOutput;

    #[test]
    fn counts_lines_words_and_chars() {
        let text = "hello world\n  spaced   out  \n\nlast";
        let mut output = RecordingOutput::new();
        let stats = scan_lines(text.as_bytes(), &mut output).expect("scan");
        assert_eq!(
            stats,
            FileStats {
                lines: 4,
                words: 5,
                chars: 11 + 16 + 0 + 4,
            }
        );
        assert_eq!(output.lines, vec!["hello world", "  spaced   out  ", "", "last"]);
    }

    #[test]
    fn crlf_terminators_are_not_counted() {
        let mut output = RecordingOutput::new();
        let stats = scan_lines("ab\r\ncd\r\n".as_bytes(), &mut output).expect("scan");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.chars, 4);
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let mut output = RecordingOutput::new();
        let stats = scan_lines("ab\rcd\r".as_bytes(), &mut output).expect("scan");
        assert_eq!(
            stats,
            FileStats {
                lines: 2,
                words: 2,
                chars: 4,
            }
        );
        assert_eq!(output.lines, vec!["ab", "cd"]);
    }

    #[test]
    fn mixed_terminators_split_like_readers_do() {
        let lines: Vec<String> = TextLines::new("a\r\r\nb\nc\rd".as_bytes())
            .collect::<io::Result<_>>()
            .expect("lines");
        assert_eq!(lines, vec!["a", "", "b", "c", "d"]);
    }

    #[test]
    fn empty_input_has_zero_counts() {
        let mut output = RecordingOutput::new();
        let stats = scan_lines("".as_bytes(), &mut output).expect("scan");
        assert_eq!(stats, FileStats::default());
        assert!(output.lines.is_empty());
    }

    #[test]
    fn chars_are_counted_not_bytes() {
        let mut stats = FileStats::default();
        stats.add_line("héllo wörld");
        assert_eq!(stats.chars, 11);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let mut output = RecordingOutput::new();
        let err = scan_lines(bytes, &mut output).expect_err("invalid utf8");
        assert!(err.to_string().contains("line 2"));
    }
}
