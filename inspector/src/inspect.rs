//! Orchestration for the `inspector` command: open, echo, count, report.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use collector::io::console::OutputSink;
use tracing::{debug, info};

use crate::report::{display_name, summary_lines};
use crate::scan::{FileStats, scan_lines};

/// Echo `path` to `output` followed by its summary report.
pub fn inspect_file(path: &Path, output: &mut impl OutputSink) -> Result<FileStats> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(anyhow!(
                "Error: The selected file does not exist: {}",
                path.display()
            ));
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!(
                    "An I/O error occurred while reading the file {}",
                    path.display()
                )
            });
        }
    };
    debug!(path = %path.display(), "opened file");

    let name = display_name(path);
    output.write_line(&format!("--- Reading File: {name} ---"));
    let stats = scan_lines(BufReader::new(file), output).with_context(|| {
        format!(
            "An I/O error occurred while reading the file {}",
            path.display()
        )
    })?;
    output.write_line("");
    output.write_line("--- End of File Content ---");

    let full_path = std::path::absolute(path).unwrap_or_else(|_| PathBuf::from(path));
    for line in summary_lines(path, &full_path, &stats) {
        output.write_line(&line);
    }
    info!(
        path = %path.display(),
        lines = stats.lines,
        words = stats.words,
        chars = stats.chars,
        "file inspected"
    );
    Ok(stats)
}
