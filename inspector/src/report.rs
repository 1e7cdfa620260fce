//! Summary report printed after a file has been scanned.

use std::path::Path;

use crate::scan::FileStats;

const RULE: &str = "---------------------------";

/// Render the summary block, one entry per output line.
pub fn summary_lines(path: &Path, full_path: &Path, stats: &FileStats) -> Vec<String> {
    let name = display_name(path);
    vec![
        String::new(),
        "--- File Summary Report ---".to_string(),
        format!("File Name: {name}"),
        format!("Full Path: {}", full_path.display()),
        format!("Number of Lines: {}", stats.lines),
        format!("Number of Words: {}", stats.words),
        format!("Number of Characters: {}", stats.chars),
        RULE.to_string(),
    ]
}

/// Final path component, or the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
