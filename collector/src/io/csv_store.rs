//! Persist collected records as a flat `.csv` file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::record::Record;

const CSV_SUFFIX: &str = ".csv";

/// Append `.csv` unless the name already ends with it (any case).
pub fn normalize_file_name(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(CSV_SUFFIX) {
        return name.to_string();
    }
    format!("{name}{CSV_SUFFIX}")
}

/// One comma-joined line per record, each terminated by `\n`.
pub fn render_records(records: &[Record]) -> String {
    let mut buf = String::new();
    for record in records {
        buf.push_str(&record.to_csv_line());
        buf.push('\n');
    }
    buf
}

/// Write `records` to `dir/<file_name>.csv`, replacing any existing file.
///
/// Creates `dir` (and parents) when missing. Returns the written path.
pub fn save_records(dir: &Path, file_name: &str, records: &[Record]) -> Result<PathBuf> {
    let path = dir.join(normalize_file_name(file_name));
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
        debug!(dir = %dir.display(), "created output directory");
    }
    write_atomic(&path, &render_records(records))?;
    debug!(path = %path.display(), records = records.len(), "saved records");
    Ok(path)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("output path missing file name {}", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("replace {}", path.display()));
    }
    Ok(())
}
