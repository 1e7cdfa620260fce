//! Choosing the file to inspect.

use std::path::{Path, PathBuf};

use collector::io::console::{InputSource, OutputSink};
use collector::prompt::{PromptError, prompt_text};

pub const PATH_PROMPT: &str = "Enter the path of a text file to inspect";

/// Directory the user browses from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartDir {
    pub path: PathBuf,
    /// Set when `src/` was missing and the working directory is used instead.
    pub warning: Option<String>,
}

/// Prefer `<cwd>/src`, falling back to `cwd` itself.
pub fn resolve_start_dir(cwd: &Path) -> StartDir {
    let src = cwd.join("src");
    if src.is_dir() {
        return StartDir {
            path: src,
            warning: None,
        };
    }
    StartDir {
        path: cwd.to_path_buf(),
        warning: Some(format!(
            "Warning: 'src' directory not found at {}. Using {} instead.",
            src.display(),
            cwd.display()
        )),
    }
}

/// Resolve a user-entered path against the start directory.
pub fn resolve_choice(start: &Path, raw: &str) -> PathBuf {
    let chosen = Path::new(raw);
    if chosen.is_absolute() {
        chosen.to_path_buf()
    } else {
        start.join(chosen)
    }
}

/// Ask for a file path; `None` when the user closes input instead.
pub fn choose_file(
    start: &StartDir,
    input: &mut impl InputSource,
    output: &mut impl OutputSink,
) -> Result<Option<PathBuf>, PromptError> {
    if let Some(warning) = &start.warning {
        output.write_line(warning);
    }
    output.write_line(&format!("Browsing from: {}", start.path.display()));
    match prompt_text(PATH_PROMPT, input, output) {
        Ok(raw) => Ok(Some(resolve_choice(&start.path, &raw))),
        Err(PromptError::InputExhausted { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
