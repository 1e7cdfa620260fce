//! Stable exit codes for the collector and inspector binaries.

/// Command succeeded.
pub const OK: i32 = 0;
/// Config, save, or read failure.
pub const FAILED: i32 = 1;
/// Input ended before the interactive session finished.
pub const INPUT_CLOSED: i32 = 2;
