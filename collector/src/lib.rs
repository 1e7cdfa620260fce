//! Guided record collection with validated console input.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validators, schemas, records).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (console, config, CSV files).
//!   Behind narrow traits so tests can script them.
//!
//! Orchestration modules ([`prompt`], [`session`], [`collect`]) coordinate
//! core logic with I/O to implement the `collector` command.

pub mod collect;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod prompt;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
