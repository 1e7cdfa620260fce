//! I/O helpers for collector commands.

pub mod config;
pub mod console;
pub mod csv_store;
