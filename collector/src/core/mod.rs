//! Deterministic, pure logic shared by the collector.
//!
//! Core modules must be free of I/O side effects. Validators, schemas and
//! records operate on in-memory data and return deterministic outputs
//! suitable for tests.

pub mod record;
pub mod schema;
pub mod validator;
