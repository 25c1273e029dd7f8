//! Deterministic, pure patch logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests.

pub mod diff;
pub mod error;
pub mod insert;
pub mod occurrences;
pub mod replace;
pub mod types;
