//! End-to-end tests for the memroll binary
//!
//! Each test runs the compiled binary against a temporary project root with
//! a fixed reference date, then inspects stdout, the exit status and the
//! files left behind.

pub mod cli;
pub mod policy;

pub use fixtures::*;
pub use helpers::*;
