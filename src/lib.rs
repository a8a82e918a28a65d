//! Flow test harness
//!
//! Reads a `test_cases.txt` file describing shell-level test cases for the
//! `flow` tool, runs each case through the host shell, and reports pass/fail
//! on stdout.

pub mod common;
pub mod harness;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use harness::{parse_content, parse_file, run_tests, RunSummary, TestCase};
