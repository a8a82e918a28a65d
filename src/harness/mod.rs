//! Test harness for the flow tool
//!
//! Parses delimited test-case blocks from a text file and runs each one
//! through the host shell, comparing the command-under-test's stdout
//! against the expected output.

mod parser;
mod runner;

pub use parser::{parse_content, parse_file, TestCase};
pub use runner::{run_command, run_tests, RunSummary};
