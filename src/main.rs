//! Flow test harness entry point
//!
//! Reads `test_cases.txt` from the current directory, runs every test case,
//! and exits non-zero if any case failed or the file could not be read.
//! There is no CLI surface: the file name is fixed.

use std::path::Path;

use flow_harness::common::logging;
use flow_harness::harness;

/// Fixed input file name; the harness takes no arguments.
const TEST_CASES_FILE: &str = "test_cases.txt";

#[tokio::main]
async fn main() {
    logging::init();

    let cases = match harness::parse_file(Path::new(TEST_CASES_FILE)) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let summary = harness::run_tests(&cases).await;

    if !summary.all_passed() {
        std::process::exit(1);
    }
}
