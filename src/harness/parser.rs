//! Test-case file parsing
//!
//! The input file is a sequence of blocks, each opened by a `TEST-<N>`
//! tag followed by `TEST-BEGIN` and closed by `TEST-END`:
//!
//! ```text
//! TEST-1
//! TEST-BEGIN
//! COMMAND: echo hi
//! FLOW COMMAND: echo hello
//! EXPECTED OUTPUT: hello
//! TEST-END
//! ```
//!
//! Blocks missing any of the three fields are dropped silently; text before
//! the first marker is ignored.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::common::{Error, Result};

/// One parsed test case
///
/// `shell_command` is a reference command; it is executed for parity with the
/// original harness but its output does not take part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Reference shell command
    pub shell_command: String,
    /// Command under test
    pub flow_command: String,
    /// Expected trimmed stdout of the flow command
    pub expected_output: String,
}

/// Separator between blocks: the literal tag `TEST-<digits>` followed by
/// `TEST-BEGIN`. The separator text itself is discarded.
static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TEST-\d+\s*TEST-BEGIN").expect("valid separator pattern"));

/// The `COMMAND:` label is anchored at start-of-line so the `COMMAND:`
/// embedded in `FLOW COMMAND:` can never satisfy it, no matter which field
/// comes first in the block. The capture runs to the end of the segment.
static SHELL_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^COMMAND:\s*(.*)").expect("valid field pattern"));

static FLOW_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)FLOW COMMAND:\s*(.*)").expect("valid field pattern"));

/// Expected output runs up to (but not including) the next `TEST-END`.
static EXPECTED_OUTPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)EXPECTED OUTPUT:\s*(.*?)\s*TEST-END").expect("valid field pattern")
});

/// Read a test-case file and parse it into an ordered sequence of cases.
///
/// An unreadable file is fatal: no partial results are produced.
pub fn parse_file(path: &Path) -> Result<Vec<TestCase>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
    Ok(parse_content(&content))
}

/// Parse test-case blocks out of file content.
///
/// Deterministic: the same content always yields the same sequence, in
/// source order.
pub fn parse_content(content: &str) -> Vec<TestCase> {
    let mut cases = Vec::new();

    for segment in BLOCK_SEPARATOR.split(content) {
        // Segments without the flow command marker (e.g. preamble before the
        // first block) are not test cases.
        if !segment.contains("FLOW COMMAND:") {
            continue;
        }

        let shell_command = SHELL_COMMAND.captures(segment);
        let flow_command = FLOW_COMMAND.captures(segment);
        let expected_output = EXPECTED_OUTPUT.captures(segment);

        match (shell_command, flow_command, expected_output) {
            (Some(shell), Some(flow), Some(expected)) => {
                let case = TestCase {
                    shell_command: shell[1].trim().to_string(),
                    flow_command: flow[1].trim().to_string(),
                    expected_output: expected[1].trim().to_string(),
                };
                // All three fields must be non-empty for the block to count.
                if case.shell_command.is_empty()
                    || case.flow_command.is_empty()
                    || case.expected_output.is_empty()
                {
                    tracing::debug!("Skipping block with empty fields");
                    continue;
                }
                cases.push(case);
            }
            _ => {
                tracing::debug!("Skipping block with missing fields");
            }
        }
    }

    tracing::debug!(count = cases.len(), "Parsed test cases");
    cases
}
