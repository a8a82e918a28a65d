//! Test runner implementation
//!
//! Runs each test case through the host shell, one at a time, and streams a
//! human-readable report to stdout. A failing or even missing command never
//! aborts the run; its error text simply becomes the output that gets
//! compared.

use std::process::Stdio;

use colored::Colorize;
use tokio::process::Command;

use super::parser::TestCase;

/// Width of the separator line printed after each test's report
const SEPARATOR_WIDTH: usize = 40;

/// Pass/fail tally for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// True if no test case failed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run a command string through the host shell and return its trimmed stdout.
///
/// stdout and stderr are captured separately; only stdout takes part in the
/// result. A non-zero exit is not an error. If the shell cannot be spawned at
/// all, the error's display text stands in for the output so the caller's
/// comparison can still proceed.
pub async fn run_command(command: &str) -> String {
    tracing::debug!(command, "Spawning shell command");

    #[cfg(unix)]
    let mut cmd = {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    };

    #[cfg(windows)]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    };

    match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim().to_string(),
        Err(e) => e.to_string(),
    }
}

/// Run every test case in order, numbered from 1, printing the report as it
/// goes. Each subprocess is awaited to completion before the next starts.
pub async fn run_tests(cases: &[TestCase]) -> RunSummary {
    let mut summary = RunSummary::default();

    for (idx, case) in cases.iter().enumerate() {
        let test_num = idx + 1;
        println!("Running TEST-{}...", test_num);

        // The reference command is executed for parity with the original
        // harness; its output is not part of the comparison.
        let _shell_output = run_command(&case.shell_command).await;
        let flow_output = run_command(&case.flow_command).await;

        if flow_output == case.expected_output {
            println!("TEST-{} {}", test_num, "PASSED".green());
            summary.passed += 1;
        } else {
            println!("TEST-{} {}", test_num, "FAILED".red());
            println!("Expected Output:\n{}", case.expected_output);
            println!("Actual Output:\n{}", flow_output);
            summary.failed += 1;
        }
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(flow_command: &str, expected_output: &str) -> TestCase {
        TestCase {
            shell_command: "true".to_string(),
            flow_command: flow_command.to_string(),
            expected_output: expected_output.to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_command_trims_stdout() {
        assert_eq!(run_command("echo hello").await, "hello");
        assert_eq!(run_command("printf '  spaced  \\n\\n'").await, "spaced");
    }

    #[tokio::test]
    async fn test_run_command_multiline_output() {
        assert_eq!(run_command("printf 'a\\nb\\n'").await, "a\nb");
    }

    #[tokio::test]
    async fn test_run_command_nonzero_exit_keeps_stdout() {
        assert_eq!(run_command("echo partial; exit 3").await, "partial");
    }

    #[tokio::test]
    async fn test_run_command_stderr_not_mixed_in() {
        assert_eq!(run_command("echo out; echo err >&2").await, "out");
    }

    #[tokio::test]
    async fn test_run_command_missing_program_yields_empty_stdout() {
        // The shell itself spawns fine; the unknown program only produces
        // stderr noise, so the comparable output is empty.
        assert_eq!(run_command("definitely-not-a-real-command-xyz").await, "");
    }

    #[tokio::test]
    async fn test_run_tests_counts_pass_and_fail() {
        let cases = vec![
            case("echo hello", "hello"),
            case("echo hello", "world"),
            case("printf 'a\\nb\\n'", "a\nb"),
        ];
        let summary = run_tests(&cases).await;
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[tokio::test]
    async fn test_run_tests_empty_sequence() {
        let summary = run_tests(&[]).await;
        assert_eq!(summary, RunSummary::default());
        assert!(summary.all_passed());
    }

    #[tokio::test]
    async fn test_single_character_difference_fails() {
        let summary = run_tests(&[case("echo hello", "hellp")]).await;
        assert_eq!(summary.failed, 1);
    }
}
