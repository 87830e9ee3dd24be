use std::time::Duration;

use testme_logging::ReportEntry;

use crate::TestCandidate;

/// How a single runner invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    /// Runner exited non-zero
    Failed { exit_code: i32 },
    /// Runner could not be started at all
    LaunchFailed { error: String },
}

/// Result of running one candidate
#[derive(Debug, Clone)]
pub struct TestResult {
    pub candidate: TestCandidate,
    pub outcome: TestOutcome,
    /// Trimmed runner stdout
    pub stdout: String,
    /// Trimmed runner stderr
    pub stderr: String,
    /// Absent when the runner never started
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, TestOutcome::Passed)
    }

    pub fn report_entry(&self) -> ReportEntry {
        ReportEntry {
            path: self.candidate.relative.clone(),
            passed: self.passed(),
        }
    }
}

/// Results of a whole run, in execution order
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub results: Vec<TestResult>,
}

impl RunOutcome {
    pub fn new(results: Vec<TestResult>) -> Self {
        Self { results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// 0 when nothing ran or everything passed, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(path: &str, outcome: TestOutcome) -> TestResult {
        TestResult {
            candidate: TestCandidate {
                relative: path.to_string(),
                absolute: PathBuf::from("/repo").join(path),
            },
            outcome,
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_empty_run_exits_zero() {
        assert_eq!(RunOutcome::default().exit_code(), 0);
    }

    #[test]
    fn test_all_passed_exits_zero() {
        let outcome = RunOutcome::new(vec![
            result("tests/a.py", TestOutcome::Passed),
            result("tests/b.py", TestOutcome::Passed),
        ]);

        assert_eq!(outcome.passed_count(), 2);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_any_failure_exits_one() {
        let outcome = RunOutcome::new(vec![
            result("tests/a.py", TestOutcome::Passed),
            result("tests/b.py", TestOutcome::Failed { exit_code: 7 }),
        ]);

        assert_eq!(outcome.failed_count(), 1);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_launch_failure_counts_as_failure() {
        let outcome = RunOutcome::new(vec![result(
            "tests/a.py",
            TestOutcome::LaunchFailed {
                error: "No such file or directory".into(),
            },
        )]);

        assert!(!outcome.results[0].passed());
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_report_entry_uses_relative_path() {
        let entry = result("tests/a.py", TestOutcome::Passed).report_entry();

        assert_eq!(entry.path, "tests/a.py");
        assert!(entry.passed);
    }
}
