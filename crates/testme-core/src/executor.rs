use std::io::Write;
use std::time::Duration;
use tracing::{debug, warn};

use testme_logging::{ReportEvent, Reporter, StreamType};
use testme_process::CommandRunner;

use crate::{RunConfig, TestCandidate, TestOutcome, TestResult};

/// Runs single test files through the repository's test runner
pub struct TestExecutor<'a, W: Write> {
    config: &'a RunConfig,
    runner: &'a dyn CommandRunner,
    reporter: &'a Reporter<W>,
}

impl<'a, W: Write> TestExecutor<'a, W> {
    pub fn new(
        config: &'a RunConfig,
        runner: &'a dyn CommandRunner,
        reporter: &'a Reporter<W>,
    ) -> Self {
        Self {
            config,
            runner,
            reporter,
        }
    }

    /// Invoke `<test_runner> <absolute path>` and classify it by exit code alone
    pub fn run_one(&self, candidate: &TestCandidate) -> TestResult {
        self.reporter.emit(&ReportEvent::TestStarted {
            path: candidate.relative.clone(),
        });

        let runner_path = self.config.runner_path();
        let args = [candidate.absolute.as_os_str()];

        // The runner inherits testme's own working directory
        let output = match self.runner.run(&runner_path, &args, None) {
            Ok(output) => output,
            Err(e) => {
                warn!(test = %candidate.relative, error = %e, "Test runner failed to launch");
                self.reporter.emit(&ReportEvent::LaunchFailed {
                    path: candidate.relative.clone(),
                    error: e.to_string(),
                });
                return TestResult {
                    candidate: candidate.clone(),
                    outcome: TestOutcome::LaunchFailed {
                        error: e.to_string(),
                    },
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: None,
                    duration: Duration::ZERO,
                };
            }
        };

        let stdout = output.stdout.trim().to_string();
        let stderr = output.stderr.trim().to_string();

        if self.config.print_stdout && !stdout.is_empty() {
            self.reporter.emit(&ReportEvent::StreamEcho {
                stream: StreamType::Stdout,
                text: stdout.clone(),
            });
        }
        if self.config.print_stderr && !stderr.is_empty() {
            self.reporter.emit(&ReportEvent::StreamEcho {
                stream: StreamType::Stderr,
                text: stderr.clone(),
            });
        }

        let outcome = if output.success() {
            TestOutcome::Passed
        } else {
            self.reporter.emit(&ReportEvent::TestFailed {
                path: candidate.relative.clone(),
                exit_code: output.exit_code,
            });
            TestOutcome::Failed {
                exit_code: output.exit_code,
            }
        };

        debug!(
            test = %candidate.relative,
            exit_code = output.exit_code,
            duration_ms = output.duration.as_millis(),
            "Test finished"
        );

        TestResult {
            candidate: candidate.clone(),
            outcome,
            stdout,
            stderr,
            exit_code: Some(output.exit_code),
            duration: output.duration,
        }
    }
}
