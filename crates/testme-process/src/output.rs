use std::time::Duration;

/// Exit code reported when the child was terminated without one (e.g. by a signal)
pub const NO_EXIT_CODE: i32 = -1;

/// Output captured from a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Full stdout, lossily decoded as UTF-8
    pub stdout: String,
    /// Full stderr, lossily decoded as UTF-8
    pub stderr: String,
    /// Exit code from the process
    pub exit_code: i32,
    /// Wall-clock time from spawn to exit
    pub duration: Duration,
}

impl ProcessOutput {
    pub fn new(stdout: String, stderr: String, exit_code: i32, duration: Duration) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
            duration,
        }
    }

    /// Check if the process exited successfully
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// First line of stdout with surrounding whitespace removed
    pub fn first_line(&self) -> &str {
        self.stdout.lines().next().unwrap_or("").trim()
    }
}
