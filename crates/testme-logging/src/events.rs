use colored::Colorize;
use std::cell::RefCell;
use std::io::Write;

/// Captured output stream of the test runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamType {
    Stdout,
    Stderr,
}

/// One line of the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub path: String,
    pub passed: bool,
}

/// Everything testme prints for the user, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Validation failed; the run is about to abort
    Fatal { message: String },
    /// Test candidates picked from the commit
    Found { paths: Vec<String> },
    /// Start of the execution trace
    Executing,
    TestStarted { path: String },
    /// Echo of captured runner output (only when enabled)
    StreamEcho { stream: StreamType, text: String },
    TestFailed { path: String, exit_code: i32 },
    LaunchFailed { path: String, error: String },
    Report { entries: Vec<ReportEntry> },
}

/// Renders report events to a writer (stdout in production)
pub struct Reporter<W: Write = std::io::Stdout> {
    out: RefCell<W>,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    pub fn emit(&self, event: &ReportEvent) {
        let mut out = self.out.borrow_mut();
        match event {
            ReportEvent::Fatal { message } => {
                let _ = writeln!(out, "{}", format!("[ERROR] {}", message).red().bold());
            }
            ReportEvent::Found { paths } => {
                let _ = writeln!(out, "{}", "Found:".blue().italic());
                for path in paths {
                    let _ = writeln!(out, "📄 {}", path);
                }
            }
            ReportEvent::Executing => {
                let _ = writeln!(out, "{}", "Executing:".blue().italic());
            }
            ReportEvent::TestStarted { path } => {
                let _ = writeln!(out, "🔎 {}", path);
            }
            ReportEvent::StreamEcho { stream, text } => {
                let label = match stream {
                    StreamType::Stdout => "[stdout] ".green(),
                    StreamType::Stderr => "[stderr] ".yellow(),
                };
                let _ = writeln!(out, "{}{}", label, text);
            }
            ReportEvent::TestFailed { path, exit_code } => {
                let _ = writeln!(
                    out,
                    "{} test {} failed with error code {}",
                    "[ERROR]".red(),
                    path,
                    exit_code
                );
            }
            ReportEvent::LaunchFailed { path, error } => {
                let _ = writeln!(
                    out,
                    "{} could not launch test runner for {}: {}",
                    "[ERROR]".red(),
                    path,
                    error
                );
            }
            ReportEvent::Report { entries } => {
                let _ = writeln!(out, "{}", "Report:".blue().italic());
                for entry in entries {
                    if entry.passed {
                        let _ = writeln!(out, "✅ {}", entry.path.green());
                    } else {
                        let _ = writeln!(out, "❌ {}", entry.path.red());
                    }
                }
            }
        }
        let _ = out.flush();
    }
}
