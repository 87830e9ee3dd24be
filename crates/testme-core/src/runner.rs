use std::io::Write;
use tracing::{info, warn};

use testme_git::GitCli;
use testme_logging::{ReportEvent, Reporter};
use testme_process::CommandRunner;

use crate::{
    select_candidates, validate, RunConfig, RunOutcome, TestCandidate, TestExecutor,
    ValidationError,
};

/// Orchestrates one testme run: validate, discover, execute, report
pub struct TestmeRunner<'a, W: Write> {
    config: &'a RunConfig,
    runner: &'a dyn CommandRunner,
    reporter: &'a Reporter<W>,
}

impl<'a, W: Write> TestmeRunner<'a, W> {
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

    /// Run every test touched by the configured commit.
    ///
    /// A validation failure is reported and returned before anything is executed.
    pub fn run(&self) -> Result<RunOutcome, ValidationError> {
        if let Err(e) = validate(self.config) {
            self.reporter.emit(&ReportEvent::Fatal {
                message: e.to_string(),
            });
            return Err(e);
        }

        let candidates = self.discover();
        if candidates.is_empty() {
            info!(commit = %self.config.commit, "No tests changed");
            return Ok(RunOutcome::default());
        }

        self.reporter.emit(&ReportEvent::Found {
            paths: candidates.iter().map(|c| c.relative.clone()).collect(),
        });

        self.reporter.emit(&ReportEvent::Executing);
        let executor = TestExecutor::new(self.config, self.runner, self.reporter);
        let results: Vec<_> = candidates.iter().map(|c| executor.run_one(c)).collect();
        let outcome = RunOutcome::new(results);

        self.reporter.emit(&ReportEvent::Report {
            entries: outcome.results.iter().map(|r| r.report_entry()).collect(),
        });

        info!(
            passed = outcome.passed_count(),
            failed = outcome.failed_count(),
            "Run finished"
        );

        Ok(outcome)
    }

    /// Test candidates from the commit that still exist on disk
    fn discover(&self) -> Vec<TestCandidate> {
        let git = GitCli::new(self.runner, self.config.working_dir.clone());
        let files = git
            .changed_files(&self.config.commit)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Could not list changed files");
                Vec::new()
            });

        let (present, missing): (Vec<_>, Vec<_>) =
            select_candidates(&files, &self.config.working_dir, &self.config.repo_root)
                .into_iter()
                .partition(|candidate| candidate.absolute.exists());

        // Tests deleted by the commit show up in the listing too
        for candidate in &missing {
            warn!(test = %candidate.relative, "Skipping test that no longer exists");
        }

        // Listed paths are repository-relative but resolved against the working directory
        if !missing.is_empty() && self.config.working_dir != self.config.repo_root {
            warn!(
                working_dir = %self.config.working_dir.display(),
                repo_root = %self.config.repo_root.display(),
                "Changed tests were not found from this directory; \
                 run testme from the repository root"
            );
        }

        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use testme_process::{ProcessError, ProcessOutput};

    /// Answers git with a fixed listing and records each invocation
    struct Listing {
        stdout: &'static str,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl CommandRunner for Listing {
        fn run(
            &self,
            program: &Path,
            _args: &[&OsStr],
            _working_dir: Option<&Path>,
        ) -> Result<ProcessOutput, ProcessError> {
            self.calls.borrow_mut().push(program.to_path_buf());
            Ok(ProcessOutput::new(
                self.stdout.to_string(),
                String::new(),
                0,
                Duration::ZERO,
            ))
        }
    }

    #[test]
    fn test_discover_from_subdirectory_finds_nothing() {
        let repo = tempfile::TempDir::new().unwrap();
        let sub = repo.path().join("src");
        std::fs::create_dir_all(repo.path().join("tests")).unwrap();
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(repo.path().join("tests/app_test.py"), "").unwrap();

        let config = RunConfig::new(repo.path().to_path_buf(), sub);
        let listing = Listing {
            stdout: "abc123\0tests/app_test.py\0",
            calls: RefCell::new(Vec::new()),
        };
        let reporter = Reporter::new(Vec::<u8>::new());
        let runner = TestmeRunner::new(&config, &listing, &reporter);

        assert!(runner.discover().is_empty());
        assert_eq!(listing.calls.borrow().len(), 1);
    }

    #[test]
    fn test_discover_from_root_keeps_existing_tests() {
        let repo = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(repo.path().join("tests")).unwrap();
        std::fs::write(repo.path().join("tests/app_test.py"), "").unwrap();

        let root = repo.path().to_path_buf();
        let config = RunConfig::new(root.clone(), root);
        let listing = Listing {
            stdout: "abc123\0tests/app_test.py\0tests/gone_test.py\0",
            calls: RefCell::new(Vec::new()),
        };
        let reporter = Reporter::new(Vec::<u8>::new());
        let runner = TestmeRunner::new(&config, &listing, &reporter);

        let found: Vec<_> = runner.discover().into_iter().map(|c| c.relative).collect();
        assert_eq!(found, vec!["tests/app_test.py"]);
    }
}
