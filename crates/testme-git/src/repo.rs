use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use testme_process::{CommandRunner, ProcessError, ProcessOutput};

/// Resolved through `PATH`
const GIT_BINARY: &str = "git";

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Could not run git: {0}")]
    Launch(#[from] ProcessError),

    #[error("Invalid revision: {0:?}")]
    InvalidRevision(String),
}

/// Runs git queries from a fixed working directory
pub struct GitCli<'a> {
    runner: &'a dyn CommandRunner,
    working_dir: PathBuf,
}

impl<'a> GitCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, working_dir: PathBuf) -> Self {
        Self {
            runner,
            working_dir,
        }
    }

    /// Absolute path of the repository's top-level working directory.
    ///
    /// Returns `Ok(None)` when git prints nothing, e.g. outside a repository.
    pub fn toplevel(&self) -> Result<Option<PathBuf>, GitError> {
        let output = self.git(&["rev-parse", "--show-toplevel"])?;

        let root = output.first_line();
        if root.is_empty() {
            return Ok(None);
        }

        debug!(root, "Located repository root");
        Ok(Some(PathBuf::from(root)))
    }

    pub(crate) fn git(&self, args: &[&str]) -> Result<ProcessOutput, GitError> {
        let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
        let output = self
            .runner
            .run(Path::new(GIT_BINARY), &args, Some(self.working_dir.as_path()))?;

        if !output.success() {
            warn!(
                args = ?args,
                exit_code = output.exit_code,
                stderr = output.stderr.trim(),
                "git exited with an error"
            );
        }

        Ok(output)
    }
}
