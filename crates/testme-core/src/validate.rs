use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::RunConfig;

/// A missing piece of the `.testme/test_runner` convention
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Could not find .testme folder in {}", .repo_root.display())]
    MissingConfigDir { repo_root: PathBuf },

    #[error("Could not find test_runner file in {}", .testme_dir.display())]
    MissingRunner { testme_dir: PathBuf },

    #[error("Test runner {} is not executable", .runner.display())]
    RunnerNotExecutable { runner: PathBuf },
}

/// Check the runner convention, stopping at the first problem
pub fn validate(config: &RunConfig) -> Result<(), ValidationError> {
    let testme_dir = config.testme_dir();
    if config.repo_root.as_os_str().is_empty() || !testme_dir.is_dir() {
        return Err(ValidationError::MissingConfigDir {
            repo_root: config.display_root().to_path_buf(),
        });
    }

    let runner = config.runner_path();
    if !runner.exists() || runner.is_dir() {
        return Err(ValidationError::MissingRunner { testme_dir });
    }

    if !is_executable(&runner) {
        return Err(ValidationError::RunnerNotExecutable { runner });
    }

    debug!(runner = %runner.display(), "Project validated");
    Ok(())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
