use std::ffi::OsStr;
use std::path::Path;
use thiserror::Error;

use crate::ProcessOutput;

/// Errors that can occur while launching a child process
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[from] std::io::Error),
}

/// Runs a program to completion and captures its output.
///
/// Implementations must block until the child exits and must report a
/// non-zero exit code through [`ProcessOutput::exit_code`], never as an error.
pub trait CommandRunner {
    fn run(
        &self,
        program: &Path,
        args: &[&OsStr],
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput, ProcessError>;
}
