use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::debug;

use crate::output::NO_EXIT_CODE;
use crate::{CommandRunner, ProcessError, ProcessOutput};

/// Spawns real child processes and waits for them
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl ProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessSpawner {
    fn run(
        &self,
        program: &Path,
        args: &[&OsStr],
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput, ProcessError> {
        let start = Instant::now();

        debug!(
            program = %program.display(),
            args = ?args,
            working_dir = ?working_dir,
            "Spawning process"
        );

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null()); // Non-interactive

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        // `output` drains both pipes while waiting, so a chatty child cannot block on a full pipe
        let output = cmd.output()?;
        let duration = start.elapsed();
        let exit_code = output.status.code().unwrap_or(NO_EXIT_CODE);

        debug!(
            exit_code,
            duration_ms = duration.as_millis(),
            "Process completed"
        );

        Ok(ProcessOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
            duration,
        ))
    }
}
