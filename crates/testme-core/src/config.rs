use std::path::{Path, PathBuf};

use testme_git::DEFAULT_COMMIT;

/// Directory at the repository root holding the runner convention
pub const CONFIG_DIR_NAME: &str = ".testme";

/// Executable inside [`CONFIG_DIR_NAME`] that runs a single test file
pub const RUNNER_FILE_NAME: &str = "test_runner";

/// Settings for one run, fixed at startup
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository top-level directory (empty when git reported none)
    pub repo_root: PathBuf,
    /// Directory changed paths are resolved against
    pub working_dir: PathBuf,
    /// Commit whose changed files are inspected
    pub commit: String,
    /// Echo the runner's stdout
    pub print_stdout: bool,
    /// Echo the runner's stderr
    pub print_stderr: bool,
}

impl RunConfig {
    pub fn new(repo_root: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            repo_root,
            working_dir,
            commit: DEFAULT_COMMIT.to_string(),
            print_stdout: false,
            print_stderr: false,
        }
    }

    pub fn with_commit(mut self, commit: String) -> Self {
        self.commit = commit;
        self
    }

    pub fn with_print_stdout(mut self, enabled: bool) -> Self {
        self.print_stdout = enabled;
        self
    }

    pub fn with_print_stderr(mut self, enabled: bool) -> Self {
        self.print_stderr = enabled;
        self
    }

    pub fn testme_dir(&self) -> PathBuf {
        self.repo_root.join(CONFIG_DIR_NAME)
    }

    pub fn runner_path(&self) -> PathBuf {
        self.testme_dir().join(RUNNER_FILE_NAME)
    }

    /// Root used in messages; falls back to the working directory when git found none
    pub fn display_root(&self) -> &Path {
        if self.repo_root.as_os_str().is_empty() {
            &self.working_dir
        } else {
            &self.repo_root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new(PathBuf::from("/repo"), PathBuf::from("/repo"));

        assert_eq!(config.commit, "HEAD");
        assert!(!config.print_stdout);
        assert!(!config.print_stderr);
        assert_eq!(config.testme_dir(), PathBuf::from("/repo/.testme"));
        assert_eq!(config.runner_path(), PathBuf::from("/repo/.testme/test_runner"));
    }

    #[test]
    fn test_display_root_without_repository() {
        let config = RunConfig::new(PathBuf::new(), PathBuf::from("/tmp/work"));

        assert_eq!(config.display_root(), Path::new("/tmp/work"));
    }
}
