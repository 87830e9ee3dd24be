use tracing::debug;

use crate::{GitCli, GitError};

/// Commit inspected when none is given
pub const DEFAULT_COMMIT: &str = "HEAD";

impl GitCli<'_> {
    /// Repository-relative paths touched by `commit`, in git's order.
    ///
    /// Paths come back verbatim (no C-style quoting). Duplicates and blank
    /// entries are passed through untouched.
    pub fn changed_files(&self, commit: &str) -> Result<Vec<String>, GitError> {
        // Anything starting with `-` would be read by git as an option
        if commit.is_empty() || commit.starts_with('-') {
            return Err(GitError::InvalidRevision(commit.to_string()));
        }

        let output = self.git(&["diff-tree", "-z", "--root", "--name-only", "-r", commit])?;
        let files = parse_diff_tree_output(&output.stdout);

        debug!(commit, files = files.len(), "Listed changed files");

        Ok(files)
    }
}

/// Split NUL-terminated `git diff-tree -z` output into paths, dropping the
/// leading commit id record.
///
/// Empty output yields an empty list.
pub fn parse_diff_tree_output(stdout: &str) -> Vec<String> {
    if stdout.is_empty() {
        return Vec::new();
    }

    let mut records = stdout.split('\0');
    let mut files = Vec::new();

    // Older gits end the commit id with a newline even under `-z`
    if let Some((_, first_path)) = records.next().and_then(|id| id.split_once('\n')) {
        if !first_path.is_empty() {
            files.push(first_path.to_string());
        }
    }

    files.extend(records.map(String::from));
    files
}
