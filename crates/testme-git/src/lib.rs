//! # testme-git
//!
//! Git operations for testme.
//!
//! The `git` binary is treated as a black-box collaborator: every query is a
//! subprocess invocation through [`testme_process::CommandRunner`], and only
//! its stdout is interpreted.
//!
//! ## Key Types
//!
//! - [`GitCli`] - Runs git queries against a working directory
//! - [`GitError`] - Failure to launch git at all
//!
//! ## Queries
//!
//! - [`GitCli::toplevel`] - `git rev-parse --show-toplevel`
//! - [`GitCli::changed_files`] - `git diff-tree --root --name-only -r <commit>`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use testme_git::{GitCli, DEFAULT_COMMIT};
//! use testme_process::ProcessSpawner;
//!
//! let spawner = ProcessSpawner::new();
//! let git = GitCli::new(&spawner, std::env::current_dir()?);
//!
//! let root = git.toplevel()?;
//! let files = git.changed_files(DEFAULT_COMMIT)?;
//! ```

mod diff;
mod repo;

pub use diff::{parse_diff_tree_output, DEFAULT_COMMIT};
pub use repo::{GitCli, GitError};
