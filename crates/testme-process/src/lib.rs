//! # testme-process
//!
//! Blocking child-process invocation for testme.
//!
//! Both collaborators of testme (the `git` binary and the repository's test
//! runner) are driven through [`CommandRunner`]. The production implementation,
//! [`ProcessSpawner`], wraps `std::process::Command`; tests substitute scripted
//! fakes.
//!
//! ## Key Types
//!
//! - [`CommandRunner`] - Seam for running a program with an explicit argument vector
//! - [`ProcessSpawner`] - Real implementation backed by the OS
//! - [`ProcessOutput`] - Captured stdout, stderr, exit code and duration
//! - [`ProcessError`] - Launch failures (a non-zero exit is not an error)

mod output;
mod spawner;
mod traits;

pub use output::ProcessOutput;
pub use spawner::ProcessSpawner;
pub use traits::{CommandRunner, ProcessError};
