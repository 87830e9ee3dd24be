//! # testme-core
//!
//! Finds the tests touched by a commit and runs each one through the
//! repository's own test runner.
//!
//! ## Flow
//!
//! 1. [`validate`] checks the `.testme/test_runner` convention
//! 2. git lists the files changed by the target commit
//! 3. [`select_candidates`] keeps paths with a `test` or `tests` component
//! 4. [`TestExecutor`] invokes the runner once per candidate
//! 5. [`TestmeRunner`] prints the report and returns a [`RunOutcome`]
//!
//! Everything runs on the calling thread, one child process at a time.

mod config;
mod executor;
mod filter;
mod outcome;
mod runner;
mod validate;

pub use config::{RunConfig, CONFIG_DIR_NAME, RUNNER_FILE_NAME};
pub use executor::TestExecutor;
pub use filter::{is_test_path, resolve, select_candidates, TestCandidate};
pub use outcome::{RunOutcome, TestOutcome, TestResult};
pub use runner::TestmeRunner;
pub use validate::{validate, ValidationError};
