use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;

use testme_core::{RunConfig, TestmeRunner};
use testme_git::{GitCli, DEFAULT_COMMIT};
use testme_logging::{init_tracing, LogFormat, Reporter};
use testme_process::ProcessSpawner;

#[derive(Parser, Debug)]
#[command(
    name = "testme",
    about = "Re-run the tests touched by the latest commit",
    long_about = "Finds the files changed by a commit whose path has a `test` or `tests` \
                  directory and runs each one through <repo>/.testme/test_runner, which \
                  receives the absolute path of a single test file and exits 0 on success.\n\n\
                  Run it from the repository root: changed paths are resolved against the \
                  current directory, and the runner is started in that same directory.",
    version
)]
struct Cli {
    /// Commit whose changed files are inspected
    #[arg(
        long,
        env = "TESTME_COMMIT",
        default_value = DEFAULT_COMMIT,
        value_parser = parse_commit
    )]
    commit: String,

    /// Echo each test runner's stdout
    #[arg(long, env = "TESTME_PRINT_STDOUT")]
    print_stdout: bool,

    /// Echo each test runner's stderr
    #[arg(long, env = "TESTME_PRINT_STDERR")]
    print_stderr: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Compact => LogFormat::Compact,
            LogFormatChoice::Json => LogFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    init_tracing(level, cli.log_format.into());

    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let spawner = ProcessSpawner::new();

    let repo_root = locate_repo_root(&spawner, &working_dir);
    let config = RunConfig::new(repo_root, working_dir)
        .with_commit(cli.commit)
        .with_print_stdout(cli.print_stdout)
        .with_print_stderr(cli.print_stderr);

    let reporter = Reporter::stdout();
    let runner = TestmeRunner::new(&config, &spawner, &reporter);

    // Validation failures are already reported by the runner
    let exit_code = match runner.run() {
        Ok(outcome) => outcome.exit_code(),
        Err(_) => 1,
    };

    std::process::exit(exit_code);
}

/// Revisions are handed to git as a positional argument, so they may not look like options
fn parse_commit(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("commit must not be empty".to_string());
    }
    if value.starts_with('-') {
        return Err(format!("commit must not start with '-': {}", value));
    }
    Ok(value.to_string())
}

/// Repository root as reported by git, or an empty path (which fails validation)
fn locate_repo_root(spawner: &ProcessSpawner, working_dir: &std::path::Path) -> PathBuf {
    match GitCli::new(spawner, working_dir.to_path_buf()).toplevel() {
        Ok(Some(root)) => root,
        Ok(None) => {
            warn!(dir = %working_dir.display(), "Not inside a git repository");
            PathBuf::new()
        }
        Err(e) => {
            warn!(error = %e, "Could not locate repository root");
            PathBuf::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commit_accepts_revisions() {
        assert_eq!(parse_commit("HEAD~1"), Ok("HEAD~1".to_string()));
        assert_eq!(parse_commit("5884411f"), Ok("5884411f".to_string()));
    }

    #[test]
    fn test_parse_commit_rejects_options() {
        assert!(parse_commit("--output=/tmp/x").is_err());
        assert!(parse_commit("-p").is_err());
        assert!(parse_commit("").is_err());
    }

    #[test]
    fn test_cli_rejects_option_like_commit() {
        let result = Cli::try_parse_from(["testme", "--commit=--output=/tmp/x"]);
        assert!(result.is_err());
    }
}
