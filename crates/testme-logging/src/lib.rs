//! # testme-logging
//!
//! Console output for testme.
//!
//! Two channels are kept apart:
//!
//! - the human-facing report ([`Reporter`] rendering [`ReportEvent`]s with
//!   colors and glyphs), written to stdout
//! - diagnostics through `tracing`, written to stderr and set up by
//!   [`init_tracing`]
//!
//! ## Log Formats
//!
//! - `Pretty` - Human-readable diagnostics
//! - `Compact` - Minimal single-line diagnostics
//! - `JSON` - Structured JSON lines

mod events;

pub use events::{ReportEntry, ReportEvent, Reporter, StreamType};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostic output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Initialize tracing for the application. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .init();
        }
    }
}
