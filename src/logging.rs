//! Logging setup.
//!
//! Filter directives come from `ACCOUNTING_REPORT_LOG`, for example
//! `ACCOUNTING_REPORT_LOG=debug` or `ACCOUNTING_REPORT_LOG=accounting_report=info,warn`.
//! Without it only warnings and errors show up. Everything goes to stderr so
//! stdout carries nothing but the report.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "ACCOUNTING_REPORT_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Call once, first thing in main.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        // No color codes in redirected logs.
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
