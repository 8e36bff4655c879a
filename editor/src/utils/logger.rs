//! Logging Infrastructure
//!
//! Logs go to stderr (stdout carries the CLI's JSON output) or, when a log
//! directory exists, to a daily rolling file.

use bakup_shared::{AppError, AppResult};
use std::path::Path;

/// Initialize the logger at `info` level on stderr
pub fn init_logger() -> AppResult<()> {
    init_logger_with_file(None, None)
}

/// Initialize the logger with optional file output
///
/// An unknown level name falls back to `info`. A missing `log_dir` falls back
/// to stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) -> AppResult<()> {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && dir.is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "bakup-editor");
        return subscriber
            .with_ansi(false)
            .with_writer(file_appender)
            .try_init()
            .map_err(|e| AppError::internal(format!("logger already set: {e}")));
    }

    subscriber
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::internal(format!("logger already set: {e}")))
}
