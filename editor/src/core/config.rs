use bakup_shared::{AppError, AppResult};
use std::path::PathBuf;
use std::time::Duration;

/// Editor configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | SUBMIT_DELAY_MS | 1500 | simulated backend latency |
/// | STRICT_VALIDATION | false | validate opening hours before submitting (`1`/`true`/`yes`/`on`) |
/// | HISTORY_LIMIT | 100 | undo steps kept by the session |
/// | ACTIONS_FILE | (unset) | JSON action script replayed by the CLI |
///
/// # Example
///
/// ```ignore
/// STRICT_VALIDATION=true SUBMIT_DELAY_MS=0 cargo run -p bakup-editor -- actions.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub submit_delay_ms: u64,
    pub strict_validation: bool,
    pub history_limit: usize,
    pub actions_file: Option<PathBuf>,
}

impl Config {
    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    ///
    /// Unparseable values fall back to their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|v| !v.is_empty()).map(PathBuf::from),
            submit_delay_ms: lookup("SUBMIT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
            strict_validation: lookup("STRICT_VALIDATION")
                .and_then(|v| parse_flag(&v).inspect_err(warn_ignored).ok())
                .unwrap_or(false),
            history_limit: lookup("HISTORY_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            actions_file: lookup("ACTIONS_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Boolean env value, case-insensitive. Empty means unset.
pub fn parse_flag(value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!("'{other}' is not a boolean"))
            .with_detail("value", value)),
    }
}

fn warn_ignored(err: &AppError) {
    tracing::warn!(error = %err, "Ignoring STRICT_VALIDATION");
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
