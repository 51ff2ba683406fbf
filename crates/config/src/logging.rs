//! Logging configuration.
//!
//! Only the settings live here; the binary owns the subscriber.

use serde::{Deserialize, Serialize};

/// Default filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Multi-line, human-oriented output.
    Pretty,
    /// Single-line output.
    #[default]
    Compact,
    /// Newline-delimited JSON objects.
    Json,
}

/// Logging settings.
///
/// `level` is a filter directive such as `"debug"` or
/// `"fast_kanban_engine=trace,info"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive for the log subscriber.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}
