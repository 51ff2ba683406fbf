//! Log subscriber setup.
//!
//! Logs always go to stderr; stdout carries only the rendered board.

use std::io;

use anyhow::Context;
use fast_kanban_config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Picks the filter directive: `-v` forces debug, `-vv` and beyond force
/// trace, otherwise the configured level applies.
pub fn filter_directive(config: &LogConfig, verbosity: u8) -> &str {
    match verbosity {
        0 => config.level.as_str(),
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter directive does not parse or a subscriber is
/// already installed.
pub fn init(config: &LogConfig, verbosity: u8) -> anyhow::Result<()> {
    let directive = filter_directive(config, verbosity);
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter {directive:?}"))?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().without_time().with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(io::stderr))
            .try_init(),
    }
    .context("failed to install log subscriber")
}
