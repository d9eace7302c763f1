//! Tracing setup: env-filtered, file-only output.
//!
//! Stdout belongs to command output; diagnostics go to a daily-rolling log
//! file under `${BYLINE_HOME}/logs`.

use anyhow::{Context, Result};
use byline_core::config::{Config, paths};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// Filter precedence: `BYLINE_LOG` env var, then `log_filter` from config,
/// then `warn`. The returned guard must stay alive for the process duration
/// or buffered lines are dropped.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let directive = std::env::var("BYLINE_LOG")
        .ok()
        .or_else(|| config.log_filter.clone())
        .unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(directive).context("parse log filter")?;

    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create log directory {}", logs_dir.display()))?;
    let appender = tracing_appender::rolling::daily(&logs_dir, "byline.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
