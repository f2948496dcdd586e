use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Setup logging to stderr, plus an optional rotating file log.
///
/// Stdout carries the confirmation prompt and result lines, so console logs go
/// to stderr. `RUST_LOG` overrides the level chosen from `verbosity`.
///
/// # Arguments
/// * `verbosity` - Number of `-v` flags (0 = warn, 1 = info, 2+ = debug)
/// * `log_dir` - If set, also write a daily-rotated log file there
///
/// # Returns
/// The file writer's guard, which must be held until exit so buffered lines are flushed
pub fn setup_logging(verbosity: u8, log_dir: Option<&Utf8Path>) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter(verbosity))
            .with(console_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    // Create log directory if it doesn't exist
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }

    let file_appender = rolling::daily(log_dir, crate::APP_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(
        "Logging initialized: dir={}, verbosity={}",
        log_dir,
        verbosity
    );

    Ok(Some(guard))
}
