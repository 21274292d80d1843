//! File logging for kman.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to a daily rolling file under the
//! user cache directory (`<cache>/kman/logs/kman.log.<date>`) at `kman=info`.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "kman=info";

/// Keeps the background writer alive. Buffered lines are flushed when this is dropped,
/// so hold it until the process is about to exit.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    let dir = base.join("kman").join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Installs the global subscriber. Returns `None` (and logs nothing) if no log directory
/// can be created or a subscriber is already installed.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("kman").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "kman.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
