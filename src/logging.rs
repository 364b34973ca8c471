//! Logging setup
//!
//! Stdout plus an append-only log file, filtered by `RUST_LOG` (default
//! `info`), with local-time timestamps.

use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

/// Format timestamps using the system's local time via chrono
struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Default log directory (~/.okey-ai/logs)
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".okey-ai").join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Install the global subscriber. Falls back to stdout only if the log
/// file cannot be opened. Calling it twice is harmless.
pub fn init_logging(log_dir: &Path) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    let _ = std::fs::create_dir_all(log_dir);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("okey-ai.log"));

    let result = match log_file {
        Ok(file) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_timer(LocalTimer)
                .with_ansi(false);
            let stdout_layer = tracing_subscriber::fmt::layer().with_timer(LocalTimer);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
        }
        Err(_) => tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().with_timer(LocalTimer))
            .try_init(),
    };

    if result.is_ok() {
        tracing::info!("Logging to {}", log_dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_creates_log_file() {
        let dir = TempDir::new().unwrap();
        init_logging(dir.path());
        init_logging(dir.path());
        assert!(dir.path().join("okey-ai.log").exists());
    }
}
