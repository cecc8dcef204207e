use std::io::IsTerminal;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

/// Prepares the process for play on `out`.
///
/// Returns `None` without touching the filesystem when `out` is not a
/// terminal; otherwise initializes logging and returns its guard, which must
/// outlive the game.
pub fn attach<T: IsTerminal>(config: &Config, out: &T) -> Result<Option<WorkerGuard>> {
    if !out.is_terminal() {
        return Ok(None);
    }

    setup_logging(config).map(Some)
}

/// File-only logging: the screen belongs to the game.
fn setup_logging(config: &Config) -> Result<WorkerGuard> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Error creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "snake.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(seed = ?config.seed, log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs::File;

    #[test]
    fn test_no_terminal_is_silent_noop() {
        let scratch = std::env::temp_dir().join(format!("snake-attach-{}", std::process::id()));
        let out_path = scratch.with_extension("out");
        let out = File::create(&out_path).unwrap();

        let log_dir = scratch.join("logs");
        let config = Config::parse_from(["snake", "--log-dir", log_dir.to_str().unwrap()]);

        let attached = attach(&config, &out).unwrap();

        assert!(attached.is_none());
        assert!(!log_dir.exists());
        std::fs::remove_file(&out_path).unwrap();
    }

    #[test]
    fn test_no_terminal_ignores_unusable_log_dir() {
        let out_path = std::env::temp_dir().join(format!("snake-attach-{}.bad", std::process::id()));
        let out = File::create(&out_path).unwrap();
        let config = Config::parse_from(["snake", "--log-dir", "/proc/snake-nope"]);

        assert!(attach(&config, &out).unwrap().is_none());
        std::fs::remove_file(&out_path).unwrap();
    }
}
