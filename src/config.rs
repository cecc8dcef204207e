use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "snake")]
#[command(version, about = "Wrap-around snake on a 20x20 board")]
pub struct Config {
    /// Seed for food and head placement (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for snake.log; filter with RUST_LOG
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}

fn default_log_dir() -> PathBuf {
    if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache).join("snake").join("logs");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".cache").join("snake").join("logs");
    }

    std::env::temp_dir().join("snake").join("logs")
}
