use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable carries a default, so the service starts with no
/// environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub store_lock_timeout_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            data_dir: PathBuf::from(
                std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            ),
            store_lock_timeout_ms: std::env::var("STORE_LOCK_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u64>()
                .context("STORE_LOCK_TIMEOUT_MS must be a number of milliseconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Bounded wait applied to every store lock acquisition.
    pub fn store_lock_timeout(&self) -> Duration {
        Duration::from_millis(self.store_lock_timeout_ms)
    }
}
