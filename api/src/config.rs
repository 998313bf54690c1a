use std::env;

use anyhow::{anyhow, Context};
use chrono::Duration;

/// Which `PostRepository` implementation to wire up at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in_memory" => Ok(StorageBackend::Memory),
            _ => Err(format!(
                "Unknown storage backend: {}. Use: postgres, memory",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    /// Required when `storage` is `Postgres`
    pub database_url: Option<String>,
    pub port: u16,
    /// Origin allowed to call the API from a browser (the SPA dev server by default)
    pub cors_allowed_origin: String,
    /// Size of the `last_minute` feed window
    pub recent_window: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Postgres,
            database_url: None,
            port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            recent_window: Duration::seconds(60),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let storage: StorageBackend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value
                .parse::<StorageBackend>()
                .map_err(|e| anyhow!(e))?,
            Err(_) => defaults.storage,
        };

        let port: u16 = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", value))?,
            Err(_) => defaults.port,
        };

        let recent_window = match env::var("FEED_RECENT_WINDOW_SECS") {
            Ok(value) => parse_recent_window(&value)?,
            Err(_) => defaults.recent_window,
        };

        Ok(Self {
            storage,
            database_url: env::var("DATABASE_URL").ok(),
            port,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            recent_window,
        })
    }
}

/// Parse `FEED_RECENT_WINDOW_SECS`: a positive whole number of seconds that
/// chrono can represent as a `Duration`
fn parse_recent_window(value: &str) -> anyhow::Result<Duration> {
    let secs = value.parse::<i64>().with_context(|| {
        format!("FEED_RECENT_WINDOW_SECS must be an integer, got {:?}", value)
    })?;
    if secs <= 0 {
        return Err(anyhow!(
            "FEED_RECENT_WINDOW_SECS must be positive, got {}",
            secs
        ));
    }
    Duration::try_seconds(secs)
        .ok_or_else(|| anyhow!("FEED_RECENT_WINDOW_SECS is too large, got {}", secs))
}
