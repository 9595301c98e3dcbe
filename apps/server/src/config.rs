use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};

/// Backing store for accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            other => Err(anyhow!("unknown storage '{other}', expected 'sqlite' or 'memory'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else if s.eq_ignore_ascii_case("text") {
            Ok(LogFormat::Text)
        } else {
            Err(anyhow!("unknown log format '{s}', expected 'text' or 'json'"))
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub storage: StorageKind,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Deleting a missing id succeeds silently instead of answering 404
    pub delete_missing_ok: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            storage: StorageKind::Sqlite,
            db_path: "./db/gobank.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            delete_missing_ok: false,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Reads the configuration from `GOBANK_*` environment variables, after
    /// loading a `.env` file when one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr = env_or("GOBANK_LISTEN_ADDR", defaults.listen_addr)?;
        let storage = env_or("GOBANK_STORAGE", defaults.storage)?;
        let db_path = std::env::var("GOBANK_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow = match std::env::var("GOBANK_CORS_ALLOW_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.cors_allow,
        };
        let timeout_ms: u64 = env_or(
            "GOBANK_REQUEST_TIMEOUT_MS",
            defaults.request_timeout.as_millis() as u64,
        )?;
        let delete_missing_ok = env_or("GOBANK_DELETE_MISSING_OK", defaults.delete_missing_ok)?;
        let log_format = env_or("GOBANK_LOG_FORMAT", defaults.log_format)?;

        Ok(Self {
            listen_addr,
            storage,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            delete_missing_ok,
            log_format,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Invalid {key}: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_kind_parses_case_insensitively() {
        assert_eq!("SQLite".parse::<StorageKind>().unwrap(), StorageKind::Sqlite);
        assert_eq!(" memory ".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert!("postgres".parse::<StorageKind>().is_err());
    }

    #[test]
    fn log_format_parses() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn defaults_listen_on_port_3000_with_sqlite() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert!(!config.delete_missing_ok);
    }
}
