use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "applicantsData";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_backend: StorageBackend,
    pub storage_key: String,
    pub fetch_delay: Duration,
    pub update_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            storage_backend: StorageBackend::File,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fetch_delay: Duration::from_millis(500),
            update_delay: Duration::from_millis(300),
            log_format: LogFormat::Text,
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            data_dir: PathBuf::from(get_env_or("DATA_DIR", "./data")),
            storage_backend: get_env_parse_or("STORAGE_BACKEND", StorageBackend::File)?,
            storage_key: get_env_or("STORAGE_KEY", DEFAULT_STORAGE_KEY),
            fetch_delay: Duration::from_millis(get_env_parse_or("FETCH_DELAY_MS", 500u64)?),
            update_delay: Duration::from_millis(get_env_parse_or("UPDATE_DELAY_MS", 300u64)?),
            log_format: get_env_parse_or("LOG_FORMAT", LogFormat::Text)?,
        })
    }

    /// Same defaults with no artificial latency.
    pub fn without_latency() -> Self {
        Self {
            fetch_delay: Duration::ZERO,
            update_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_and_format_case_insensitively() {
        assert_eq!("Memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert_eq!(" file ".parse::<StorageBackend>(), Ok(StorageBackend::File));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn defaults_match_mock_latency() {
        let config = Config::default();
        assert_eq!(config.storage_key, "applicantsData");
        assert_eq!(config.fetch_delay, Duration::from_millis(500));
        assert_eq!(config.update_delay, Duration::from_millis(300));
        assert_eq!(Config::without_latency().fetch_delay, Duration::ZERO);
    }
}
