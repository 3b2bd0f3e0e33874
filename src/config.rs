//! Environment-driven configuration.

use crate::domain::error::DomainError;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(DomainError::Config(format!("Unknown storage backend: {s}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub db_path: String,
    pub data_dir: PathBuf,
    pub quote_api_key: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Sqlite,
            db_path: "./valoracao.db".into(),
            data_dir: PathBuf::from("./valoracao-data"),
            quote_api_key: None,
            log_level: "warn".into(),
            log_format: "pretty".into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            storage: match get("VALORACAO_STORAGE") {
                Some(s) => s.parse()?,
                None => defaults.storage,
            },
            db_path: get("VALORACAO_DB").unwrap_or(defaults.db_path),
            data_dir: get("VALORACAO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            quote_api_key: get("VALORACAO_TWELVEDATA_KEY"),
            log_level: get("VALORACAO_LOG").unwrap_or(defaults.log_level),
            log_format: get("VALORACAO_LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }
}
