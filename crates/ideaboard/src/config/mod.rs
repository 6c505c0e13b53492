use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::query::DEFAULT_PAGE_SIZE;

/// Top-level configuration for the catalog tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub query: QueryConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = env::var("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/ideas.json"));

        let page_size = match env::var("APP_PAGE_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPageSize { value: raw })?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            dataset: DatasetConfig { path },
            query: QueryConfig { page_size },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the flat JSON dataset the catalog is loaded from.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

/// Defaults applied to query parameters the caller leaves unset.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub page_size: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPageSize { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPageSize { value } => {
                write!(f, "APP_PAGE_SIZE must be a positive integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
