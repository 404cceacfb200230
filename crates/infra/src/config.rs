//! Store configuration loaded from the environment.

use std::str::FromStr;
use std::time::Duration;

use crate::item_store::StoreError;

pub const DEFAULT_MONGO_HOST: &str = "mongo";
pub const DEFAULT_MONGO_PORT: u16 = 27017;
pub const DEFAULT_MONGO_DB: &str = "appdb";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Collection holding item documents.
pub const ITEMS_COLLECTION: &str = "items";

/// Which `ItemStore` implementation to wire up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(StoreError::Config(format!(
                "ITEM_STORE_BACKEND must be one of: mongo, memory (got {other:?})"
            ))),
        }
    }
}

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Upper bound for a single store call.
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            host: DEFAULT_MONGO_HOST.to_string(),
            port: DEFAULT_MONGO_PORT,
            database: DEFAULT_MONGO_DB.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl StoreConfig {
    /// Read `MONGO_HOST`, `MONGO_PORT`, `MONGO_DB`, `MONGO_TIMEOUT_MS` and
    /// `ITEM_STORE_BACKEND`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let backend = match lookup("ITEM_STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => defaults.backend,
        };

        let port = match lookup("MONGO_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|e| StoreError::Config(format!("MONGO_PORT {v:?}: {e}")))?,
            None => defaults.port,
        };

        let timeout = match lookup("MONGO_TIMEOUT_MS") {
            Some(v) => {
                let ms = v
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| StoreError::Config(format!("MONGO_TIMEOUT_MS {v:?}: {e}")))?;
                if ms == 0 {
                    return Err(StoreError::Config("MONGO_TIMEOUT_MS must be > 0".to_string()));
                }
                Duration::from_millis(ms)
            }
            None => defaults.timeout,
        };

        Ok(Self {
            backend,
            host: lookup("MONGO_HOST").unwrap_or(defaults.host),
            port,
            database: lookup("MONGO_DB").unwrap_or(defaults.database),
            timeout,
        })
    }

    /// `mongodb://host:port/` connection string.
    pub fn mongo_uri(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }
}
