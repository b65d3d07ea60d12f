// src/config.rs
use std::{env, str::FromStr};

use thiserror::Error;

/// Which persistence backend the process binds at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Mongo,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mongo => "mongo",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sqlite" => Ok(Self::Sqlite),
            "mongo" => Ok(Self::Mongo),
            other => Err(ConfigError::Invalid(format!(
                "unknown storage backend '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    storage_backend: StorageBackend,
    sqlite_url: String,
    mongodb_url: String,
    mongodb_database: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_sqlite_url() -> String {
    "sqlite://blog.db".into()
}

fn default_mongodb_url() -> String {
    "mongodb://localhost:27017".into()
}

fn default_mongodb_database() -> String {
    "blog_db".into()
}

impl AppConfig {
    /// Build a configuration directly, bypassing the environment.
    pub fn new(
        storage_backend: StorageBackend,
        sqlite_url: impl Into<String>,
        mongodb_url: impl Into<String>,
        mongodb_database: impl Into<String>,
    ) -> Self {
        Self {
            storage_backend,
            sqlite_url: sqlite_url.into(),
            mongodb_url: mongodb_url.into(),
            mongodb_database: mongodb_database.into(),
        }
    }

    /// Build configuration from environment variables. Every key has a
    /// default, so the only possible failure is an unrecognized backend name.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::Sqlite,
        };
        let sqlite_url = env::var("SQLITE_URL").unwrap_or_else(|_| default_sqlite_url());
        let mongodb_url = env::var("MONGODB_URL").unwrap_or_else(|_| default_mongodb_url());
        let mongodb_database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| default_mongodb_database());

        Ok(Self {
            storage_backend,
            sqlite_url,
            mongodb_url,
            mongodb_database,
        })
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn sqlite_url(&self) -> &str {
        &self.sqlite_url
    }

    pub fn mongodb_url(&self) -> &str {
        &self.mongodb_url
    }

    pub fn mongodb_database(&self) -> &str {
        &self.mongodb_database
    }
}
