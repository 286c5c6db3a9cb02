use crate::constants::{DEFAULT_CURRENCY, DEFAULT_MAX_SHIPMENT_WEIGHT, DEFAULT_WAREHOUSE_CAPACITY};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the store, the logger and every feature slice.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub business: BusinessConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Relational store connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    /// Ignored for in-memory URLs, which always get a single connection.
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Pricing and capacity knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub currency: String,
    pub max_shipment_weight: f64,
    pub warehouse_default_capacity: i64,
}

// --- Default ---

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "sqlite::memory:".to_owned(), max_connections: 5, acquire_timeout_secs: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, path: None, json: false }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
            max_shipment_weight: DEFAULT_MAX_SHIPMENT_WEIGHT,
            warehouse_default_capacity: DEFAULT_WAREHOUSE_CAPACITY,
        }
    }
}
