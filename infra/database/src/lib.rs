//! # Database Infrastructure
//!
//! Pooled [SQLite](https://sqlite.org) access through `sqlx`, embedded schema migrations,
//! the flat-row mapping for the variant entities and one repository per table.
//!
//! ## Key Features
//! - **In-memory or on-disk**: `sqlite::memory:` for tests, `sqlite://freight.db` otherwise.
//! - **Resilient Connectivity**: health check retries with exponential backoff on startup.
//! - **Discriminated rows**: shipments and vehicles share one table per kind, told apart by
//!   a type column and mutually exclusive variant columns.
//!
//! ## Example
//!
//! ```rust
//! use freight_database::{Database, DatabaseError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("sqlite::memory:").init().await?;
//!     let shipments = db.shipments().find_all().await?;
//!     assert!(shipments.is_empty());
//!     Ok(())
//! }
//! ```

mod error;
pub mod mapper;
mod migrations;
pub mod repository;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use repository::{ShipmentRepository, VehicleRepository, WarehouseRepository};

use migrations::MigrationRunner;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, trace, warn};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    pool: SqlitePool,
    url: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(url = %self.url, "Database pool handle dropped");
    }
}

/// Cheaply cloneable handle to the connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    #[must_use]
    pub fn shipments(&self) -> ShipmentRepository {
        ShipmentRepository::new(self.clone())
    }

    #[must_use]
    pub fn vehicles(&self) -> VehicleRepository {
        VehicleRepository::new(self.clone())
    }

    #[must_use]
    pub fn warehouses(&self) -> WarehouseRepository {
        WarehouseRepository::new(self.clone())
    }
}

impl Deref for Database {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.inner.pool
    }
}

/// A fluent builder for configuring and establishing the pool.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    max_connections: Option<u32>,
    acquire_timeout: Option<Duration>,
}

impl DatabaseBuilder {
    /// Creates a new [`DatabaseBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL (`sqlite::memory:`, `sqlite://path/to/file.db`).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Upper bound of pooled connections. In-memory databases always use one.
    pub const fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    /// Consumes the builder and opens the pool.
    ///
    /// # Process
    /// 1. **Validation**: a URL must be provided and parse as SQLite connect options.
    /// 2. **Pool**: in-memory URLs get a single connection that is never recycled, so the
    ///    schema lives as long as the handle.
    /// 3. **Resilience**: up to 3 `SELECT 1` health checks, backing off from 500ms.
    /// 4. **Migrations**: embedded, versioned scripts recorded in `schema_migrations`.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if the URL is missing or malformed.
    /// * [`DatabaseError::Connection`] if the pool cannot connect or stays unhealthy.
    /// * [`DatabaseError::Migration`] / [`DatabaseError::Sqlx`] if a migration fails.
    #[instrument(skip(self), fields(url = self.url))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.ok_or(DatabaseError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;

        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| DatabaseError::Validation {
                message: e.to_string().into(),
                context: Some("Parsing connection URL".into()),
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = is_in_memory(&url);
        let max_connections =
            if in_memory { 1 } else { self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS) };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(self.acquire_timeout.unwrap_or(DEFAULT_ACQUIRE_TIMEOUT));
        if in_memory {
            pool_options = pool_options.min_connections(1).idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            DatabaseError::Connection {
                message: e.to_string().into(),
                context: Some("Opening pool".into()),
            }
        })?;

        let mut delay = Duration::from_millis(500);
        for attempt in 1..=3 {
            if sqlx::query("SELECT 1").execute(&pool).await.is_ok() {
                break;
            }
            if attempt == 3 {
                return Err(DatabaseError::Connection {
                    message: "Unhealthy after retries".into(),
                    context: Some(url.into()),
                });
            }
            warn!(attempt, ?delay, "Database not ready, retrying...");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
        info!(max_connections, in_memory, "SQLite pool established");

        info!("Applying database migrations...");
        let report = MigrationRunner::new(pool.clone()).run().await?;
        for skipped in report.skipped {
            trace!(version = skipped.version, name = skipped.name, "Skipping migration");
        }
        for applied in report.applied {
            info!(version = applied.version, name = applied.name, "Applied migration");
        }
        info!("Database migrations applied successfully");

        Ok(Database { inner: Arc::new(DatabaseInner { pool, url }) })
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::is_in_memory;

    #[test]
    fn detects_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:shared?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://freight.db"));
    }
}
