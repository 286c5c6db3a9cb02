//! Facade crate for the freight slices and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use freight::{Platform, open_database};
//! use freight::domain::config::AppConfig;
//! use freight::features::ShipmentDto;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let database = open_database(&config).await?;
//! let platform = Platform::builder().config(config).database(database).build()?;
//!
//! let created = platform
//!     .shipments()?
//!     .create_shipment(ShipmentDto {
//!         shipment_type: Some("standard".into()),
//!         tracking_number: Some("TRK-1".into()),
//!         sender_name: Some("Alice".into()),
//!         recipient_name: Some("Bob".into()),
//!         weight: Some(2.0),
//!         ..ShipmentDto::default()
//!     })
//!     .await?;
//! assert_eq!(created.priority.as_deref(), Some("NORMAL"));
//! # Ok(())
//! # }
//! ```

mod error;
mod platform;

pub use crate::error::{PlatformError, PlatformErrorExt};
pub use crate::platform::{Platform, PlatformBuilder, PlatformInner};
pub use freight_database as database;
pub use freight_kernel as kernel;
pub use freight_kernel::domain;
pub use freight_logger as logger;

use freight_database::Database;
use freight_kernel::domain::config::{AppConfig, LoggingConfig};
use freight_kernel::domain::registry::InitializedSlice;
use freight_logger::{Journal, LevelFilter, Logger};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Feature slices and their public surfaces.
pub mod features {
    pub use freight_shipments::{self as shipments, ShipmentDto, ShipmentQuote, Shipments};
    pub use freight_vehicles::{self as vehicles, OperatingCost, VehicleDto, Vehicles};
    pub use freight_warehouses::{self as warehouses, WarehouseDto, Warehouses};
}

/// Initializes every feature slice.
///
/// # Errors
/// Returns the first slice error.
pub fn init(config: &AppConfig, database: &Database) -> Result<Vec<InitializedSlice>, PlatformError> {
    Ok(vec![
        features::shipments::init(config, database)?,
        features::vehicles::init(config, database)?,
        features::warehouses::init(config, database)?,
    ])
}

/// Reads `path` (or `./freight.*`) with `FREIGHT__` environment overrides.
///
/// # Errors
/// `Config` when the file is missing or malformed.
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, PlatformError> {
    Ok(freight_kernel::config::load_config(path)?)
}

/// Opens the store described by `config.database`.
///
/// # Errors
/// `Database` when the pool cannot be opened or migrated.
pub async fn open_database(config: &AppConfig) -> Result<Database, PlatformError> {
    let database = Database::builder()
        .url(&config.database.url)
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .init()
        .await
        .context("Opening configured store")?;
    Ok(database)
}

/// Installs the global subscriber described by `config`, mirroring events into
/// `journal` when one is given.
///
/// # Errors
/// * `Validation` when the level is not a valid filter.
/// * `Logger` when a subscriber is already installed or the log directory is unusable.
pub fn init_logging(
    name: &str,
    config: &LoggingConfig,
    journal: Option<Journal>,
) -> Result<Logger, PlatformError> {
    let level = LevelFilter::from_str(&config.level).map_err(|e| PlatformError::Validation {
        message: format!("invalid log level '{}': {e}", config.level).into(),
        context: Some("Reading logging config".into()),
    })?;

    let mut builder =
        Logger::builder().name(name).level(level).console(config.console).json(config.json);
    if let Some(directory) = &config.path {
        builder = builder.directory(directory);
    }
    if let Some(journal) = journal {
        builder = builder.journal(journal);
    }
    Ok(builder.init()?)
}
