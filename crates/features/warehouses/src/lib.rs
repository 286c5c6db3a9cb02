//! # Warehouses
//!
//! Feature slice for storage sites. A warehouse is only stored when its current load
//! fits within its capacity.

mod dto;
mod error;
mod service;

pub use dto::WarehouseDto;
pub use error::{WarehousesError, WarehousesErrorExt};

use freight_database::{Database, WarehouseRepository};
use freight_kernel::domain::config::AppConfig;
use freight_kernel::domain::registry::InitializedSlice;

#[freight_derive::freight_slice]
pub struct Warehouses {
    repository: WarehouseRepository,
    /// Used when a create request omits the capacity.
    default_capacity: i64,
}

impl Warehouses {
    /// # Errors
    /// [`WarehousesError::Validation`] when the configured default capacity is not positive.
    pub fn from_config(config: &AppConfig, database: &Database) -> Result<Self, WarehousesError> {
        let default_capacity = config.business.warehouse_default_capacity;
        if default_capacity <= 0 {
            return Err(WarehousesError::Validation {
                message: format!("warehouse_default_capacity must be positive, got {default_capacity}")
                    .into(),
                context: Some("Reading business config".into()),
            });
        }

        Ok(Self::new(WarehousesInner { repository: database.warehouses(), default_capacity }))
    }
}

/// # Errors
/// See [`Warehouses::from_config`].
pub fn init(config: &AppConfig, database: &Database) -> Result<InitializedSlice, WarehousesError> {
    let slice = Warehouses::from_config(config, database)?;
    tracing::info!("Warehouses slice initialized");
    Ok(InitializedSlice::new(slice))
}
