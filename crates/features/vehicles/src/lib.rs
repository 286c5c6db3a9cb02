//! # Vehicles
//!
//! Feature slice for the fleet: air, sea and land vehicles produced by the vehicle
//! factory, stored with their type-specific attribute, and priced per unit of capacity.

mod dto;
mod error;
mod service;

pub use dto::{OperatingCost, VehicleDto};
pub use error::{VehiclesError, VehiclesErrorExt};

use freight_database::{Database, VehicleRepository};
use freight_kernel::domain::config::AppConfig;
use freight_kernel::domain::registry::InitializedSlice;

#[freight_derive::freight_slice]
pub struct Vehicles {
    repository: VehicleRepository,
    currency: String,
}

impl Vehicles {
    #[must_use]
    pub fn from_config(config: &AppConfig, database: &Database) -> Self {
        Self::new(VehiclesInner {
            repository: database.vehicles(),
            currency: config.business.currency.clone(),
        })
    }
}

/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(config: &AppConfig, database: &Database) -> Result<InitializedSlice, VehiclesError> {
    let slice = Vehicles::from_config(config, database);
    tracing::info!("Vehicles slice initialized");
    Ok(InitializedSlice::new(slice))
}
