//! # Shipments
//!
//! Feature slice for the shipment lifecycle: every incoming [`ShipmentDto`] goes through
//! the builder and the factory, is checked against the variant rules and the configured
//! weight limit, and only then reaches the store.

mod dto;
mod error;
mod service;

pub use dto::{ShipmentDto, ShipmentQuote};
pub use error::{ShipmentsError, ShipmentsErrorExt};

use freight_database::{Database, ShipmentRepository};
use freight_kernel::domain::config::{AppConfig, BusinessConfig};
use freight_kernel::domain::registry::InitializedSlice;

#[freight_derive::freight_slice]
pub struct Shipments {
    repository: ShipmentRepository,
    business: BusinessConfig,
}

impl Shipments {
    /// # Errors
    /// [`ShipmentsError::Validation`] when the configured weight limit is not a positive
    /// number.
    pub fn from_config(config: &AppConfig, database: &Database) -> Result<Self, ShipmentsError> {
        let max = config.business.max_shipment_weight;
        if !max.is_finite() || max <= 0.0 {
            return Err(ShipmentsError::Validation {
                message: format!("max_shipment_weight must be positive, got {max}").into(),
                context: Some("Reading business config".into()),
            });
        }

        Ok(Self::new(ShipmentsInner {
            repository: database.shipments(),
            business: config.business.clone(),
        }))
    }
}

/// # Errors
/// See [`Shipments::from_config`].
pub fn init(config: &AppConfig, database: &Database) -> Result<InitializedSlice, ShipmentsError> {
    let slice = Shipments::from_config(config, database)?;
    tracing::info!("Shipments slice initialized");
    Ok(InitializedSlice::new(slice))
}
