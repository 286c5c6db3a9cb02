//! # Domain Models
//!
//! Variant-typed shipments and vehicles, warehouses, the invariants they uphold and the
//! pure cost arithmetic derived from them. Keep it lean: no I/O, no storage concerns.

pub mod config;
pub mod constants;
pub mod error;
pub mod pricing;
pub mod registry;
pub mod shipment;
pub mod vehicle;
pub mod warehouse;

pub use error::{DomainError, DomainErrorExt, ErrorClass};
pub use shipment::{Priority, Shipment, ShipmentDetails, ShipmentStatus, ShipmentType};
pub use vehicle::{Vehicle, VehicleAttributes, VehicleDetails, VehicleStatus, VehicleType};
pub use warehouse::Warehouse;
