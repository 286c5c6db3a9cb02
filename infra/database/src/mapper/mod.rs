//! Flat-row representation of the domain entities.
//!
//! Encoding never fails; decoding goes through the factories, so an unrecognized
//! discriminator surfaces as [`DomainError::UnknownType`](freight_kernel::domain::DomainError).

mod shipment;
mod vehicle;
mod warehouse;

pub use shipment::ShipmentRow;
pub use vehicle::VehicleRow;
pub use warehouse::WarehouseRow;
