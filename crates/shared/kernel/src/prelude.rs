pub use crate::builder::ShipmentBuilder;
pub use crate::factory::{ShipmentFactory, ShipmentFields, VehicleFactory};
pub use freight_domain::{
    DomainError, ErrorClass, Priority, Shipment, ShipmentDetails, ShipmentStatus, ShipmentType,
    Vehicle, VehicleAttributes, VehicleDetails, VehicleStatus, VehicleType, Warehouse,
};
