//! Entity type suffixes and configuration defaults.

/// Suffix of a shipment's entity type (`EXPRESS_SHIPMENT`); never stored.
pub const SHIPMENT_SUFFIX: &str = "_SHIPMENT";
/// Suffix of a vehicle's entity type (`AIR_VEHICLE`); never stored.
pub const VEHICLE_SUFFIX: &str = "_VEHICLE";

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_MAX_SHIPMENT_WEIGHT: f64 = 50_000.0;
pub const DEFAULT_WAREHOUSE_CAPACITY: i64 = 10_000;
