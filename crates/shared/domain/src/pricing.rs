//! Shipping cost, delivery estimate and vehicle operating cost.
//!
//! All functions are total; callers are expected to hand in entities that pass
//! `validate()`.

use crate::shipment::ShipmentDetails;
use crate::vehicle::VehicleDetails;

pub const EXPRESS_RATE: f64 = 15.0;
pub const STANDARD_RATE: f64 = 8.0;
pub const ECONOMY_RATE: f64 = 5.0;

pub const FRAGILE_SURCHARGE: f64 = 1.5;
pub const TEMPERATURE_SURCHARGE: f64 = 1.3;
/// Applied when customs are NOT cleared.
pub const UNCLEARED_CUSTOMS_FACTOR: f64 = 0.9;

pub const EXPRESS_DAYS: u32 = 2;
pub const STANDARD_DAYS: u32 = 5;
pub const ECONOMY_DAYS: u32 = 10;
pub const CUSTOMS_DELAY_DAYS: u32 = 3;

pub const AIR_RATE: f64 = 2.5;
pub const SEA_RATE: f64 = 1.2;
pub const LAND_RATE: f64 = 0.8;

#[must_use]
pub fn shipping_cost(weight: f64, details: &ShipmentDetails) -> f64 {
    match *details {
        ShipmentDetails::Express { fragile } => {
            let base = weight * EXPRESS_RATE;
            if fragile { base * FRAGILE_SURCHARGE } else { base }
        },
        ShipmentDetails::Standard { temperature_controlled } => {
            let base = weight * STANDARD_RATE;
            if temperature_controlled { base * TEMPERATURE_SURCHARGE } else { base }
        },
        // Uncleared economy freight is cheaper and slower.
        ShipmentDetails::Economy { customs_cleared } => {
            let base = weight * ECONOMY_RATE;
            if customs_cleared { base } else { base * UNCLEARED_CUSTOMS_FACTOR }
        },
    }
}

#[must_use]
pub const fn delivery_days(details: &ShipmentDetails) -> u32 {
    match *details {
        ShipmentDetails::Express { .. } => EXPRESS_DAYS,
        ShipmentDetails::Standard { .. } => STANDARD_DAYS,
        ShipmentDetails::Economy { customs_cleared: true } => ECONOMY_DAYS,
        ShipmentDetails::Economy { customs_cleared: false } => ECONOMY_DAYS + CUSTOMS_DELAY_DAYS,
    }
}

#[must_use]
pub fn operating_cost(capacity: f64, details: &VehicleDetails) -> f64 {
    let rate = match details {
        VehicleDetails::Air { .. } => AIR_RATE,
        VehicleDetails::Sea { .. } => SEA_RATE,
        VehicleDetails::Land { .. } => LAND_RATE,
    };
    capacity * rate
}
