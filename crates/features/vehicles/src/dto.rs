use freight_kernel::domain::{Vehicle, VehicleAttributes};

/// Wire shape of a vehicle. At most one of `maxAltitude`, `cargoType` and `fuelType` is
/// filled on output: the one belonging to the vehicle's type.
#[freight_derive::api_model]
#[derive(Default, Clone, PartialEq)]
pub struct VehicleDto {
    pub id: Option<i64>,
    /// `AIR`, `SEA` or `LAND`, case-insensitive on input.
    pub vehicle_type: Option<String>,
    pub name: Option<String>,
    pub license_plate: Option<String>,
    pub capacity: Option<f64>,
    pub status: Option<String>,
    pub max_altitude: Option<i32>,
    pub cargo_type: Option<String>,
    pub fuel_type: Option<String>,
}

impl VehicleDto {
    pub(crate) fn attributes(&self) -> VehicleAttributes {
        VehicleAttributes {
            max_altitude: self.max_altitude,
            cargo_type: self.cargo_type.clone(),
            fuel_type: self.fuel_type.clone(),
        }
    }
}

impl From<&Vehicle> for VehicleDto {
    fn from(vehicle: &Vehicle) -> Self {
        let VehicleAttributes { max_altitude, cargo_type, fuel_type } =
            VehicleAttributes::from(vehicle.details());

        Self {
            id: vehicle.id(),
            vehicle_type: Some(vehicle.kind().tag().to_owned()),
            name: Some(vehicle.name().to_owned()),
            license_plate: Some(vehicle.license_plate().to_owned()),
            capacity: Some(vehicle.capacity()),
            status: Some(vehicle.status().as_str().to_owned()),
            max_altitude,
            cargo_type,
            fuel_type,
        }
    }
}

/// Operating cost of a stored vehicle.
#[freight_derive::api_model]
#[derive(Clone, PartialEq)]
pub struct OperatingCost {
    pub vehicle_id: i64,
    pub vehicle_type: String,
    pub cost: f64,
    pub currency: String,
}
