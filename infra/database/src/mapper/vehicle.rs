use freight_kernel::domain::{DomainError, Vehicle, VehicleAttributes};
use freight_kernel::factory::VehicleFactory;

/// One row of the `vehicles` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct VehicleRow {
    pub id: Option<i64>,
    pub vehicle_type: String,
    pub name: String,
    pub license_plate: String,
    pub capacity: f64,
    pub status: String,
    pub max_altitude: Option<i64>,
    pub cargo_type: Option<String>,
    pub fuel_type: Option<String>,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        let VehicleAttributes { max_altitude, cargo_type, fuel_type } =
            VehicleAttributes::from(vehicle.details());

        Self {
            id: vehicle.id(),
            vehicle_type: vehicle.kind().tag().to_owned(),
            name: vehicle.name().to_owned(),
            license_plate: vehicle.license_plate().to_owned(),
            capacity: vehicle.capacity(),
            status: vehicle.status().as_str().to_owned(),
            max_altitude: max_altitude.map(i64::from),
            cargo_type,
            fuel_type,
        }
    }
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = DomainError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        let mut vehicle = VehicleFactory::create(Some(&row.vehicle_type))?;

        vehicle.set_id(row.id);
        if !row.name.trim().is_empty() {
            vehicle.set_name(row.name)?;
        }
        vehicle.set_license_plate(row.license_plate);
        vehicle.set_capacity(row.capacity)?;
        vehicle.set_status(row.status);

        let max_altitude = row
            .max_altitude
            .map(i32::try_from)
            .transpose()
            .map_err(|_| DomainError::validation("max_altitude does not fit in 32 bits"))?;

        // Columns of the other variants are dropped here.
        vehicle.apply_attributes(VehicleAttributes {
            max_altitude,
            cargo_type: row.cargo_type,
            fuel_type: row.fuel_type,
        });

        Ok(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_kernel::domain::VehicleDetails;

    #[test]
    fn air_vehicle_writes_only_altitude() {
        let mut vehicle = VehicleFactory::create_with_fields(Some("AIR"), "Jet", "JT-1", 20.0).unwrap();
        vehicle.apply_attributes(VehicleAttributes { max_altitude: Some(11_000), ..Default::default() });

        let row = VehicleRow::from(&vehicle);
        assert_eq!(row.vehicle_type, "AIR");
        assert_eq!(row.max_altitude, Some(11_000));
        assert_eq!(row.cargo_type, None);
        assert_eq!(row.fuel_type, None);
    }

    #[test]
    fn out_of_range_altitude_is_rejected() {
        let row = VehicleRow {
            id: Some(1),
            vehicle_type: "air".into(),
            name: "Jet".into(),
            license_plate: "JT-1".into(),
            capacity: 20.0,
            status: "AVAILABLE".into(),
            max_altitude: Some(i64::MAX),
            cargo_type: None,
            fuel_type: None,
        };
        assert!(matches!(Vehicle::try_from(row), Err(DomainError::Validation { .. })));
    }

    #[test]
    fn land_row_ignores_foreign_columns() {
        let row = VehicleRow {
            id: Some(2),
            vehicle_type: "LAND".into(),
            name: "Truck".into(),
            license_plate: "TR-2".into(),
            capacity: 40.0,
            status: "IN_USE".into(),
            max_altitude: Some(500),
            cargo_type: Some("BULK".into()),
            fuel_type: Some("DIESEL".into()),
        };
        let vehicle = Vehicle::try_from(row).unwrap();
        assert_eq!(vehicle.details(), &VehicleDetails::Land { fuel_type: Some("DIESEL".into()) });
    }
}
