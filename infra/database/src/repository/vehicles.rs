use super::{ensure_affected, generated_id};
use crate::Database;
use crate::error::{DatabaseError, DatabaseErrorExt};
use crate::mapper::VehicleRow;
use freight_kernel::domain::{Vehicle, VehicleStatus};
use tracing::{debug, instrument};

const COLUMNS: &str =
    "id, vehicle_type, name, license_plate, capacity, status, max_altitude, cargo_type, fuel_type";

#[derive(Debug, Clone)]
pub struct VehicleRepository {
    db: Database,
}

impl VehicleRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// # Errors
    /// `Validation` when a constraint rejects the row, `Persistence` when no id comes back.
    #[instrument(skip(self, vehicle), fields(license_plate = vehicle.license_plate()))]
    pub async fn create(&self, vehicle: &Vehicle) -> Result<i64, DatabaseError> {
        let row = VehicleRow::from(vehicle);

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO vehicles (vehicle_type, name, license_plate, capacity, status, \
             max_altitude, cargo_type, fuel_type) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&row.vehicle_type)
        .bind(&row.name)
        .bind(&row.license_plate)
        .bind(row.capacity)
        .bind(&row.status)
        .bind(row.max_altitude)
        .bind(&row.cargo_type)
        .bind(&row.fuel_type)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| DatabaseError::from_write(e, "Inserting vehicle"))?;

        let id = generated_id(id, "vehicle")?;
        debug!(id, "Vehicle inserted");
        Ok(id)
    }

    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when a row cannot be decoded.
    pub async fn find_all(&self) -> Result<Vec<Vehicle>, DatabaseError> {
        let rows =
            sqlx::query_as::<_, VehicleRow>(&format!("SELECT {COLUMNS} FROM vehicles ORDER BY id"))
                .fetch_all(self.db.pool())
                .await
                .context("Listing vehicles")?;

        decode_all(rows)
    }

    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when the row cannot be decoded.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, DatabaseError> {
        let row =
            sqlx::query_as::<_, VehicleRow>(&format!("SELECT {COLUMNS} FROM vehicles WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.db.pool())
                .await
                .context("Loading vehicle by id")?;

        Ok(row.map(Vehicle::try_from).transpose()?)
    }

    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when a row cannot be decoded.
    pub async fn find_by_status(&self, status: &VehicleStatus) -> Result<Vec<Vehicle>, DatabaseError> {
        let rows = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {COLUMNS} FROM vehicles WHERE status = ? ORDER BY id"
        ))
        .bind(status.as_str())
        .fetch_all(self.db.pool())
        .await
        .context("Listing vehicles by status")?;

        decode_all(rows)
    }

    /// Full-record replace, including the type column.
    ///
    /// # Errors
    /// `NotFound` when no row has `id`.
    #[instrument(skip(self, vehicle))]
    pub async fn update(&self, id: i64, vehicle: &Vehicle) -> Result<(), DatabaseError> {
        let row = VehicleRow::from(vehicle);

        let result = sqlx::query(
            "UPDATE vehicles SET vehicle_type = ?, name = ?, license_plate = ?, capacity = ?, \
             status = ?, max_altitude = ?, cargo_type = ?, fuel_type = ? WHERE id = ?",
        )
        .bind(&row.vehicle_type)
        .bind(&row.name)
        .bind(&row.license_plate)
        .bind(row.capacity)
        .bind(&row.status)
        .bind(row.max_altitude)
        .bind(&row.cargo_type)
        .bind(&row.fuel_type)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| DatabaseError::from_write(e, "Updating vehicle"))?;

        ensure_affected(result, "vehicle", id)
    }

    /// # Errors
    /// `NotFound` when no row has `id`; `Validation` while shipments still reference it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| DatabaseError::from_write(e, "Deleting vehicle"))?;

        ensure_affected(result, "vehicle", id)
    }
}

fn decode_all(rows: Vec<VehicleRow>) -> Result<Vec<Vehicle>, DatabaseError> {
    Ok(rows.into_iter().map(Vehicle::try_from).collect::<Result<Vec<_>, _>>()?)
}
