use super::{ensure_affected, generated_id};
use crate::Database;
use crate::error::{DatabaseError, DatabaseErrorExt};
use crate::mapper::ShipmentRow;
use chrono::Utc;
use freight_kernel::domain::{Shipment, ShipmentStatus};
use tracing::{debug, instrument};

const COLUMNS: &str = "id, tracking_number, shipment_type, name, sender_name, recipient_name, \
    origin, destination, weight, status, priority, estimated_delivery, vehicle_id, warehouse_id, \
    is_fragile, temperature_controlled, customs_cleared, created_at, updated_at";

const INSERT: &str = "INSERT INTO shipments (tracking_number, shipment_type, name, sender_name, \
    recipient_name, origin, destination, weight, status, priority, estimated_delivery, vehicle_id, \
    warehouse_id, is_fragile, temperature_controlled, customs_cleared, created_at, updated_at) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id";

const UPDATE: &str = "UPDATE shipments SET tracking_number = ?, shipment_type = ?, name = ?, \
    sender_name = ?, recipient_name = ?, origin = ?, destination = ?, weight = ?, status = ?, \
    priority = ?, estimated_delivery = ?, vehicle_id = ?, warehouse_id = ?, is_fragile = ?, \
    temperature_controlled = ?, customs_cleared = ?, updated_at = ? WHERE id = ?";

/// Binds the sixteen columns shared by `INSERT` and `UPDATE`, in table order.
macro_rules! bind_shipment {
    ($query:expr, $row:expr) => {
        $query
            .bind(&$row.tracking_number)
            .bind(&$row.shipment_type)
            .bind(&$row.name)
            .bind(&$row.sender_name)
            .bind(&$row.recipient_name)
            .bind(&$row.origin)
            .bind(&$row.destination)
            .bind($row.weight)
            .bind(&$row.status)
            .bind(&$row.priority)
            .bind($row.estimated_delivery)
            .bind($row.vehicle_id)
            .bind($row.warehouse_id)
            .bind($row.is_fragile)
            .bind($row.temperature_controlled)
            .bind($row.customs_cleared)
    };
}

#[derive(Debug, Clone)]
pub struct ShipmentRepository {
    db: Database,
}

impl ShipmentRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts the shipment and returns the store-assigned id.
    ///
    /// # Errors
    /// `Duplicate` when the tracking number is taken, `Validation` when a referenced
    /// vehicle or warehouse does not exist, `Persistence` when no id comes back.
    #[instrument(skip(self, shipment), fields(tracking_number = shipment.tracking_number()))]
    pub async fn create(&self, shipment: &Shipment) -> Result<i64, DatabaseError> {
        let row = ShipmentRow::from(shipment);

        let id = bind_shipment!(sqlx::query_scalar::<_, i64>(INSERT), row)
            .bind(row.created_at)
            .bind(row.updated_at)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| DatabaseError::from_write(e, "Inserting shipment"))?;

        let id = generated_id(id, "shipment")?;
        debug!(id, "Shipment inserted");
        Ok(id)
    }

    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when a row cannot be decoded.
    pub async fn find_all(&self) -> Result<Vec<Shipment>, DatabaseError> {
        let rows = sqlx::query_as::<_, ShipmentRow>(&format!(
            "SELECT {COLUMNS} FROM shipments ORDER BY id"
        ))
        .fetch_all(self.db.pool())
        .await
        .context("Listing shipments")?;

        decode_all(rows)
    }

    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when the row cannot be decoded.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Shipment>, DatabaseError> {
        let row = sqlx::query_as::<_, ShipmentRow>(&format!(
            "SELECT {COLUMNS} FROM shipments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.db.pool())
        .await
        .context("Loading shipment by id")?;

        Ok(row.map(Shipment::try_from).transpose()?)
    }

    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when the row cannot be decoded.
    pub async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, DatabaseError> {
        let row = sqlx::query_as::<_, ShipmentRow>(&format!(
            "SELECT {COLUMNS} FROM shipments WHERE tracking_number = ?"
        ))
        .bind(tracking_number)
        .fetch_optional(self.db.pool())
        .await
        .context("Loading shipment by tracking number")?;

        Ok(row.map(Shipment::try_from).transpose()?)
    }

    /// Exact match on the stored status string.
    ///
    /// # Errors
    /// `Sqlx` on driver failure, `Domain` when a row cannot be decoded.
    pub async fn find_by_status(&self, status: &ShipmentStatus) -> Result<Vec<Shipment>, DatabaseError> {
        let rows = sqlx::query_as::<_, ShipmentRow>(&format!(
            "SELECT {COLUMNS} FROM shipments WHERE status = ? ORDER BY id"
        ))
        .bind(status.as_str())
        .fetch_all(self.db.pool())
        .await
        .context("Listing shipments by status")?;

        decode_all(rows)
    }

    /// Replaces every column except `created_at` and stamps `updated_at`.
    ///
    /// # Errors
    /// `NotFound` when no row has `id`; otherwise as [`Self::create`].
    #[instrument(skip(self, shipment))]
    pub async fn update(&self, id: i64, shipment: &Shipment) -> Result<(), DatabaseError> {
        let row = ShipmentRow::from(shipment);

        let result = bind_shipment!(sqlx::query(UPDATE), row)
            .bind(Utc::now())
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| DatabaseError::from_write(e, "Updating shipment"))?;

        ensure_affected(result, "shipment", id)
    }

    /// # Errors
    /// `NotFound` when no row has `id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM shipments WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| DatabaseError::from_write(e, "Deleting shipment"))?;

        ensure_affected(result, "shipment", id)
    }
}

fn decode_all(rows: Vec<ShipmentRow>) -> Result<Vec<Shipment>, DatabaseError> {
    Ok(rows.into_iter().map(Shipment::try_from).collect::<Result<Vec<_>, _>>()?)
}
