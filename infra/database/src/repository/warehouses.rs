use super::{ensure_affected, generated_id};
use crate::Database;
use crate::error::{DatabaseError, DatabaseErrorExt};
use crate::mapper::WarehouseRow;
use freight_kernel::domain::Warehouse;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    db: Database,
}

impl WarehouseRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// # Errors
    /// `Validation` when a constraint rejects the row, `Persistence` when no id comes back.
    #[instrument(skip(self, warehouse), fields(name = warehouse.name()))]
    pub async fn create(&self, warehouse: &Warehouse) -> Result<i64, DatabaseError> {
        let row = WarehouseRow::from(warehouse);

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO warehouses (name, location, capacity, current_load) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&row.name)
        .bind(&row.location)
        .bind(row.capacity)
        .bind(row.current_load)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| DatabaseError::from_write(e, "Inserting warehouse"))?;

        let id = generated_id(id, "warehouse")?;
        debug!(id, "Warehouse inserted");
        Ok(id)
    }

    /// # Errors
    /// `Sqlx` on driver failure.
    pub async fn find_all(&self) -> Result<Vec<Warehouse>, DatabaseError> {
        let rows = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, name, location, capacity, current_load FROM warehouses ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await
        .context("Listing warehouses")?;

        Ok(rows.into_iter().map(Warehouse::from).collect())
    }

    /// # Errors
    /// `Sqlx` on driver failure.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Warehouse>, DatabaseError> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, name, location, capacity, current_load FROM warehouses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await
        .context("Loading warehouse by id")?;

        Ok(row.map(Warehouse::from))
    }

    /// # Errors
    /// `NotFound` when no row has `id`.
    #[instrument(skip(self, warehouse))]
    pub async fn update(&self, id: i64, warehouse: &Warehouse) -> Result<(), DatabaseError> {
        let row = WarehouseRow::from(warehouse);

        let result = sqlx::query(
            "UPDATE warehouses SET name = ?, location = ?, capacity = ?, current_load = ? \
             WHERE id = ?",
        )
        .bind(&row.name)
        .bind(&row.location)
        .bind(row.capacity)
        .bind(row.current_load)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| DatabaseError::from_write(e, "Updating warehouse"))?;

        ensure_affected(result, "warehouse", id)
    }

    /// # Errors
    /// `NotFound` when no row has `id`; `Validation` while shipments still reference it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| DatabaseError::from_write(e, "Deleting warehouse"))?;

        ensure_affected(result, "warehouse", id)
    }
}
