//! One repository per table. Every statement is parameterized; nothing is retried.

mod shipments;
mod vehicles;
mod warehouses;

pub use shipments::ShipmentRepository;
pub use vehicles::VehicleRepository;
pub use warehouses::WarehouseRepository;

use crate::error::DatabaseError;
use sqlx::sqlite::SqliteQueryResult;

/// Turns "zero rows touched" into `NotFound`.
fn ensure_affected(
    result: SqliteQueryResult,
    entity: &'static str,
    id: i64,
) -> Result<(), DatabaseError> {
    if result.rows_affected() == 0 {
        return Err(DatabaseError::not_found(entity, id));
    }
    Ok(())
}

/// Unwraps the id produced by `INSERT ... RETURNING id`.
fn generated_id(id: Option<i64>, entity: &'static str) -> Result<i64, DatabaseError> {
    id.ok_or_else(|| DatabaseError::Persistence {
        message: format!("{entity} insert returned no generated id").into(),
        context: None,
    })
}
