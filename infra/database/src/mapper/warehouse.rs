use freight_kernel::domain::Warehouse;

/// One row of the `warehouses` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct WarehouseRow {
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub current_load: i64,
}

impl From<&Warehouse> for WarehouseRow {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id(),
            name: warehouse.name().to_owned(),
            location: warehouse.location().to_owned(),
            capacity: warehouse.capacity(),
            current_load: warehouse.current_load(),
        }
    }
}

impl From<WarehouseRow> for Warehouse {
    fn from(row: WarehouseRow) -> Self {
        Self::restore(row.id, row.name, row.location, row.capacity, row.current_load)
    }
}
