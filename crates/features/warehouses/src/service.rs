use crate::{WarehouseDto, Warehouses, WarehousesError, WarehousesErrorExt};
use freight_kernel::domain::{DomainError, Warehouse};
use tracing::{info, instrument, warn};

impl Warehouses {
    /// Stores a new warehouse. A missing capacity falls back to the configured default,
    /// a missing load to zero.
    ///
    /// # Errors
    /// * `Domain` when the name or location is missing or the capacity is not positive.
    /// * `Validation` when the load does not fit the capacity.
    #[instrument(skip(self, dto), fields(name = dto.name.as_deref()))]
    pub async fn create_warehouse(&self, dto: WarehouseDto) -> Result<WarehouseDto, WarehousesError> {
        let capacity = dto.capacity.unwrap_or(self.default_capacity);
        let mut warehouse = assemble(&dto, Some(capacity))?;

        let id = self.repository.create(&warehouse).await.context("Creating warehouse")?;
        warehouse.set_id(Some(id));

        info!(id, capacity, "Warehouse created");
        Ok(WarehouseDto::from(&warehouse))
    }

    /// # Errors
    /// `NotFound` when no warehouse has this id.
    #[instrument(skip(self))]
    pub async fn get_warehouse(&self, id: i64) -> Result<WarehouseDto, WarehousesError> {
        let warehouse = self
            .repository
            .find_by_id(id)
            .await
            .context("Fetching warehouse")?
            .ok_or_else(|| WarehousesError::NotFound {
                message: format!("id {id}").into(),
                context: None,
            })?;

        Ok(WarehouseDto::from(&warehouse))
    }

    /// # Errors
    /// `Database` on store failure.
    #[instrument(skip(self))]
    pub async fn list_warehouses(&self) -> Result<Vec<WarehouseDto>, WarehousesError> {
        let warehouses = self.repository.find_all().await.context("Listing warehouses")?;
        Ok(warehouses.iter().map(WarehouseDto::from).collect())
    }

    /// Replaces the stored record. Unlike create, the capacity is required.
    ///
    /// # Errors
    /// Same as [`Warehouses::create_warehouse`]; `Database` (class `NotFound`) for an
    /// unknown id.
    #[instrument(skip(self, dto))]
    pub async fn update_warehouse(
        &self,
        id: i64,
        dto: WarehouseDto,
    ) -> Result<WarehouseDto, WarehousesError> {
        let mut warehouse = assemble(&dto, dto.capacity)?;

        self.repository.update(id, &warehouse).await.context("Updating warehouse")?;
        warehouse.set_id(Some(id));

        info!(id, "Warehouse updated");
        Ok(WarehouseDto::from(&warehouse))
    }

    /// # Errors
    /// `Database` (class `NotFound`) when no row was deleted.
    #[instrument(skip(self))]
    pub async fn delete_warehouse(&self, id: i64) -> Result<(), WarehousesError> {
        self.repository.delete(id).await.context("Deleting warehouse")?;
        info!(id, "Warehouse deleted");
        Ok(())
    }
}

fn assemble(dto: &WarehouseDto, capacity: Option<i64>) -> Result<Warehouse, WarehousesError> {
    let name = required(dto.name.as_deref(), "name")?;
    let location = required(dto.location.as_deref(), "location")?;
    let capacity = match capacity {
        Some(capacity) if capacity > 0 => capacity,
        _ => return Err(DomainError::MissingField { field: "capacity" }.into()),
    };

    let mut warehouse = Warehouse::new(name, location, capacity)?;
    warehouse.set_current_load(dto.current_load.unwrap_or(0))?;

    if !warehouse.validate() {
        warn!(name, capacity, load = warehouse.current_load(), "Warehouse failed validation");
        return Err(WarehousesError::Validation {
            message: format!(
                "current load {} exceeds capacity {capacity}",
                warehouse.current_load()
            )
            .into(),
            context: None,
        });
    }
    Ok(warehouse)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DomainError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(DomainError::MissingField { field })
}
