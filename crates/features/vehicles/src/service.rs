use crate::{OperatingCost, VehicleDto, Vehicles, VehiclesError, VehiclesErrorExt};
use freight_kernel::domain::{DomainError, Vehicle, VehicleStatus};
use freight_kernel::factory::VehicleFactory;
use tracing::{info, instrument};

impl Vehicles {
    /// # Errors
    /// `Domain` when a required field is missing, the type is unknown or the capacity is
    /// not positive.
    #[instrument(skip(self, dto), fields(name = dto.name.as_deref()))]
    pub async fn create_vehicle(&self, dto: VehicleDto) -> Result<VehicleDto, VehiclesError> {
        let mut vehicle = assemble(&dto)?;

        let id = self.repository.create(&vehicle).await.context("Creating vehicle")?;
        vehicle.set_id(Some(id));

        info!(id, kind = %vehicle.kind(), "Vehicle created");
        Ok(VehicleDto::from(&vehicle))
    }

    /// # Errors
    /// `NotFound` when no vehicle has this id.
    #[instrument(skip(self))]
    pub async fn get_vehicle(&self, id: i64) -> Result<VehicleDto, VehiclesError> {
        self.load(id).await.map(|vehicle| VehicleDto::from(&vehicle))
    }

    /// All vehicles ordered by id, or only those whose status matches exactly.
    ///
    /// # Errors
    /// `Database` on store failure or an undecodable row.
    #[instrument(skip(self))]
    pub async fn list_vehicles(&self, status: Option<&str>) -> Result<Vec<VehicleDto>, VehiclesError> {
        let vehicles = match status {
            Some(status) => self
                .repository
                .find_by_status(&VehicleStatus::from(status))
                .await
                .context("Listing vehicles by status")?,
            None => self.repository.find_all().await.context("Listing vehicles")?,
        };

        Ok(vehicles.iter().map(VehicleDto::from).collect())
    }

    /// Replaces the stored record with one assembled from `dto`.
    ///
    /// # Errors
    /// Same as [`Vehicles::create_vehicle`]; `Database` (class `NotFound`) for an
    /// unknown id.
    #[instrument(skip(self, dto))]
    pub async fn update_vehicle(&self, id: i64, dto: VehicleDto) -> Result<VehicleDto, VehiclesError> {
        let mut vehicle = assemble(&dto)?;

        self.repository.update(id, &vehicle).await.context("Updating vehicle")?;
        vehicle.set_id(Some(id));

        info!(id, "Vehicle updated");
        Ok(VehicleDto::from(&vehicle))
    }

    /// # Errors
    /// `Database` (class `NotFound`) when no row was deleted.
    #[instrument(skip(self))]
    pub async fn delete_vehicle(&self, id: i64) -> Result<(), VehiclesError> {
        self.repository.delete(id).await.context("Deleting vehicle")?;
        info!(id, "Vehicle deleted");
        Ok(())
    }

    /// # Errors
    /// `NotFound` when no vehicle has this id.
    #[instrument(skip(self))]
    pub async fn operating_cost(&self, id: i64) -> Result<OperatingCost, VehiclesError> {
        let vehicle = self.load(id).await?;

        Ok(OperatingCost {
            vehicle_id: id,
            vehicle_type: vehicle.kind().tag().to_owned(),
            cost: vehicle.operating_cost(),
            currency: self.currency.clone(),
        })
    }

    async fn load(&self, id: i64) -> Result<Vehicle, VehiclesError> {
        self.repository
            .find_by_id(id)
            .await
            .context("Fetching vehicle")?
            .ok_or_else(|| VehiclesError::NotFound {
                message: format!("id {id}").into(),
                context: None,
            })
    }
}

fn assemble(dto: &VehicleDto) -> Result<Vehicle, VehiclesError> {
    let kind = required(dto.vehicle_type.as_deref(), "vehicleType")?;
    let name = required(dto.name.as_deref(), "name")?;
    let license_plate = required(dto.license_plate.as_deref(), "licensePlate")?;
    let capacity = match dto.capacity {
        Some(capacity) if capacity > 0.0 => capacity,
        _ => return Err(DomainError::MissingField { field: "capacity" }.into()),
    };

    let mut vehicle = VehicleFactory::create_with_fields(Some(kind), name, license_plate, capacity)?;
    if let Some(status) = dto.status.as_deref() {
        vehicle.set_status(status);
    }
    vehicle.apply_attributes(dto.attributes());
    Ok(vehicle)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DomainError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(DomainError::MissingField { field })
}
