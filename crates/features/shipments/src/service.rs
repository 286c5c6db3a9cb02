use crate::{Shipments, ShipmentDto, ShipmentQuote, ShipmentsError, ShipmentsErrorExt};
use freight_kernel::builder::ShipmentBuilder;
use freight_kernel::domain::{Priority, Shipment, ShipmentStatus, ShipmentType};
use tracing::{info, instrument, warn};

impl Shipments {
    /// Builds, validates and stores a new shipment.
    ///
    /// # Errors
    /// * `Domain` when a required field is missing or the type is unknown.
    /// * `Validation` when the shipment breaks its variant rules or the weight limit.
    /// * `Database` (class `Conflict`) when the tracking number is already taken.
    #[instrument(skip(self, dto), fields(tracking_number = dto.tracking_number.as_deref()))]
    pub async fn create_shipment(&self, dto: ShipmentDto) -> Result<ShipmentDto, ShipmentsError> {
        let mut shipment = self.assemble(dto)?;

        let id = self.repository.create(&shipment).await.context("Creating shipment")?;
        shipment.set_id(Some(id));

        info!(id, kind = %shipment.kind(), "Shipment created");
        Ok(ShipmentDto::from(&shipment))
    }

    /// # Errors
    /// `NotFound` when no shipment has this id.
    #[instrument(skip(self))]
    pub async fn get_shipment(&self, id: i64) -> Result<ShipmentDto, ShipmentsError> {
        self.load(id).await.map(|shipment| ShipmentDto::from(&shipment))
    }

    /// # Errors
    /// `NotFound` when no shipment carries this tracking number.
    #[instrument(skip(self))]
    pub async fn get_shipment_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<ShipmentDto, ShipmentsError> {
        let shipment = self
            .repository
            .find_by_tracking_number(tracking_number)
            .await
            .context("Fetching shipment by tracking number")?
            .ok_or_else(|| ShipmentsError::not_found(format!("tracking number {tracking_number}")))?;

        Ok(ShipmentDto::from(&shipment))
    }

    /// All shipments ordered by id, or only those whose status matches exactly.
    ///
    /// # Errors
    /// `Database` on store failure or an undecodable row.
    #[instrument(skip(self))]
    pub async fn list_shipments(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<ShipmentDto>, ShipmentsError> {
        let shipments = match status {
            Some(status) => self
                .repository
                .find_by_status(&ShipmentStatus::from(status))
                .await
                .context("Listing shipments by status")?,
            None => self.repository.find_all().await.context("Listing shipments")?,
        };

        Ok(shipments.iter().map(ShipmentDto::from).collect())
    }

    /// Replaces the stored record with one assembled from `dto`. The original creation
    /// time is kept.
    ///
    /// # Errors
    /// Same as [`Shipments::create_shipment`], plus `NotFound` for an unknown id.
    #[instrument(skip(self, dto))]
    pub async fn update_shipment(
        &self,
        id: i64,
        dto: ShipmentDto,
    ) -> Result<ShipmentDto, ShipmentsError> {
        let existing = self.load(id).await?;

        let mut shipment = self.assemble(dto)?;
        shipment.set_created_at(existing.created_at());

        self.repository.update(id, &shipment).await.context("Updating shipment")?;
        shipment.set_id(Some(id));

        info!(id, "Shipment updated");
        Ok(ShipmentDto::from(&shipment))
    }

    /// # Errors
    /// `Database` (class `NotFound`) when no row was deleted.
    #[instrument(skip(self))]
    pub async fn delete_shipment(&self, id: i64) -> Result<(), ShipmentsError> {
        self.repository.delete(id).await.context("Deleting shipment")?;
        info!(id, "Shipment deleted");
        Ok(())
    }

    /// Cost and transit time of a stored shipment, in the configured currency.
    ///
    /// # Errors
    /// `NotFound` when no shipment has this id.
    #[instrument(skip(self))]
    pub async fn quote_shipment(&self, id: i64) -> Result<ShipmentQuote, ShipmentsError> {
        let shipment = self.load(id).await?;

        Ok(ShipmentQuote {
            tracking_number: shipment.tracking_number().to_owned(),
            shipment_type: shipment.kind().tag().to_owned(),
            cost: shipment.shipping_cost(),
            currency: self.business.currency.clone(),
            delivery_days: shipment.delivery_days(),
        })
    }

    async fn load(&self, id: i64) -> Result<Shipment, ShipmentsError> {
        self.repository
            .find_by_id(id)
            .await
            .context("Fetching shipment")?
            .ok_or_else(|| ShipmentsError::not_found(format!("id {id}")))
    }

    /// DTO -> builder -> variant rules -> weight limit.
    fn assemble(&self, dto: ShipmentDto) -> Result<Shipment, ShipmentsError> {
        let special = dto.special_attribute();
        let mut builder = ShipmentBuilder::new();

        // A recognized type brings its variant priority; anything else is left for the
        // factory to reject.
        if let Some(kind) = dto.shipment_type {
            builder = match kind.parse::<ShipmentType>() {
                Ok(kind) => builder.shipment_type(kind),
                Err(_) => builder.kind(kind),
            };
        }
        if let Some(name) = dto.name {
            builder = builder.name(name);
        }
        if let Some(tracking_number) = dto.tracking_number {
            builder = builder.tracking_number(tracking_number);
        }
        if let Some(sender) = dto.sender_name {
            builder = builder.sender(sender);
        }
        if let Some(recipient) = dto.recipient_name {
            builder = builder.recipient(recipient);
        }
        if let Some(origin) = dto.origin {
            builder = builder.from(origin);
        }
        if let Some(destination) = dto.destination {
            builder = builder.to(destination);
        }
        if let Some(weight) = dto.weight {
            builder = builder.weight(weight);
        }
        if let Some(status) = present(dto.status) {
            builder = builder.status(status);
        }
        if let Some(priority) = present(dto.priority) {
            builder = builder.priority(priority.parse::<Priority>()?);
        }
        if let Some(date) = dto.estimated_delivery {
            builder = builder.estimated_delivery(date);
        }
        if let Some(vehicle_id) = dto.vehicle_id {
            builder = builder.vehicle_id(vehicle_id);
        }
        if let Some(warehouse_id) = dto.warehouse_id {
            builder = builder.warehouse_id(warehouse_id);
        }
        if let Some(special) = special {
            builder = builder.special_attribute(special);
        }

        let shipment = builder.build()?;

        if !shipment.validate() {
            warn!(tracking_number = shipment.tracking_number(), "Shipment failed validation");
            return Err(ShipmentsError::invalid(format!(
                "{} shipment {} does not satisfy its variant rules (priority {})",
                shipment.kind(),
                shipment.tracking_number(),
                shipment.priority()
            )));
        }

        let max = self.business.max_shipment_weight;
        if shipment.weight() > max {
            return Err(ShipmentsError::invalid(format!(
                "weight {} exceeds the limit of {max}",
                shipment.weight()
            )));
        }

        Ok(shipment)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
