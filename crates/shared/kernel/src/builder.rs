use crate::factory::{ShipmentFactory, ShipmentFields};
use chrono::NaiveDate;
use freight_domain::{DomainError, Priority, Shipment, ShipmentStatus, ShipmentType};
use tracing::debug;

/// Fluent, validating assembly of a shipment.
///
/// Required fields are checked in a fixed order before the factory is touched: type,
/// tracking number, sender, recipient, positive weight. The first one missing is
/// reported as [`DomainError::MissingField`].
///
/// Defaults are `PENDING` and `NORMAL`, whatever the type string resolves to. Only the
/// variant shortcuts ([`express`](Self::express), [`shipment_type`](Self::shipment_type),
/// ...) carry the variant's own priority. A blank status leaves the default in place.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ShipmentBuilder {
    kind: Option<String>,
    name: Option<String>,
    tracking_number: Option<String>,
    sender_name: Option<String>,
    recipient_name: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    weight: Option<f64>,
    status: Option<ShipmentStatus>,
    priority: Option<Priority>,
    estimated_delivery: Option<NaiveDate>,
    vehicle_id: Option<i64>,
    warehouse_id: Option<i64>,
    special: Option<bool>,
}

impl ShipmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type string as supplied by the caller; resolved by the factory at build time.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    pub fn sender(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }

    pub fn recipient(mut self, recipient_name: impl Into<String>) -> Self {
        self.recipient_name = Some(recipient_name.into());
        self
    }

    pub fn from(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn to(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn status(mut self, status: impl Into<ShipmentStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn estimated_delivery(mut self, date: NaiveDate) -> Self {
        self.estimated_delivery = Some(date);
        self
    }

    pub fn vehicle_id(mut self, vehicle_id: i64) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    pub fn warehouse_id(mut self, warehouse_id: i64) -> Self {
        self.warehouse_id = Some(warehouse_id);
        self
    }

    /// Variant flag, whatever the variant turns out to be.
    pub fn special_attribute(mut self, value: bool) -> Self {
        self.special = Some(value);
        self
    }

    pub fn express(self) -> Self {
        self.shipment_type(ShipmentType::Express)
    }

    pub fn standard(self) -> Self {
        self.shipment_type(ShipmentType::Standard)
    }

    pub fn economy(self) -> Self {
        self.shipment_type(ShipmentType::Economy)
    }

    pub fn fragile(self, value: bool) -> Self {
        self.special_attribute(value)
    }

    pub fn temperature_controlled(self, value: bool) -> Self {
        self.special_attribute(value)
    }

    pub fn customs_cleared(self, value: bool) -> Self {
        self.special_attribute(value)
    }

    /// Sets the type together with the priority that variant expects.
    pub fn shipment_type(mut self, kind: ShipmentType) -> Self {
        self.kind = Some(kind.tag().to_owned());
        self.priority = Some(kind.default_priority());
        self
    }

    /// # Errors
    /// * `MissingField` naming the first absent or blank required field, or `weight`
    ///   when it is missing or not positive.
    /// * `UnknownType` when the type string is not recognized.
    /// * `Validation` when a setter rejects a value (for example a blank name).
    pub fn build(self) -> Result<Shipment, DomainError> {
        let kind = required(self.kind, "type")?;
        let tracking_number = required(self.tracking_number, "trackingNumber")?;
        let sender_name = required(self.sender_name, "senderName")?;
        let recipient_name = required(self.recipient_name, "recipientName")?;
        let weight = match self.weight {
            Some(weight) if weight > 0.0 => weight,
            _ => return Err(DomainError::MissingField { field: "weight" }),
        };

        let fields = ShipmentFields {
            name: self.name,
            tracking_number,
            sender_name,
            recipient_name,
            origin: self.origin.unwrap_or_default(),
            destination: self.destination.unwrap_or_default(),
            weight,
        };

        let mut shipment = match self.special {
            Some(special) => ShipmentFactory::create_with_special(Some(&kind), fields, special)?,
            None => ShipmentFactory::create_with_fields(Some(&kind), fields)?,
        };

        if let Some(status) = self.status.filter(|s| !s.as_str().trim().is_empty()) {
            shipment.set_status(status);
        }
        shipment.set_priority(self.priority.unwrap_or(Priority::Normal));
        if let Some(date) = self.estimated_delivery {
            shipment.set_estimated_delivery(Some(date));
        }
        if let Some(vehicle_id) = self.vehicle_id {
            shipment.set_vehicle_id(Some(vehicle_id));
        }
        if let Some(warehouse_id) = self.warehouse_id {
            shipment.set_warehouse_id(Some(warehouse_id));
        }

        debug!(tracking_number = shipment.tracking_number(), kind = %shipment.kind(), "Shipment built");
        Ok(shipment)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(DomainError::MissingField { field })
}
