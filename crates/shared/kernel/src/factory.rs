//! Type string in, variant instance out.

use freight_domain::{DomainError, Shipment, ShipmentType, Vehicle, VehicleType};
use tracing::debug;

/// Common shipment fields accepted by the populating entry points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentFields {
    pub name: Option<String>,
    pub tracking_number: String,
    pub sender_name: String,
    pub recipient_name: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShipmentFactory;

impl ShipmentFactory {
    /// Freshly initialized shipment of the named type (case-insensitive).
    ///
    /// # Errors
    /// `UnknownType` when `kind` is absent, empty or not one of
    /// `EXPRESS`, `STANDARD`, `ECONOMY`.
    pub fn create(kind: Option<&str>) -> Result<Shipment, DomainError> {
        let kind = ShipmentType::parse(kind)?;
        debug!(%kind, "Creating shipment instance");
        Ok(Shipment::new(kind))
    }

    /// Like [`Self::create`], then fills in the common fields through the validating setters.
    ///
    /// # Errors
    /// `UnknownType` for a bad type; `Validation` for a blank name or non-positive weight.
    pub fn create_with_fields(
        kind: Option<&str>,
        fields: ShipmentFields,
    ) -> Result<Shipment, DomainError> {
        let mut shipment = Self::create(kind)?;
        let ShipmentFields {
            name,
            tracking_number,
            sender_name,
            recipient_name,
            origin,
            destination,
            weight,
        } = fields;

        if let Some(name) = name {
            shipment.set_name(name)?;
        }
        shipment.set_tracking_number(tracking_number);
        shipment.set_sender_name(sender_name);
        shipment.set_recipient_name(recipient_name);
        shipment.set_origin(origin);
        shipment.set_destination(destination);
        shipment.set_weight(weight)?;

        Ok(shipment)
    }

    /// Populated shipment whose variant flag (fragile, temperature controlled or
    /// customs cleared, depending on what was produced) is set to `special`.
    ///
    /// # Errors
    /// Same as [`Self::create_with_fields`].
    pub fn create_with_special(
        kind: Option<&str>,
        fields: ShipmentFields,
        special: bool,
    ) -> Result<Shipment, DomainError> {
        let mut shipment = Self::create_with_fields(kind, fields)?;
        shipment.set_special_attribute(special);
        Ok(shipment)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleFactory;

impl VehicleFactory {
    /// Freshly initialized vehicle of the named type (case-insensitive).
    ///
    /// # Errors
    /// `UnknownType` when `kind` is absent, empty or not one of `AIR`, `SEA`, `LAND`.
    pub fn create(kind: Option<&str>) -> Result<Vehicle, DomainError> {
        let kind = VehicleType::parse(kind)?;
        debug!(%kind, "Creating vehicle instance");
        Ok(Vehicle::new(kind))
    }

    /// # Errors
    /// `UnknownType` for a bad type; `Validation` for a blank name or non-positive capacity.
    pub fn create_with_fields(
        kind: Option<&str>,
        name: impl Into<String>,
        license_plate: impl Into<String>,
        capacity: f64,
    ) -> Result<Vehicle, DomainError> {
        let mut vehicle = Self::create(kind)?;
        vehicle.set_name(name)?;
        vehicle.set_license_plate(license_plate);
        vehicle.set_capacity(capacity)?;
        Ok(vehicle)
    }
}
