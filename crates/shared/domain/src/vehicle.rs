//! Transport vehicles: air, sea and land, each with one optional extra attribute.

use crate::constants::VEHICLE_SUFFIX;
use crate::error::DomainError;
use crate::pricing;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Air,
    Sea,
    Land,
}

impl VehicleType {
    pub const ALL: [Self; 3] = [Self::Air, Self::Sea, Self::Land];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Air => "AIR",
            Self::Sea => "SEA",
            Self::Land => "LAND",
        }
    }

    /// Case-insensitive lookup; absent, empty and unrecognized values fail.
    pub fn parse(value: Option<&str>) -> Result<Self, DomainError> {
        let Some(raw) = value else {
            return Err(DomainError::unknown_type("vehicle", None));
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| DomainError::unknown_type("vehicle", Some(raw)))
    }
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Other(String),
}

impl VehicleStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::Maintenance => "MAINTENANCE",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for VehicleStatus {
    fn from(value: &str) -> Self {
        match value {
            "AVAILABLE" => Self::Available,
            "IN_USE" => Self::InUse,
            "MAINTENANCE" => Self::Maintenance,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for VehicleStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<VehicleStatus> for String {
    fn from(value: VehicleStatus) -> Self {
        match value {
            VehicleStatus::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleDetails {
    Air { max_altitude: Option<i32> },
    Sea { cargo_type: Option<String> },
    Land { fuel_type: Option<String> },
}

impl VehicleDetails {
    #[must_use]
    pub const fn empty(kind: VehicleType) -> Self {
        match kind {
            VehicleType::Air => Self::Air { max_altitude: None },
            VehicleType::Sea => Self::Sea { cargo_type: None },
            VehicleType::Land => Self::Land { fuel_type: None },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> VehicleType {
        match self {
            Self::Air { .. } => VehicleType::Air,
            Self::Sea { .. } => VehicleType::Sea,
            Self::Land { .. } => VehicleType::Land,
        }
    }
}

/// Loose bag of variant attributes as they arrive from outside (a DTO or a flat row).
/// Only the one matching the vehicle's variant is ever applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VehicleAttributes {
    pub max_altitude: Option<i32>,
    pub cargo_type: Option<String>,
    pub fuel_type: Option<String>,
}

impl From<&VehicleDetails> for VehicleAttributes {
    fn from(details: &VehicleDetails) -> Self {
        match details {
            VehicleDetails::Air { max_altitude } => {
                Self { max_altitude: *max_altitude, ..Self::default() }
            },
            VehicleDetails::Sea { cargo_type } => {
                Self { cargo_type: cargo_type.clone(), ..Self::default() }
            },
            VehicleDetails::Land { fuel_type } => {
                Self { fuel_type: fuel_type.clone(), ..Self::default() }
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: Option<i64>,
    name: String,
    license_plate: String,
    capacity: f64,
    status: VehicleStatus,
    details: VehicleDetails,
}

impl Vehicle {
    #[must_use]
    pub fn new(kind: VehicleType) -> Self {
        Self {
            id: None,
            name: String::new(),
            license_plate: String::new(),
            capacity: 0.0,
            status: VehicleStatus::Available,
            details: VehicleDetails::empty(kind),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    #[must_use]
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    #[must_use]
    pub const fn status(&self) -> &VehicleStatus {
        &self.status
    }

    #[must_use]
    pub const fn details(&self) -> &VehicleDetails {
        &self.details
    }

    #[must_use]
    pub const fn kind(&self) -> VehicleType {
        self.details.kind()
    }

    #[must_use]
    pub fn entity_type(&self) -> String {
        format!("{}{VEHICLE_SUFFIX}", self.kind().tag())
    }

    pub const fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be blank"));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_license_plate(&mut self, license_plate: impl Into<String>) {
        self.license_plate = license_plate.into();
    }

    pub fn set_capacity(&mut self, capacity: f64) -> Result<(), DomainError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(DomainError::validation(format!(
                "capacity must be greater than 0, got {capacity}"
            )));
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn set_status(&mut self, status: impl Into<VehicleStatus>) {
        self.status = status.into();
    }

    /// Copies over the attribute that belongs to this vehicle's variant and ignores
    /// the others. A `None` leaves the current value untouched.
    pub fn apply_attributes(&mut self, attributes: VehicleAttributes) {
        match &mut self.details {
            VehicleDetails::Air { max_altitude } => {
                if let Some(value) = attributes.max_altitude {
                    *max_altitude = Some(value);
                }
            },
            VehicleDetails::Sea { cargo_type } => {
                if let Some(value) = attributes.cargo_type {
                    *cargo_type = Some(value);
                }
            },
            VehicleDetails::Land { fuel_type } => {
                if let Some(value) = attributes.fuel_type {
                    *fuel_type = Some(value);
                }
            },
        }
    }

    #[must_use]
    pub fn validate(&self) -> bool {
        !self.license_plate.trim().is_empty() && self.capacity > 0.0
    }

    #[must_use]
    pub fn operating_cost(&self) -> f64 {
        pricing::operating_cost(self.capacity, &self.details)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "new".to_owned(), |id| id.to_string());
        write!(f, "{} [ID: {id}, Name: {}]", self.entity_type(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_only_touch_matching_variant() {
        let mut vehicle = Vehicle::new(VehicleType::Sea);
        vehicle.apply_attributes(VehicleAttributes {
            max_altitude: Some(12_000),
            cargo_type: Some("CONTAINER".into()),
            fuel_type: Some("DIESEL".into()),
        });
        assert_eq!(vehicle.details(), &VehicleDetails::Sea { cargo_type: Some("CONTAINER".into()) });
    }

    #[test]
    fn attributes_from_details_fill_one_slot() {
        let attrs = VehicleAttributes::from(&VehicleDetails::Air { max_altitude: Some(9_000) });
        assert_eq!(attrs, VehicleAttributes { max_altitude: Some(9_000), ..Default::default() });
    }

    #[test]
    fn validate_checks_plate_and_capacity() {
        let mut vehicle = Vehicle::new(VehicleType::Land);
        assert!(!vehicle.validate());
        vehicle.set_license_plate("AB-123");
        vehicle.set_capacity(40.0).unwrap();
        assert!(vehicle.validate());
    }

    #[test]
    fn capacity_setter_rejects_zero() {
        let mut vehicle = Vehicle::new(VehicleType::Air);
        assert!(vehicle.set_capacity(0.0).is_err());
        assert!(vehicle.set_name("").is_err());
    }

    #[test]
    fn unknown_vehicle_type_fails() {
        assert!(VehicleType::parse(Some("rail")).is_err());
        assert_eq!(VehicleType::parse(Some("land")).unwrap(), VehicleType::Land);
    }
}
