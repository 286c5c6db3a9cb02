//! Shipments: one common field set plus exactly one variant-specific flag.

use crate::constants::SHIPMENT_SUFFIX;
use crate::error::DomainError;
use crate::pricing;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of shipment variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentType {
    Express,
    Standard,
    Economy,
}

impl ShipmentType {
    pub const ALL: [Self; 3] = [Self::Express, Self::Standard, Self::Economy];

    /// Stable uppercase tag, also the stored discriminator.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Express => "EXPRESS",
            Self::Standard => "STANDARD",
            Self::Economy => "ECONOMY",
        }
    }

    #[must_use]
    pub const fn default_priority(self) -> Priority {
        match self {
            Self::Express => Priority::High,
            Self::Standard => Priority::Normal,
            Self::Economy => Priority::Low,
        }
    }

    /// Case-insensitive lookup. Absent, empty and unrecognized values are all
    /// `UnknownType`.
    pub fn parse(value: Option<&str>) -> Result<Self, DomainError> {
        let Some(raw) = value else {
            return Err(DomainError::unknown_type("shipment", None));
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| DomainError::unknown_type("shipment", Some(raw)))
    }
}

impl FromStr for ShipmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Low, Self::Normal, Self::High]
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown priority '{s}'")))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipment status. The well-known values get their own variants; anything else is
/// kept verbatim in `Other`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
    Other(String),
}

impl ShipmentStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for ShipmentStatus {
    fn from(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "IN_TRANSIT" => Self::InTransit,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" => Self::Cancelled,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for ShipmentStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ShipmentStatus> for String {
    fn from(value: ShipmentStatus) -> Self {
        match value {
            ShipmentStatus::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The variant-specific part of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentDetails {
    Express { fragile: bool },
    Standard { temperature_controlled: bool },
    Economy { customs_cleared: bool },
}

impl ShipmentDetails {
    /// Freshly initialized details: the special flag starts out `false`.
    #[must_use]
    pub const fn empty(kind: ShipmentType) -> Self {
        match kind {
            ShipmentType::Express => Self::Express { fragile: false },
            ShipmentType::Standard => Self::Standard { temperature_controlled: false },
            ShipmentType::Economy => Self::Economy { customs_cleared: false },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ShipmentType {
        match self {
            Self::Express { .. } => ShipmentType::Express,
            Self::Standard { .. } => ShipmentType::Standard,
            Self::Economy { .. } => ShipmentType::Economy,
        }
    }

    #[must_use]
    pub const fn special_attribute(&self) -> bool {
        match *self {
            Self::Express { fragile } => fragile,
            Self::Standard { temperature_controlled } => temperature_controlled,
            Self::Economy { customs_cleared } => customs_cleared,
        }
    }

    /// Writes `value` into whichever flag this variant carries.
    pub const fn set_special_attribute(&mut self, value: bool) {
        match self {
            Self::Express { fragile } => *fragile = value,
            Self::Standard { temperature_controlled } => *temperature_controlled = value,
            Self::Economy { customs_cleared } => *customs_cleared = value,
        }
    }
}

/// A shipment of one of the three variants. The variant is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    id: Option<i64>,
    name: Option<String>,
    tracking_number: String,
    sender_name: String,
    recipient_name: String,
    origin: String,
    destination: String,
    weight: f64,
    status: ShipmentStatus,
    priority: Priority,
    estimated_delivery: Option<NaiveDate>,
    vehicle_id: Option<i64>,
    warehouse_id: Option<i64>,
    created_at: DateTime<Utc>,
    details: ShipmentDetails,
}

impl Shipment {
    /// Empty instance of `kind`: blank strings, zero weight, `PENDING`, and the
    /// variant's default priority.
    #[must_use]
    pub fn new(kind: ShipmentType) -> Self {
        Self {
            id: None,
            name: None,
            tracking_number: String::new(),
            sender_name: String::new(),
            recipient_name: String::new(),
            origin: String::new(),
            destination: String::new(),
            weight: 0.0,
            status: ShipmentStatus::Pending,
            priority: kind.default_priority(),
            estimated_delivery: None,
            vehicle_id: None,
            warehouse_id: None,
            created_at: Utc::now(),
            details: ShipmentDetails::empty(kind),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    #[must_use]
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub const fn status(&self) -> &ShipmentStatus {
        &self.status
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn estimated_delivery(&self) -> Option<NaiveDate> {
        self.estimated_delivery
    }

    #[must_use]
    pub const fn vehicle_id(&self) -> Option<i64> {
        self.vehicle_id
    }

    #[must_use]
    pub const fn warehouse_id(&self) -> Option<i64> {
        self.warehouse_id
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn details(&self) -> &ShipmentDetails {
        &self.details
    }

    #[must_use]
    pub const fn kind(&self) -> ShipmentType {
        self.details.kind()
    }

    /// `EXPRESS_SHIPMENT`, `STANDARD_SHIPMENT` or `ECONOMY_SHIPMENT`.
    #[must_use]
    pub fn entity_type(&self) -> String {
        format!("{}{SHIPMENT_SUFFIX}", self.kind().tag())
    }

    pub const fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// Rejects blank names.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be blank"));
        }
        self.name = Some(name);
        Ok(())
    }

    pub fn set_tracking_number(&mut self, tracking_number: impl Into<String>) {
        self.tracking_number = tracking_number.into();
    }

    pub fn set_sender_name(&mut self, sender_name: impl Into<String>) {
        self.sender_name = sender_name.into();
    }

    pub fn set_recipient_name(&mut self, recipient_name: impl Into<String>) {
        self.recipient_name = recipient_name.into();
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Rejects non-positive and non-finite weights.
    pub fn set_weight(&mut self, weight: f64) -> Result<(), DomainError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(DomainError::validation(format!(
                "weight must be greater than 0, got {weight}"
            )));
        }
        self.weight = weight;
        Ok(())
    }

    pub fn set_status(&mut self, status: impl Into<ShipmentStatus>) {
        self.status = status.into();
    }

    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub const fn set_estimated_delivery(&mut self, date: Option<NaiveDate>) {
        self.estimated_delivery = date;
    }

    pub const fn set_vehicle_id(&mut self, vehicle_id: Option<i64>) {
        self.vehicle_id = vehicle_id;
    }

    pub const fn set_warehouse_id(&mut self, warehouse_id: Option<i64>) {
        self.warehouse_id = warehouse_id;
    }

    pub const fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    /// Assigns the flag of whichever variant this shipment is.
    pub const fn set_special_attribute(&mut self, value: bool) {
        self.details.set_special_attribute(value);
    }

    /// Required fields present, positive weight, and `HIGH` priority for express.
    #[must_use]
    pub fn validate(&self) -> bool {
        let common = !self.tracking_number.trim().is_empty()
            && !self.sender_name.trim().is_empty()
            && !self.recipient_name.trim().is_empty()
            && self.weight > 0.0;

        match self.details {
            ShipmentDetails::Express { .. } => common && self.priority == Priority::High,
            ShipmentDetails::Standard { .. } | ShipmentDetails::Economy { .. } => common,
        }
    }

    #[must_use]
    pub fn shipping_cost(&self) -> f64 {
        pricing::shipping_cost(self.weight, &self.details)
    }

    #[must_use]
    pub const fn delivery_days(&self) -> u32 {
        pricing::delivery_days(&self.details)
    }
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "new".to_owned(), |id| id.to_string());
        write!(f, "{} [ID: {id}, Tracking: {}]", self.entity_type(), self.tracking_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(kind: ShipmentType) -> Shipment {
        let mut shipment = Shipment::new(kind);
        shipment.set_tracking_number("TRK-1");
        shipment.set_sender_name("Alice");
        shipment.set_recipient_name("Bob");
        shipment.set_weight(10.0).unwrap();
        shipment
    }

    #[test]
    fn type_parse_is_case_insensitive() {
        assert_eq!(ShipmentType::parse(Some("express")).unwrap(), ShipmentType::Express);
        assert_eq!("StAnDaRd".parse::<ShipmentType>().unwrap(), ShipmentType::Standard);
        assert!(ShipmentType::parse(Some("")).is_err());
        assert!(ShipmentType::parse(None).is_err());
        assert!(ShipmentType::parse(Some("OVERNIGHT")).is_err());
    }

    #[test]
    fn new_shipment_uses_variant_default_priority() {
        assert_eq!(Shipment::new(ShipmentType::Express).priority(), Priority::High);
        assert_eq!(Shipment::new(ShipmentType::Standard).priority(), Priority::Normal);
        assert_eq!(Shipment::new(ShipmentType::Economy).priority(), Priority::Low);
    }

    #[test]
    fn weight_setter_rejects_non_positive() {
        let mut shipment = Shipment::new(ShipmentType::Standard);
        assert!(shipment.set_weight(0.0).is_err());
        assert!(shipment.set_weight(-3.0).is_err());
        assert!(shipment.set_weight(f64::NAN).is_err());
        assert_eq!(shipment.weight(), 0.0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut shipment = Shipment::new(ShipmentType::Economy);
        assert!(shipment.set_name("   ").is_err());
        assert_eq!(shipment.name(), None);
        shipment.set_name("Pallet").unwrap();
        assert_eq!(shipment.name(), Some("Pallet"));
    }

    #[test]
    fn express_requires_high_priority() {
        let mut shipment = populated(ShipmentType::Express);
        assert!(shipment.validate());
        shipment.set_priority(Priority::Normal);
        assert!(!shipment.validate());
    }

    #[test]
    fn validate_requires_common_fields() {
        let mut shipment = populated(ShipmentType::Economy);
        assert!(shipment.validate());
        shipment.set_recipient_name(" ");
        assert!(!shipment.validate());
    }

    #[test]
    fn special_attribute_targets_own_variant() {
        let mut shipment = Shipment::new(ShipmentType::Standard);
        shipment.set_special_attribute(true);
        assert_eq!(
            shipment.details(),
            &ShipmentDetails::Standard { temperature_controlled: true }
        );
    }

    #[test]
    fn status_keeps_unknown_values_verbatim() {
        assert_eq!(ShipmentStatus::from("IN_TRANSIT"), ShipmentStatus::InTransit);
        let custom = ShipmentStatus::from("HELD_AT_CUSTOMS");
        assert_eq!(custom.as_str(), "HELD_AT_CUSTOMS");
        assert_eq!(String::from(custom), "HELD_AT_CUSTOMS");
    }

    #[test]
    fn entity_type_carries_suffix() {
        assert_eq!(Shipment::new(ShipmentType::Economy).entity_type(), "ECONOMY_SHIPMENT");
    }
}
