use chrono::{DateTime, NaiveDate, Utc};
use freight_kernel::domain::{Shipment, ShipmentDetails};

/// Wire shape of a shipment, used for both input and output.
///
/// Every field is optional on input; the construction pipeline decides which ones are
/// required. Only the flag matching the shipment's own variant is filled on output.
#[freight_derive::api_model]
#[derive(Default, Clone, PartialEq)]
pub struct ShipmentDto {
    pub id: Option<i64>,
    /// `EXPRESS`, `STANDARD` or `ECONOMY`, case-insensitive on input.
    pub shipment_type: Option<String>,
    pub name: Option<String>,
    pub tracking_number: Option<String>,
    pub sender_name: Option<String>,
    pub recipient_name: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub weight: Option<f64>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
    pub vehicle_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fragile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_controlled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_cleared: Option<bool>,
    /// Output only; ignored on input.
    pub created_at: Option<DateTime<Utc>>,
}

impl ShipmentDto {
    /// The special attribute the caller asked for: the first present of `isFragile`,
    /// `temperatureControlled`, `customsCleared`, whatever the requested type.
    #[must_use]
    pub const fn special_attribute(&self) -> Option<bool> {
        match (self.is_fragile, self.temperature_controlled, self.customs_cleared) {
            (Some(value), _, _) | (None, Some(value), _) | (None, None, Some(value)) => Some(value),
            (None, None, None) => None,
        }
    }
}

impl From<&Shipment> for ShipmentDto {
    fn from(shipment: &Shipment) -> Self {
        let mut dto = Self {
            id: shipment.id(),
            shipment_type: Some(shipment.kind().tag().to_owned()),
            name: shipment.name().map(str::to_owned),
            tracking_number: Some(shipment.tracking_number().to_owned()),
            sender_name: Some(shipment.sender_name().to_owned()),
            recipient_name: Some(shipment.recipient_name().to_owned()),
            origin: Some(shipment.origin().to_owned()),
            destination: Some(shipment.destination().to_owned()),
            weight: Some(shipment.weight()),
            status: Some(shipment.status().as_str().to_owned()),
            priority: Some(shipment.priority().as_str().to_owned()),
            estimated_delivery: shipment.estimated_delivery(),
            vehicle_id: shipment.vehicle_id(),
            warehouse_id: shipment.warehouse_id(),
            created_at: Some(shipment.created_at()),
            ..Self::default()
        };

        match *shipment.details() {
            ShipmentDetails::Express { fragile } => dto.is_fragile = Some(fragile),
            ShipmentDetails::Standard { temperature_controlled } => {
                dto.temperature_controlled = Some(temperature_controlled);
            },
            ShipmentDetails::Economy { customs_cleared } => dto.customs_cleared = Some(customs_cleared),
        }
        dto
    }
}

/// Price and transit time of a stored shipment.
#[freight_derive::api_model]
#[derive(Clone, PartialEq)]
pub struct ShipmentQuote {
    pub tracking_number: String,
    pub shipment_type: String,
    pub cost: f64,
    pub currency: String,
    pub delivery_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_present_flag_wins() {
        let dto = ShipmentDto {
            temperature_controlled: Some(false),
            customs_cleared: Some(true),
            ..ShipmentDto::default()
        };
        assert_eq!(dto.special_attribute(), Some(false));
        assert_eq!(ShipmentDto::default().special_attribute(), None);
    }

    #[test]
    fn wire_names_are_camel_case_and_strict() {
        let dto: ShipmentDto = serde_json::from_str(
            r#"{"shipmentType":"express","trackingNumber":"TRK-1","isFragile":true}"#,
        )
        .unwrap();
        assert_eq!(dto.shipment_type.as_deref(), Some("express"));
        assert_eq!(dto.is_fragile, Some(true));

        let unknown = serde_json::from_str::<ShipmentDto>(r#"{"tracking_number":"TRK-1"}"#);
        assert!(unknown.is_err());
    }
}
