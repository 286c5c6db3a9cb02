use chrono::{DateTime, NaiveDate, Utc};
use freight_kernel::domain::{DomainError, Shipment, ShipmentDetails, ShipmentType};
use freight_kernel::factory::ShipmentFactory;

/// One row of the `shipments` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShipmentRow {
    pub id: Option<i64>,
    pub tracking_number: String,
    /// Bare variant tag (`EXPRESS`), never the `_SHIPMENT` entity type.
    pub shipment_type: String,
    pub name: Option<String>,
    pub sender_name: String,
    pub recipient_name: String,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub status: String,
    pub priority: String,
    pub estimated_delivery: Option<NaiveDate>,
    pub vehicle_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub is_fragile: bool,
    pub temperature_controlled: bool,
    pub customs_cleared: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Shipment> for ShipmentRow {
    fn from(shipment: &Shipment) -> Self {
        let (is_fragile, temperature_controlled, customs_cleared) = match *shipment.details() {
            ShipmentDetails::Express { fragile } => (fragile, false, false),
            ShipmentDetails::Standard { temperature_controlled } => {
                (false, temperature_controlled, false)
            },
            ShipmentDetails::Economy { customs_cleared } => (false, false, customs_cleared),
        };

        Self {
            id: shipment.id(),
            tracking_number: shipment.tracking_number().to_owned(),
            shipment_type: shipment.kind().tag().to_owned(),
            name: shipment.name().map(str::to_owned),
            sender_name: shipment.sender_name().to_owned(),
            recipient_name: shipment.recipient_name().to_owned(),
            origin: shipment.origin().to_owned(),
            destination: shipment.destination().to_owned(),
            weight: shipment.weight(),
            status: shipment.status().as_str().to_owned(),
            priority: shipment.priority().as_str().to_owned(),
            estimated_delivery: shipment.estimated_delivery(),
            vehicle_id: shipment.vehicle_id(),
            warehouse_id: shipment.warehouse_id(),
            is_fragile,
            temperature_controlled,
            customs_cleared,
            created_at: shipment.created_at(),
            updated_at: None,
        }
    }
}

impl TryFrom<ShipmentRow> for Shipment {
    type Error = DomainError;

    fn try_from(row: ShipmentRow) -> Result<Self, Self::Error> {
        let mut shipment = ShipmentFactory::create(Some(&row.shipment_type))?;

        shipment.set_id(row.id);
        if let Some(name) = row.name.filter(|name| !name.trim().is_empty()) {
            shipment.set_name(name)?;
        }
        shipment.set_tracking_number(row.tracking_number);
        shipment.set_sender_name(row.sender_name);
        shipment.set_recipient_name(row.recipient_name);
        shipment.set_origin(row.origin);
        shipment.set_destination(row.destination);
        shipment.set_weight(row.weight)?;
        shipment.set_status(row.status);
        shipment.set_priority(row.priority.parse()?);
        shipment.set_estimated_delivery(row.estimated_delivery);
        shipment.set_vehicle_id(row.vehicle_id);
        shipment.set_warehouse_id(row.warehouse_id);
        shipment.set_created_at(row.created_at);

        let special = match shipment.kind() {
            ShipmentType::Express => row.is_fragile,
            ShipmentType::Standard => row.temperature_controlled,
            ShipmentType::Economy => row.customs_cleared,
        };
        shipment.set_special_attribute(special);

        Ok(shipment)
    }
}
