use freight_database::*;
use freight_kernel::builder::ShipmentBuilder;
use freight_kernel::domain::{
    DomainError, Priority, Shipment, ShipmentDetails, ShipmentStatus, Vehicle, VehicleAttributes,
    VehicleDetails, VehicleStatus, Warehouse,
};
use freight_kernel::factory::VehicleFactory;

async fn memory_db() -> Database {
    Database::builder().url("sqlite::memory:").init().await.expect("open sqlite::memory:")
}

fn shipment(tracking: &str) -> Shipment {
    ShipmentBuilder::new()
        .express()
        .name("Lab samples")
        .tracking_number(tracking)
        .sender("Clinic")
        .recipient("Lab")
        .from("Ghent")
        .to("Leuven")
        .weight(10.0)
        .fragile(true)
        .build()
        .expect("valid shipment")
}

#[tokio::test]
async fn connect_in_memory_and_record_migrations() {
    let db = memory_db().await;

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(db.pool())
        .await
        .expect("count migrations");
    assert_eq!(applied, 3);
    assert_eq!(db.url(), "sqlite::memory:");
}

#[tokio::test]
async fn reopening_a_file_database_skips_applied_migrations() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("freight.db").display());

    let first = Database::builder().url(&url).max_connections(2).init().await.expect("first open");
    first.warehouses().create(&Warehouse::new("North", "Lyon", 10).unwrap()).await.unwrap();
    first.close().await;

    let second = Database::builder().url(&url).init().await.expect("second open");
    assert_eq!(second.warehouses().find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_url_fails_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn shipment_roundtrips_through_the_store() {
    let db = memory_db().await;
    let repo = db.shipments();
    let original = shipment("TRK-RT-1");

    let id = repo.create(&original).await.expect("insert");
    let stored = repo.find_by_id(id).await.expect("select").expect("present");

    assert_eq!(stored.id(), Some(id));
    assert_eq!(stored.name(), Some("Lab samples"));
    assert_eq!(stored.tracking_number(), "TRK-RT-1");
    assert_eq!(stored.sender_name(), "Clinic");
    assert_eq!(stored.recipient_name(), "Lab");
    assert_eq!(stored.origin(), "Ghent");
    assert_eq!(stored.destination(), "Leuven");
    assert_eq!(stored.weight(), 10.0);
    assert_eq!(stored.priority(), Priority::High);
    assert_eq!(stored.status(), &ShipmentStatus::Pending);
    assert_eq!(stored.details(), &ShipmentDetails::Express { fragile: true });
    assert_eq!(stored.created_at().timestamp(), original.created_at().timestamp());

    // Absent associations stay absent, never zero.
    assert_eq!(stored.vehicle_id(), None);
    assert_eq!(stored.warehouse_id(), None);
    assert_eq!(stored.estimated_delivery(), None);

    let by_tracking = repo.find_by_tracking_number("TRK-RT-1").await.unwrap().unwrap();
    assert_eq!(by_tracking.id(), Some(id));
    assert!(repo.find_by_tracking_number("TRK-NOPE").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_tracking_number_is_reported() {
    let db = memory_db().await;
    let repo = db.shipments();

    repo.create(&shipment("TRK-DUP")).await.expect("first insert");
    let err = repo.create(&shipment("TRK-DUP")).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Duplicate { .. }), "{err}");

    let other = repo.create(&shipment("TRK-OTHER")).await.unwrap();
    let err = repo.update(other, &shipment("TRK-DUP")).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Duplicate { .. }), "{err}");
}

#[tokio::test]
async fn unknown_discriminator_surfaces_on_read() {
    let db = memory_db().await;
    sqlx::query(
        "INSERT INTO shipments (tracking_number, shipment_type, sender_name, recipient_name, \
         weight, created_at) VALUES ('TRK-X', 'DRONE', 'a', 'b', 1.0, '2026-01-01T00:00:00Z')",
    )
    .execute(db.pool())
    .await
    .expect("raw insert");

    let err = db.shipments().find_by_tracking_number("TRK-X").await.unwrap_err();
    assert!(matches!(err, DatabaseError::Domain { source: DomainError::UnknownType { .. }, .. }));

    let err = db.shipments().find_all().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Domain { .. }));
}

#[tokio::test]
async fn update_and_delete_of_missing_rows_are_not_found() {
    let db = memory_db().await;
    let repo = db.shipments();

    let err = repo.update(999, &shipment("TRK-404")).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound { .. }));
    let err = repo.delete(999).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound { .. }));
    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn update_replaces_variant_and_keeps_created_at() {
    let db = memory_db().await;
    let repo = db.shipments();
    let original = shipment("TRK-UPD");
    let id = repo.create(&original).await.unwrap();

    let replacement = ShipmentBuilder::new()
        .economy()
        .tracking_number("TRK-UPD")
        .sender("Clinic")
        .recipient("Lab")
        .weight(4.0)
        .customs_cleared(true)
        .status("IN_TRANSIT")
        .build()
        .unwrap();
    repo.update(id, &replacement).await.expect("update");

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.details(), &ShipmentDetails::Economy { customs_cleared: true });
    assert_eq!(stored.status(), &ShipmentStatus::InTransit);
    assert_eq!(stored.name(), None);
    assert_eq!(stored.created_at().timestamp(), original.created_at().timestamp());

    let updated_at: Option<String> =
        sqlx::query_scalar("SELECT updated_at FROM shipments WHERE id = ?")
            .bind(id)
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert!(updated_at.is_some());
}

#[tokio::test]
async fn status_filter_is_an_exact_match() {
    let db = memory_db().await;
    let repo = db.shipments();

    let mut in_transit = shipment("TRK-S1");
    in_transit.set_status("IN_TRANSIT");
    repo.create(&in_transit).await.unwrap();
    repo.create(&shipment("TRK-S2")).await.unwrap();

    let pending = repo.find_by_status(&ShipmentStatus::Pending).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].tracking_number(), "TRK-S2");
    assert!(repo.find_by_status(&ShipmentStatus::from("in_transit")).await.unwrap().is_empty());
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn associations_must_reference_existing_rows() {
    let db = memory_db().await;

    let mut dangling = shipment("TRK-FK");
    dangling.set_vehicle_id(Some(77));
    let err = db.shipments().create(&dangling).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }), "{err}");

    let vehicle = VehicleFactory::create_with_fields(Some("LAND"), "Truck", "TR-1", 40.0).unwrap();
    let vehicle_id = db.vehicles().create(&vehicle).await.unwrap();
    let warehouse_id =
        db.warehouses().create(&Warehouse::new("Depot", "Antwerp", 500).unwrap()).await.unwrap();

    let mut linked = shipment("TRK-FK");
    linked.set_vehicle_id(Some(vehicle_id));
    linked.set_warehouse_id(Some(warehouse_id));
    let id = db.shipments().create(&linked).await.unwrap();

    let stored = db.shipments().find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.vehicle_id(), Some(vehicle_id));
    assert_eq!(stored.warehouse_id(), Some(warehouse_id));
}

#[tokio::test]
async fn vehicle_crud_keeps_variant_columns_exclusive() {
    let db = memory_db().await;
    let repo = db.vehicles();

    let mut ship = VehicleFactory::create_with_fields(Some("sea"), "Ferry", "SEA-9", 900.0).unwrap();
    ship.apply_attributes(VehicleAttributes {
        cargo_type: Some("CONTAINER".into()),
        fuel_type: Some("LNG".into()),
        ..Default::default()
    });
    let id = repo.create(&ship).await.unwrap();

    let (cargo, fuel): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT cargo_type, fuel_type FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(cargo.as_deref(), Some("CONTAINER"));
    assert_eq!(fuel, None);

    let mut stored: Vehicle = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.details(), &VehicleDetails::Sea { cargo_type: Some("CONTAINER".into()) });
    assert_eq!(stored.operating_cost(), 900.0 * 1.2);

    stored.set_status("MAINTENANCE");
    repo.update(id, &stored).await.unwrap();
    let in_maintenance = repo.find_by_status(&VehicleStatus::Maintenance).await.unwrap();
    assert_eq!(in_maintenance.len(), 1);

    repo.delete(id).await.unwrap();
    assert!(repo.find_all().await.unwrap().is_empty());
    assert!(matches!(repo.delete(id).await, Err(DatabaseError::NotFound { .. })));
}

#[tokio::test]
async fn warehouse_crud() {
    let db = memory_db().await;
    let repo = db.warehouses();

    let id = repo.create(&Warehouse::new("Central", "Utrecht", 1_000).unwrap()).await.unwrap();
    let mut stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.current_load(), 0);

    stored.set_current_load(250).unwrap();
    repo.update(id, &stored).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().current_load(), 250);

    repo.delete(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(matches!(repo.update(id, &stored).await, Err(DatabaseError::NotFound { .. })));
}
