use freight_database::Database;
use freight_kernel::domain::ErrorClass;
use freight_kernel::domain::config::AppConfig;
use freight_vehicles::*;

async fn vehicles() -> Vehicles {
    let db = Database::builder().url("sqlite::memory:").init().await.expect("open store");
    Vehicles::from_config(&AppConfig::default(), &db)
}

fn plane(plate: &str) -> VehicleDto {
    VehicleDto {
        vehicle_type: Some("air".into()),
        name: Some("Cargo jet".into()),
        license_plate: Some(plate.into()),
        capacity: Some(100.0),
        max_altitude: Some(12_000),
        cargo_type: Some("BULK".into()),
        ..VehicleDto::default()
    }
}

#[tokio::test]
async fn init_registers_the_slice() {
    let db = Database::builder().url("sqlite::memory:").init().await.unwrap();
    let slice = init(&AppConfig::default(), &db).expect("init");
    assert!(slice.downcast::<Vehicles>().is_some());
}

#[tokio::test]
async fn create_defaults_status_and_keeps_only_matching_attribute() {
    let vehicles = vehicles().await;

    let created = vehicles.create_vehicle(plane("AIR-1")).await.expect("create");
    assert!(created.id.is_some());
    assert_eq!(created.vehicle_type.as_deref(), Some("AIR"));
    assert_eq!(created.status.as_deref(), Some("AVAILABLE"));
    assert_eq!(created.max_altitude, Some(12_000));
    assert_eq!(created.cargo_type, None);

    let stored = vehicles.get_vehicle(created.id.unwrap()).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn required_fields_are_checked_in_order() {
    let vehicles = vehicles().await;

    let cases = [
        (VehicleDto { vehicle_type: None, name: None, ..plane("AIR-2") }, "vehicleType"),
        (VehicleDto { name: Some("  ".into()), license_plate: None, ..plane("AIR-2") }, "name"),
        (VehicleDto { license_plate: None, capacity: None, ..plane("AIR-2") }, "licensePlate"),
        (VehicleDto { capacity: Some(0.0), ..plane("AIR-2") }, "capacity"),
    ];
    for (dto, field) in cases {
        let err = vehicles.create_vehicle(dto).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::BadInput);
        assert!(err.to_string().ends_with(field), "{err}");
    }

    let submarine = VehicleDto { vehicle_type: Some("submarine".into()), ..plane("AIR-2") };
    let err = vehicles.create_vehicle(submarine).await.unwrap_err();
    assert!(matches!(err, VehiclesError::Domain { .. }));
    assert!(vehicles.list_vehicles(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn operating_cost_uses_the_type_rate() {
    let vehicles = vehicles().await;
    let truck = VehicleDto {
        vehicle_type: Some("LAND".into()),
        name: Some("Truck".into()),
        license_plate: Some("TR-1".into()),
        capacity: Some(40.0),
        fuel_type: Some("DIESEL".into()),
        ..VehicleDto::default()
    };
    let id = vehicles.create_vehicle(truck).await.unwrap().id.unwrap();

    let cost = vehicles.operating_cost(id).await.unwrap();
    assert_eq!(cost.cost, 40.0 * 0.8);
    assert_eq!(cost.vehicle_type, "LAND");
    assert_eq!(cost.currency, "USD");

    assert_eq!(vehicles.operating_cost(id + 1).await.unwrap_err().class(), ErrorClass::NotFound);
}

#[tokio::test]
async fn update_list_and_delete() {
    let vehicles = vehicles().await;
    let id = vehicles.create_vehicle(plane("AIR-3")).await.unwrap().id.unwrap();
    vehicles.create_vehicle(plane("AIR-4")).await.unwrap();

    let ship = VehicleDto {
        vehicle_type: Some("sea".into()),
        status: Some("MAINTENANCE".into()),
        ..plane("AIR-3")
    };
    let updated = vehicles.update_vehicle(id, ship).await.unwrap();
    assert_eq!(updated.vehicle_type.as_deref(), Some("SEA"));
    assert_eq!(updated.cargo_type.as_deref(), Some("BULK"));
    assert_eq!(updated.max_altitude, None);

    assert_eq!(vehicles.list_vehicles(None).await.unwrap().len(), 2);
    let in_maintenance = vehicles.list_vehicles(Some("MAINTENANCE")).await.unwrap();
    assert_eq!(in_maintenance.len(), 1);
    assert_eq!(in_maintenance[0].id, Some(id));

    vehicles.delete_vehicle(id).await.unwrap();
    assert_eq!(vehicles.get_vehicle(id).await.unwrap_err().class(), ErrorClass::NotFound);
    assert_eq!(vehicles.delete_vehicle(id).await.unwrap_err().class(), ErrorClass::NotFound);
    assert_eq!(
        vehicles.update_vehicle(id, plane("AIR-9")).await.unwrap_err().class(),
        ErrorClass::NotFound
    );
}
