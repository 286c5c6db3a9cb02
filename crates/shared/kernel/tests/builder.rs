use chrono::NaiveDate;
use freight_kernel::prelude::*;

fn complete() -> ShipmentBuilder {
    ShipmentBuilder::new()
        .tracking_number("TRK-200")
        .sender("Alice")
        .recipient("Bob")
        .from("Lisbon")
        .to("Porto")
        .weight(10.0)
}

fn missing_field(result: Result<Shipment, DomainError>) -> &'static str {
    match result {
        Err(DomainError::MissingField { field }) => field,
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn required_fields_are_checked_in_order() {
    assert_eq!(missing_field(ShipmentBuilder::new().build()), "type");
    assert_eq!(missing_field(ShipmentBuilder::new().standard().build()), "trackingNumber");
    assert_eq!(
        missing_field(ShipmentBuilder::new().standard().tracking_number("T").build()),
        "senderName"
    );
    assert_eq!(
        missing_field(ShipmentBuilder::new().standard().tracking_number("T").sender("S").build()),
        "recipientName"
    );
    assert_eq!(
        missing_field(
            ShipmentBuilder::new().standard().tracking_number("T").sender("S").recipient("R").build()
        ),
        "weight"
    );
}

#[test]
fn missing_tracking_number_is_reported_even_with_a_bad_type() {
    // Field checks run before the factory resolves the type.
    let result = ShipmentBuilder::new().kind("TELEPORT").sender("S").build();
    assert_eq!(missing_field(result), "trackingNumber");
}

#[test]
fn non_positive_weight_fails_on_weight() {
    assert_eq!(missing_field(complete().standard().weight(0.0).build()), "weight");
    assert_eq!(missing_field(complete().standard().weight(-1.0).build()), "weight");
}

#[test]
fn unknown_type_surfaces_from_factory() {
    let result = complete().kind("drone").build();
    assert!(matches!(result, Err(DomainError::UnknownType { .. })));
}

#[test]
fn express_fragile_build_prices_as_expected() {
    let shipment = complete().express().fragile(true).build().unwrap();

    assert_eq!(shipment.kind(), ShipmentType::Express);
    assert_eq!(shipment.priority(), Priority::High);
    assert!(shipment.validate());
    assert_eq!(shipment.shipping_cost(), 225.0);
    assert_eq!(shipment.delivery_days(), 2);
}

#[test]
fn plain_kind_defaults_to_normal_priority() {
    for kind in ["express", "standard", "economy"] {
        let shipment = complete().kind(kind).build().unwrap();
        assert_eq!(shipment.priority(), Priority::Normal, "{kind}");
        assert_eq!(shipment.status(), &ShipmentStatus::Pending, "{kind}");
    }

    let express = complete().kind("express").build().unwrap();
    assert!(!express.validate());

    let promoted = complete().kind("express").priority(Priority::High).build().unwrap();
    assert!(promoted.validate());

    let shortcut = complete().shipment_type(ShipmentType::Economy).build().unwrap();
    assert_eq!(shortcut.priority(), Priority::Low);
}

#[test]
fn blank_status_keeps_pending() {
    let shipment = complete().express().status("").build().unwrap();
    assert_eq!(shipment.status(), &ShipmentStatus::Pending);

    let shipment = complete().express().status("  ").build().unwrap();
    assert_eq!(shipment.status(), &ShipmentStatus::Pending);

    let shipment = complete().express().status("IN_TRANSIT").build().unwrap();
    assert_eq!(shipment.status(), &ShipmentStatus::InTransit);
}

#[test]
fn economy_and_standard_convenience_setters() {
    let economy = complete().economy().customs_cleared(false).build().unwrap();
    assert_eq!(economy.priority(), Priority::Low);
    assert_eq!(economy.shipping_cost(), 45.0);
    assert_eq!(economy.delivery_days(), 13);

    let standard = complete().standard().temperature_controlled(false).build().unwrap();
    assert_eq!(standard.priority(), Priority::Normal);
    assert_eq!(standard.shipping_cost(), 80.0);
    assert_eq!(standard.delivery_days(), 5);
}

#[test]
fn optional_fields_are_applied_when_set() {
    let date = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
    let shipment = complete()
        .standard()
        .name("Books")
        .status("IN_TRANSIT")
        .estimated_delivery(date)
        .vehicle_id(4)
        .warehouse_id(9)
        .build()
        .unwrap();

    assert_eq!(shipment.name(), Some("Books"));
    assert_eq!(shipment.status(), &ShipmentStatus::InTransit);
    assert_eq!(shipment.estimated_delivery(), Some(date));
    assert_eq!(shipment.vehicle_id(), Some(4));
    assert_eq!(shipment.warehouse_id(), Some(9));
}

#[test]
fn unset_optionals_stay_absent() {
    let shipment = complete().economy().build().unwrap();
    assert_eq!(shipment.status(), &ShipmentStatus::Pending);
    assert_eq!(shipment.estimated_delivery(), None);
    assert_eq!(shipment.vehicle_id(), None);
    assert_eq!(shipment.warehouse_id(), None);
    assert_eq!(shipment.details(), &ShipmentDetails::Economy { customs_cleared: false });
}
