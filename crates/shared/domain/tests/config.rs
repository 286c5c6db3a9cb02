use freight_domain::config::{AppConfig, BusinessConfig, DatabaseConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let db = DatabaseConfig::default();
    assert_eq!(db.url, "sqlite::memory:");
    assert_eq!(db.max_connections, 5);
    assert_eq!(db.acquire_timeout_secs, 5);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.path.is_none());

    let business = BusinessConfig::default();
    assert_eq!(business.currency, "USD");
    assert_eq!(business.max_shipment_weight, 50_000.0);
    assert_eq!(business.warehouse_default_capacity, 10_000);
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "database": { "url": "sqlite://freight.db" },
        "business": { "currency": "EUR", "max_shipment_weight": 1200.5 }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.database.url, "sqlite://freight.db");
    assert_eq!(cfg.database.max_connections, 5);
    assert_eq!(cfg.business.currency, "EUR");
    assert_eq!(cfg.business.max_shipment_weight, 1200.5);
    assert_eq!(cfg.business.warehouse_default_capacity, 10_000);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn deref_mut_detaches_clones() {
    let original = AppConfig::default();
    let mut tweaked = original.clone();
    tweaked.business.currency = "GBP".to_owned();

    assert_eq!(original.business.currency, "USD");
    assert_eq!(tweaked.business.currency, "GBP");
}
