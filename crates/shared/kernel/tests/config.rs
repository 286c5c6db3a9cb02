use freight_kernel::config::{ConfigError, env_overrides, load_config, load_config_with};
use freight_kernel::domain::config::AppConfig;
use serial_test::serial;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn loads_file_and_keeps_defaults() {
    let file = write_config(
        r#"
        [database]
        url = "sqlite://freight.db"

        [business]
        max_shipment_weight = 900.0
        "#,
    );

    let cfg: AppConfig = load_config(Some(file.path())).expect("load config");
    assert_eq!(cfg.database.url, "sqlite://freight.db");
    assert_eq!(cfg.business.max_shipment_weight, 900.0);
    assert_eq!(cfg.business.currency, "USD");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    let file = write_config("[business]\ncurrency = \"EUR\"\n");

    let mut vars = config::Map::new();
    vars.insert("FREIGHT__BUSINESS__CURRENCY".to_owned(), "CHF".to_owned());
    vars.insert("UNRELATED__BUSINESS__CURRENCY".to_owned(), "JPY".to_owned());

    let cfg: AppConfig =
        load_config_with(Some(file.path()), env_overrides().source(Some(vars))).expect("load config");
    assert_eq!(cfg.business.currency, "CHF");
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let result: Result<AppConfig, ConfigError> = load_config(Some("/definitely/not/here.toml"));
    assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
}
