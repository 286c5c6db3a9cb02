use freight_database::DatabaseError;
use freight_kernel::config::ConfigError;
use freight_logger::LoggerError;
use freight_shipments::ShipmentsError;
use freight_vehicles::VehiclesError;
use freight_warehouses::WarehousesError;
use std::borrow::Cow;

#[freight_derive::freight_error]
pub enum PlatformError {
    #[error("Platform validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Platform missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Configuration failed{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Store setup failed{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },

    #[error("Logging setup failed{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    #[error("Shipments slice failed{}: {source}", format_context(.context))]
    Shipments { source: ShipmentsError, context: Option<Cow<'static, str>> },

    #[error("Vehicles slice failed{}: {source}", format_context(.context))]
    Vehicles { source: VehiclesError, context: Option<Cow<'static, str>> },

    #[error("Warehouses slice failed{}: {source}", format_context(.context))]
    Warehouses { source: WarehousesError, context: Option<Cow<'static, str>> },
}
