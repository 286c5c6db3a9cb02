//! Kernel utilities shared across the freight slices.
//! Keep this crate lightweight: it hosts the construction pipeline for variant
//! entities and the layered config loader.
//!
//! ## Building a shipment
//! ```rust
//! use freight_kernel::builder::ShipmentBuilder;
//!
//! let shipment = ShipmentBuilder::new()
//!     .express()
//!     .tracking_number("TRK-1001")
//!     .sender("Alice")
//!     .recipient("Bob")
//!     .weight(10.0)
//!     .fragile(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(shipment.shipping_cost(), 225.0);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use freight_kernel::config::load_config;
//! use freight_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("config/freight")).unwrap_or_default();
//! ```
pub mod builder;
pub mod config;
pub mod factory;
pub mod prelude;

pub use freight_domain as domain;
