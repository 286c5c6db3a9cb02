use freight_database::DatabaseError;
use freight_kernel::domain::{DomainError, ErrorClass};
use std::borrow::Cow;

/// Error types specific to the shipments feature.
#[freight_derive::freight_error]
pub enum ShipmentsError {
    /// The assembled shipment breaks a business rule.
    #[error("Invalid shipment{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Shipment not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Construction pipeline rejection (missing field, unknown type, bad value).
    #[error("Shipment rejected{}: {source}", format_context(.context))]
    Domain { source: DomainError, context: Option<Cow<'static, str>> },

    #[error("Shipment store error{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal shipments error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ShipmentsError {
    pub(crate) fn not_found(key: impl std::fmt::Display) -> Self {
        Self::NotFound { message: key.to_string().into(), context: None }
    }

    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation { .. } => ErrorClass::BadInput,
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::Domain { source, .. } => source.class(),
            Self::Database { source, .. } => source.class(),
            Self::Internal { .. } => ErrorClass::Internal,
        }
    }
}
