use freight_database::DatabaseError;
use freight_kernel::domain::{DomainError, ErrorClass};
use std::borrow::Cow;

/// Error types specific to the vehicles feature.
#[freight_derive::freight_error]
pub enum VehiclesError {
    #[error("Vehicle not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Missing field, unknown type or a value a setter refused.
    #[error("Vehicle rejected{}: {source}", format_context(.context))]
    Domain { source: DomainError, context: Option<Cow<'static, str>> },

    #[error("Vehicle store error{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal vehicles error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl VehiclesError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::Domain { source, .. } => source.class(),
            Self::Database { source, .. } => source.class(),
            Self::Internal { .. } => ErrorClass::Internal,
        }
    }
}
