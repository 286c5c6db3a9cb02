use freight_database::DatabaseError;
use freight_kernel::domain::{DomainError, ErrorClass};
use std::borrow::Cow;

#[freight_derive::freight_error]
pub enum WarehousesError {
    /// The assembled warehouse is inconsistent (e.g. load above capacity).
    #[error("Invalid warehouse{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Warehouse not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Warehouse rejected{}: {source}", format_context(.context))]
    Domain { source: DomainError, context: Option<Cow<'static, str>> },

    #[error("Warehouse store error{}: {source}", format_context(.context))]
    Database { source: DatabaseError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal warehouses error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl WarehousesError {
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
