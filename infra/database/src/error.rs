use freight_kernel::domain::{DomainError, ErrorClass};
use std::borrow::Cow;

/// A specialized [`DatabaseError`] enum of this crate.
#[freight_derive::freight_error]
pub enum DatabaseError {
    /// Missing builder parameters, or a row the store rejected by constraint.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when connectivity or health checks fail.
    #[error("Database connection failed{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Migration failures or checksum drift.
    #[error("Migration error{}: {message}", format_context(.context))]
    Migration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Record not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A UNIQUE constraint rejected the row.
    #[error("Duplicate record{}: {message}", format_context(.context))]
    Duplicate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The store accepted a write but did not behave as expected (e.g. no generated id).
    #[error("Persistence error{}: {message}", format_context(.context))]
    Persistence { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A stored row could not be turned back into a domain value.
    #[error("Domain error{}: {source}", format_context(.context))]
    Domain {
        #[source]
        source: DomainError,
        context: Option<Cow<'static, str>>,
    },

    /// A wrapper for underlying `sqlx` driver errors.
    #[error("SQL error{}: {source}", format_context(.context))]
    Sqlx {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal database error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DatabaseError {
    /// Classifies a driver error: constraint violations become `Duplicate` or
    /// `Validation`, everything else stays a `Sqlx` error.
    pub(crate) fn from_write(err: sqlx::Error, context: impl Into<Cow<'static, str>>) -> Self {
        let context = Some(context.into());
        if let sqlx::Error::Database(db_err) = &err {
            let message = Cow::Owned(db_err.message().to_owned());
            if db_err.is_unique_violation() {
                return Self::Duplicate { message, context };
            }
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                return Self::Validation { message, context };
            }
        }
        Self::Sqlx { source: err, context }
    }

    /// Routing class: constraint rejections are bad input, a taken unique key is a
    /// conflict, undecodable rows and driver failures are internal.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation { .. } => ErrorClass::BadInput,
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::Duplicate { .. } => ErrorClass::Conflict,
            Self::Connection { .. }
            | Self::Migration { .. }
            | Self::Persistence { .. }
            | Self::Domain { .. }
            | Self::Sqlx { .. }
            | Self::Internal { .. } => ErrorClass::Internal,
        }
    }

    pub(crate) fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        Self::NotFound { message: format!("{entity} {key}").into(), context: None }
    }
}
