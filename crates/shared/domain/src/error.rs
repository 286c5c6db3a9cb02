use std::borrow::Cow;

/// Coarse outcome class a transport layer maps onto its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    BadInput,
    NotFound,
    Conflict,
    Internal,
}

#[freight_derive::freight_error]
pub enum DomainError {
    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing or invalid required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unknown {kind} type{}: '{value}'", format_context(.context))]
    UnknownType {
        kind: &'static str,
        value: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

impl DomainError {
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }

    /// `value` is `None` when the caller supplied no type at all.
    pub fn unknown_type(kind: &'static str, value: Option<&str>) -> Self {
        let value = value.map_or(Cow::Borrowed("<absent>"), |v| Cow::Owned(v.to_owned()));
        Self::UnknownType { kind, value, context: None }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation { .. } | Self::MissingField { .. } | Self::UnknownType { .. } => {
                ErrorClass::BadInput
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_type_renders_placeholder() {
        let err = DomainError::unknown_type("shipment", None);
        assert_eq!(err.to_string(), "Unknown shipment type: '<absent>'");
    }

    #[test]
    fn context_is_appended_to_message() {
        let res: Result<(), DomainError> = Err(DomainError::validation("weight must be positive"));
        let err = res.context("Shipment weight").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed (Shipment weight): weight must be positive");
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = DomainError::MissingField { field: "trackingNumber" };
        assert!(err.to_string().contains("trackingNumber"));
        assert_eq!(err.class(), ErrorClass::BadInput);
    }
}
