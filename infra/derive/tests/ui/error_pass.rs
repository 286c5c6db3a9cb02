use freight_derive::freight_error;
use std::borrow::Cow;

#[freight_error]
pub enum StoreError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), StoreError> {
    Err(std::io::Error::other("disk gone")).context("Opening store")
}

fn main() {
    let _ = open();
    let _ = StoreError::from("fallback");
}
