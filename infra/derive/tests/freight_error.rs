use freight_derive::freight_error;
use std::borrow::Cow;

#[freight_error]
pub enum SampleError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn freight_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}

#[test]
fn source_errors_convert_with_context() {
    let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
    let err = result.context("Reading manifest").unwrap_err();

    assert!(matches!(err, SampleError::Io { context: Some(_), .. }));
    assert_eq!(err.to_string(), "I/O error (Reading manifest): disk gone");
}

#[test]
fn question_mark_uses_generated_from() {
    fn fail() -> Result<(), SampleError> {
        Err::<(), _>(std::io::Error::other("boom"))?;
        Ok(())
    }

    let err = fail().unwrap_err();
    assert_eq!(err.to_string(), "I/O error: boom");
}

#[test]
fn context_overrides_on_own_result() {
    let result: Result<(), SampleError> = Err("plain".into());
    let err = result.context("while testing").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while testing): plain");
}

#[test]
fn variants_without_context_are_left_alone() {
    let result: Result<(), SampleError> = Err(SampleError::MissingField { field: "weight" });
    let err = result.context("ignored").unwrap_err();
    assert_eq!(err.to_string(), "Missing field: weight");
}

#[test]
fn owned_strings_become_internal_errors() {
    let err = SampleError::from(format!("code {}", 7));
    assert!(matches!(err, SampleError::Internal { context: None, .. }));
}
