#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the freight crates: error enums, API data models
//! and feature slice handles.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros in doctests; the integration tests under `tests/` exercise them instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Defines a domain error enum.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already present.
/// * **Context**: a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Conversions**: `From<Source>` for variants holding a `source` field (or a
///   field marked `#[source]`), enabling `?` on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// Variants must use named fields. A `context` field must be
/// `Option<Cow<'static, str>>`, and every variant with a source must have one.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[freight_derive::freight_error]
/// pub enum StoreError {
///     #[error("Store I/O failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn open(path: &str) -> Result<std::fs::File, StoreError> {
///     std::fs::File::open(path).context("Opening store file")
/// }
/// ```
#[proc_macro_attribute]
pub fn freight_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Declares a data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, renames fields to
/// `camelCase` and rejects unknown fields. Both policies can be changed:
///
/// ```rust,ignore
/// #[freight_derive::api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct LegacyPayload {
///     pub tracking_number: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(args.into(), input).into()
}

/// Turns a struct into a cheaply cloneable feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// dereferences to it and implements `FeatureSlice` for registration in the
/// platform registry.
///
/// ```rust,ignore
/// #[freight_derive::freight_slice]
/// pub struct Shipments {
///     repository: ShipmentRepository,
/// }
///
/// let slice = Shipments::new(ShipmentsInner { repository });
/// ```
#[proc_macro_attribute]
pub fn freight_slice(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
