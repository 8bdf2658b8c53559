#![allow(unreachable_pub)]

//! Error-enum attribute for the sizer crates.
//!
//! `sizer-chart` declares `ChartError` through [`sizer_error`]; callers attach context with the
//! generated `ChartErrorExt::context`. The expanding crate must depend on `thiserror`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a `thiserror` error with attachable caller context.
///
/// * Derives `Debug` and `thiserror::Error` when the enum does not already.
/// * Emits `<Name>Ext<T>` with `context(..)` for `Result<T, Name>`; it fills the `context`
///   field of whichever variant the error is. Variants without such a field are left as they
///   are.
/// * Emits a private `format_context` for `#[error(..)]` strings, rendering `" (context)"` or
///   nothing.
///
/// A `context` field must be `Option<Cow<'static, str>>`; anything else is a compile error.
///
/// ```rust,ignore
/// #[sizer_derive::sizer_error]
/// pub enum ChartError {
///     #[error("Unparsable size key{}: '{key}'", format_context(.context))]
///     UnparsableKey { key: String, context: Option<Cow<'static, str>> },
/// }
///
/// chart.get_or_create("-2XS").context("importing catalog row 7")?;
/// ```
#[proc_macro_attribute]
pub fn sizer_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
