#![allow(unreachable_pub)]

//! # Macros
//!
//! Attribute macros shared by the site crates:
//!
//! * [`macro@codr_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@main`] bootstraps a Tokio runtime from a named profile (re-exported by
//!   `codr-runtime`, use it through that crate).

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime profile.
///
/// Turns an `async fn main() -> Result<..>` into a plain `fn main` that builds the
/// runtime with `codr_runtime::build_runtime_with_config` and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - server profile.
/// * `memory_efficient` - small footprint for short-lived tools.
/// * `default` (or no argument) - worker threads detected from the host.
///
/// ```rust,ignore
/// #[codr_runtime::main(memory_efficient)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a crate error enum.
///
/// Every variant must use named fields and carry a
/// `context: Option<Cow<'static, str>>` field. A field named `source` (or marked
/// `#[source]`/`#[from]`) makes the variant wrap an upstream error.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every wrapped source type.
/// * `From<Source>` for every wrapped source type, so `?` works.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for use in `#[error(..)]` strings.
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[codr_derive::codr_error]
/// pub enum FetchError {
///     #[error("HTTP error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch() -> Result<(), FetchError> {
///     request().context("Loading the home page")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn codr_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
