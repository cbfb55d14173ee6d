//! Expansion pipeline for the `FlatBind` derive macro.
//!
//! `expand` parses the input struct and its `#[flatbind(...)]` attributes,
//! validates the field shapes the binder supports, and emits a `FlatBind`
//! implementation that resolves each field in declaration order. Invalid
//! input is rejected eagerly with spanned errors so diagnostics point at
//! the offending field or attribute.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;
mod rename;
#[cfg(test)]
mod tests;
mod type_utils;

/// Expands `#[derive(FlatBind)]` into a trait implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (ident, struct_attrs, fields) = parse::parse_input(input)?;
    generate::expand_struct(&ident, &struct_attrs, &fields)
}
