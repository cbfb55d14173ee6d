//! Procedural macros for `flatbind`.
//!
//! The [`FlatBind`] derive generates an implementation of the runtime's
//! `FlatBind` trait. The generated `bind` walks the struct's named fields
//! in declaration order, resolving each from a flattened dotted-key
//! dictionary and honouring the `#[flatbind(...)]` attribute vocabulary:
//! `name` overrides the key segment (`"_"` skips the field), `default`
//! supplies a textual fallback, and `required` turns an absent value into
//! an error. Struct-level `rename_all` applies a naming convention to
//! fields without an explicit `name`, and `crate` redirects generated
//! paths when the runtime crate is renamed.
//!
//! See the `flatbind` crate for the runtime resolvers this macro targets.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro generating `flatbind::FlatBind` for a named-field struct.
#[proc_macro_derive(FlatBind, attributes(flatbind))]
pub fn derive_flat_bind(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as DeriveInput);
    derive::expand(&parsed)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
