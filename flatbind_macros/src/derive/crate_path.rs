//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[flatbind(crate = "...")]` attribute value into
//! a `TokenStream` that replaces hardcoded `flatbind::` paths in generated
//! code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `flatbind` when no override is present. When the user
/// specifies `#[flatbind(crate = "...")]`, the returned tokens reference
/// the runtime through the aliased dependency name instead.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { flatbind }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::resolve;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;

    #[rstest]
    #[case::default(None, "flatbind")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("my_ns::flatbind"), "my_ns :: flatbind")]
    fn resolve_produces_expected_tokens(
        #[case] input: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = input
            .map(syn::parse_str::<syn::Path>)
            .transpose()
            .map_err(|err| anyhow!("invalid path literal: {err}"))?;
        let tokens = resolve(parsed.as_ref());
        ensure!(
            tokens.to_string() == expected,
            "expected {expected}, got {tokens}"
        );
        Ok(())
    }
}
