//! Attribute and input parsing for the `FlatBind` derive macro.
//!
//! This module gathers the struct identifier, its named fields, and all
//! `#[flatbind(...)]` metadata in one pass so macro expansion can fail
//! fast with useful errors.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, LitStr, Token, parenthesized};

use super::rename::RenameRule;

/// Struct-level attributes recognised by `#[derive(FlatBind)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Naming convention applied to fields without an explicit `name`.
    pub rename_all: Option<RenameRule>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[flatbind(crate = "my_alias")]`, generated code
    /// references the runtime through `my_alias::` instead of
    /// `flatbind::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(FlatBind)]`.
///
/// - `name` overrides the derived key segment; the sentinel `"_"` skips
///   the field entirely and an empty string counts as absent.
/// - `default` supplies a textual fallback coerced through the string
///   rules when the dictionary has no entry; an empty string counts as
///   absent.
/// - `required` makes a missing value an error instead of a no-op.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub name: Option<LitStr>,
    pub default: Option<LitStr>,
    pub required: bool,
}

/// A named field paired with its parsed attribute metadata.
pub(crate) struct BoundField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
}

/// Iterate all `#[flatbind(...)]` attributes once and apply a callback.
fn parse_flatbind<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("flatbind")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Parses a string literal value for `key`.
fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    match literal {
        Lit::Str(value) => Ok(value),
        _ => Err(syn::Error::new(span, format!("{key} must be a string"))),
    }
}

/// Stores a string attribute value, treating the empty string as absent.
fn assign_non_empty(target: &mut Option<LitStr>, value: LitStr) {
    if !value.value().is_empty() {
        *target = Some(value);
    }
}

/// Extracts `#[flatbind(...)]` metadata applied to the struct itself.
///
/// `rename_all` and `crate` are recognised. Unknown keys are discarded so
/// callers keep compiling when new attributes appear; this improves
/// forwards compatibility at the cost of allowing silent typos.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_flatbind(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename_all") => {
                let value = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameRule::parse(&value)?);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => discard_unknown(meta),
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[flatbind(...)]` attributes.
///
/// Recognised keys are `name`, `default`, and `required` (bare or
/// `required = true`). Unknown keys are ignored, matching
/// [`parse_struct_attrs`] for forwards compatibility.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_flatbind(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("name") => {
                assign_non_empty(&mut out.name, lit_str(meta, "name")?);
                Ok(())
            }
            Some("default") => {
                assign_non_empty(&mut out.default, lit_str(meta, "default")?);
                Ok(())
            }
            Some("required") => {
                // Accept both `required` and `required = true`.
                let flag = if meta.input.peek(Token![=]) {
                    meta.value()?.parse::<syn::LitBool>()?.value
                } else {
                    true
                };
                out.required = flag;
                Ok(())
            }
            _ => discard_unknown(meta),
        }
    })?;
    Ok(out)
}

/// Gathers information from the user-provided struct.
///
/// The helper collects the struct identifier, struct-level attributes,
/// and every named field with its metadata in one pass. Enums, unions,
/// tuple and unit structs, and generic structs are rejected here so
/// expansion fails fast with a spanned diagnostic.
pub(crate) fn parse_input(
    input: &DeriveInput,
) -> syn::Result<(syn::Ident, StructAttrs, Vec<BoundField>)> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FlatBind cannot be derived for generic structs",
        ));
    }
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FlatBind requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &ident,
                "FlatBind can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(
                field,
                "FlatBind requires named fields",
            ));
        };
        fields.push(BoundField {
            ident: field_ident,
            ty: field.ty.clone(),
            attrs: parse_field_attrs(&field.attrs)?,
        });
    }
    Ok((ident, struct_attrs, fields))
}
