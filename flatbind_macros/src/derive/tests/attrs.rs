//! Tests for `#[flatbind(...)]` attribute parsing behaviour.

use super::super::parse::{parse_field_attrs, parse_input, parse_struct_attrs};
use super::super::rename::RenameRule;
use anyhow::{Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

#[rstest]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flatbind(rename_all = "camelCase")]
        struct Demo {
            #[flatbind(name = "id", required)]
            ident: i64,
            #[flatbind(default = "8080")]
            port: i64,
            plain: String,
        }
    };

    let (ident, struct_attrs, fields) = parse_input(&input).map_err(|err| anyhow!(err))?;

    ensure!(ident == "Demo", "expected Demo ident, got {ident}");
    ensure!(
        struct_attrs.rename_all == Some(RenameRule::Camel),
        "expected the camelCase rule"
    );
    ensure!(fields.len() == 3, "expected 3 fields, got {}", fields.len());
    let first = fields
        .first()
        .ok_or_else(|| anyhow!("missing first field"))?;
    ensure!(
        first.attrs.name.as_ref().map(syn::LitStr::value).as_deref() == Some("id"),
        "expected the name override on the first field"
    );
    ensure!(first.attrs.required, "expected the required flag");
    let second = fields.get(1).ok_or_else(|| anyhow!("missing second field"))?;
    ensure!(
        second
            .attrs
            .default
            .as_ref()
            .map(syn::LitStr::value)
            .as_deref()
            == Some("8080"),
        "expected the default literal on the second field"
    );
    ensure!(!second.attrs.required, "second field is not required");
    let third = fields.get(2).ok_or_else(|| anyhow!("missing third field"))?;
    ensure!(
        third.attrs.name.is_none() && third.attrs.default.is_none() && !third.attrs.required,
        "unattributed fields parse with empty metadata"
    );
    Ok(())
}

#[rstest]
#[case::bare("required", true)]
#[case::explicit_true("required = true", true)]
#[case::explicit_false("required = false", false)]
fn required_accepts_bare_and_explicit_forms(
    #[case] attribute: &str,
    #[case] expected: bool,
) -> Result<()> {
    let input: DeriveInput = syn::parse_str(&format!(
        r"
        struct Demo {{
            #[flatbind({attribute})]
            host: String,
        }}
        ",
    ))
    .map_err(|err| anyhow!("failed to parse input: {err}"))?;
    let (_, _, fields) = parse_input(&input).map_err(|err| anyhow!(err))?;
    let field = fields.first().ok_or_else(|| anyhow!("missing field"))?;
    ensure!(
        field.attrs.required == expected,
        "required flag mismatch for `{attribute}`"
    );
    Ok(())
}

#[rstest]
#[case::empty_name(r#"name = """#)]
#[case::empty_default(r#"default = """#)]
fn empty_string_values_count_as_absent(#[case] attribute: &str) -> Result<()> {
    let input: DeriveInput = syn::parse_str(&format!(
        r"
        struct Demo {{
            #[flatbind({attribute})]
            host: String,
        }}
        ",
    ))
    .map_err(|err| anyhow!("failed to parse input: {err}"))?;
    let (_, _, fields) = parse_input(&input).map_err(|err| anyhow!(err))?;
    let field = fields.first().ok_or_else(|| anyhow!("missing field"))?;
    ensure!(
        field.attrs.name.is_none() && field.attrs.default.is_none(),
        "empty strings should parse as absent for `{attribute}`"
    );
    Ok(())
}

#[rstest]
fn unknown_keys_are_discarded() -> Result<()> {
    let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[flatbind(env = "PORT", future(stuff))])];
    let parsed = parse_field_attrs(&attrs).map_err(|err| anyhow!(err))?;
    ensure!(
        parsed.name.is_none() && parsed.default.is_none() && !parsed.required,
        "unknown keys should leave the attributes untouched"
    );
    Ok(())
}

#[rstest]
fn crate_override_parses_as_path() -> Result<()> {
    let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[flatbind(crate = "my_alias::flatbind")])];
    let parsed = parse_struct_attrs(&attrs).map_err(|err| anyhow!(err))?;
    let path = parsed
        .crate_path
        .ok_or_else(|| anyhow!("expected a crate path"))?;
    ensure!(
        quote!(#path).to_string() == "my_alias :: flatbind",
        "unexpected crate path tokens"
    );
    Ok(())
}

#[rstest]
fn rejects_unsupported_rename_all_values() -> Result<()> {
    let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[flatbind(rename_all = "Train-Case")])];
    let err = parse_struct_attrs(&attrs)
        .err()
        .ok_or_else(|| anyhow!("expected a rename_all rejection"))?;
    ensure!(
        err.to_string().contains("unsupported rename_all value"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn rejects_non_string_name_values() -> Result<()> {
    let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[flatbind(name = 5)])];
    let err = parse_field_attrs(&attrs)
        .err()
        .ok_or_else(|| anyhow!("expected a non-string name rejection"))?;
    ensure!(
        err.to_string().contains("name must be a string"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
#[case::tuple_struct(parse_quote! { struct Demo(i64); }, "requires named fields")]
#[case::unit_struct(parse_quote! { struct Demo; }, "requires named fields")]
#[case::enum_input(parse_quote! { enum Demo { Variant } }, "can only be derived for structs")]
#[case::union_input(
    parse_quote! { union Demo { field: i64 } },
    "can only be derived for structs"
)]
#[case::generic_struct(
    parse_quote! { struct Demo<T> { value: T } },
    "cannot be derived for generic structs"
)]
fn rejects_unsupported_input_shapes(
    #[case] input: DeriveInput,
    #[case] fragment: &str,
) -> Result<()> {
    let err = parse_input(&input)
        .err()
        .ok_or_else(|| anyhow!("expected rejection containing '{fragment}'"))?;
    ensure!(
        err.to_string().contains(fragment),
        "expected '{fragment}' in: {err}"
    );
    Ok(())
}
