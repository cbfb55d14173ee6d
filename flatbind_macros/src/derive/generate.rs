//! Token emission for the `FlatBind` derive macro.
//!
//! Fields are classified into coercible scalars, scalar sequences, and
//! nested structs, validated against the attribute vocabulary, and turned
//! into resolver calls executed in declaration order.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::crate_path;
use super::parse::{BoundField, StructAttrs};
use super::rename::RenameRule;
use super::type_utils::{is_scalar, is_unsupported_scalar, option_inner, vec_inner};

/// How a field participates in binding.
#[derive(Clone, Copy)]
enum FieldKind {
    Scalar,
    Sequence,
    Nested,
}

/// Classifies a field's type, rejecting shapes the binder cannot fill.
fn classify(field: &BoundField) -> syn::Result<FieldKind> {
    let ty = &field.ty;
    if matches!(ty, Type::Reference(_)) {
        return Err(syn::Error::new_spanned(
            ty,
            "borrowed fields are not supported",
        ));
    }
    if option_inner(ty).is_some() {
        return Err(syn::Error::new_spanned(
            ty,
            "Option fields are not supported; absent keys leave the field untouched",
        ));
    }
    if let Some(element) = vec_inner(ty) {
        if is_scalar(element) {
            return Ok(FieldKind::Sequence);
        }
        if is_unsupported_scalar(element) {
            return Err(unsupported_scalar_error(element));
        }
        return Err(syn::Error::new_spanned(
            element,
            "binding sequences of nested structs is not supported",
        ));
    }
    if is_scalar(ty) {
        return Ok(FieldKind::Scalar);
    }
    if is_unsupported_scalar(ty) {
        return Err(unsupported_scalar_error(ty));
    }
    if matches!(ty, Type::Path(_)) {
        return Ok(FieldKind::Nested);
    }
    Err(syn::Error::new_spanned(
        ty,
        "field type must be a coercible scalar, a Vec of scalars, or a nested FlatBind struct",
    ))
}

fn unsupported_scalar_error(ty: &Type) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        "type is outside the coercion matrix; use i32, i64, f32, f64, bool, or String",
    )
}

/// Rejects attribute combinations the resolvers have no behaviour for.
fn validate_attrs(field: &BoundField, kind: FieldKind) -> syn::Result<()> {
    match kind {
        FieldKind::Scalar => Ok(()),
        FieldKind::Sequence => {
            if let Some(lit) = &field.attrs.default {
                return Err(syn::Error::new_spanned(
                    lit,
                    "`default` is not supported on sequence fields",
                ));
            }
            Ok(())
        }
        FieldKind::Nested => {
            if let Some(lit) = &field.attrs.default {
                return Err(syn::Error::new_spanned(
                    lit,
                    "`default` is not supported on nested struct fields",
                ));
            }
            if field.attrs.required {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    "`required` is not supported on nested struct fields",
                ));
            }
            Ok(())
        }
    }
}

/// Derives the dictionary key segment for a field.
fn key_segment(field: &BoundField, rename_all: Option<RenameRule>) -> String {
    if let Some(lit) = &field.attrs.name {
        return lit.value();
    }
    let ident_name = field.ident.to_string();
    rename_all
        .map(|rule| rule.apply(&ident_name))
        .unwrap_or(ident_name)
}

/// Emits the resolver call for one field.
fn field_block(
    field: &BoundField,
    kind: FieldKind,
    segment: &str,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &field.ident;
    let required = field.attrs.required;
    match kind {
        FieldKind::Scalar => {
            let default = field.attrs.default.as_ref().map_or_else(
                || quote! { ::core::option::Option::None },
                |lit| quote! { ::core::option::Option::Some(#lit) },
            );
            quote! {
                {
                    let key = #krate::bind::join_key(prefix, #segment);
                    #krate::bind::resolve_scalar(
                        dict,
                        &key,
                        #krate::bind::FieldTag {
                            default: #default,
                            required: #required,
                        },
                        &mut self.#ident,
                    )?;
                }
            }
        }
        FieldKind::Sequence => quote! {
            {
                let key = #krate::bind::join_key(prefix, #segment);
                #krate::bind::resolve_array(
                    dict,
                    &key,
                    #krate::bind::FieldTag {
                        default: ::core::option::Option::None,
                        required: #required,
                    },
                    &mut self.#ident,
                )?;
            }
        },
        FieldKind::Nested => quote! {
            {
                let key = #krate::bind::join_key(prefix, #segment);
                #krate::FlatBind::bind(&mut self.#ident, dict, &key)?;
            }
        },
    }
}

/// Builds the `FlatBind` implementation for a parsed struct.
///
/// Fields named `"_"` are skipped outright: no lookup, no default, no
/// required check, and no type validation, so a skipped field may have
/// any type the struct needs for other purposes.
pub(crate) fn expand_struct(
    ident: &syn::Ident,
    struct_attrs: &StructAttrs,
    fields: &[BoundField],
) -> syn::Result<TokenStream> {
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    let mut blocks = Vec::new();
    for field in fields {
        if field
            .attrs
            .name
            .as_ref()
            .is_some_and(|lit| lit.value() == "_")
        {
            continue;
        }
        let kind = classify(field)?;
        validate_attrs(field, kind)?;
        let segment = key_segment(field, struct_attrs.rename_all);
        blocks.push(field_block(field, kind, &segment, &krate));
    }

    // Underscore the parameters when nothing binds so the generated impl
    // compiles without unused-variable warnings.
    let (dict_param, prefix_param) = if blocks.is_empty() {
        (quote! { _dict }, quote! { _prefix })
    } else {
        (quote! { dict }, quote! { prefix })
    };

    Ok(quote! {
        impl #krate::FlatBind for #ident {
            fn bind(
                &mut self,
                #dict_param: &#krate::FlatDict,
                #prefix_param: &str,
            ) -> #krate::FlatBindResult<()> {
                #( #blocks )*
                ::core::result::Result::Ok(())
            }
        }
    })
}
