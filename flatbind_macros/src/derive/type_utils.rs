//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! classify fields as coercible scalars, `Vec` sequences, or nested
//! structs, and to recognise wrapper types such as `Option<T>`.

use syn::{GenericArgument, PathArguments, Type};

/// Scalars with a direct coercion path in the runtime.
const SCALARS: &[&str] = &["i32", "i64", "f32", "f64", "bool", "String"];

/// Primitive types the coercion matrix deliberately omits.
const UNSUPPORTED_SCALARS: &[&str] = &[
    "i8", "i16", "i128", "u8", "u16", "u32", "u64", "u128", "usize", "isize", "char",
];

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// The check is shallow: it inspects only the outermost path and supports
/// common fully-qualified forms like `std::vec::Vec<T>`. The function is
/// not recursive.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(p) = ty else {
        return None;
    };

    // Grab the final segment so paths such as `std::vec::Vec<T>` match
    // without caring about the prefix.
    let last = p.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }

    extract_first_type_argument(&last.arguments)
}

/// Returns the inner type if `ty` is `Option<T>`.
///
/// This uses [`type_inner`], which is **not recursive**. It only inspects
/// the outermost layer, so `Option<Vec<T>>` yields `Vec<T>` rather than
/// `T`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Option")
}

/// Extracts the element type `T` if `ty` is `Vec<T>`.
///
/// Used internally by the derive macro to route vector fields to the
/// array resolver.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Vec")
}

/// Returns the final path segment identifier as a string.
fn last_ident_string(ty: &Type) -> Option<String> {
    let Type::Path(p) = ty else {
        return None;
    };
    p.path
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
}

/// True if `ty` is one of the scalar types the runtime coerces.
///
/// Matching is shallow and by name, so fully-qualified forms like
/// `std::string::String` are recognised.
pub(crate) fn is_scalar(ty: &Type) -> bool {
    last_ident_string(ty).is_some_and(|name| SCALARS.contains(&name.as_str()))
}

/// True if `ty` is a primitive the coercion matrix deliberately omits.
pub(crate) fn is_unsupported_scalar(ty: &Type) -> bool {
    last_ident_string(ty).is_some_and(|name| UNSUPPORTED_SCALARS.contains(&name.as_str()))
}
