//! Runtime resolvers called by generated [`FlatBind`](crate::FlatBind)
//! implementations.
//!
//! The derive macro emits one block per field, each deriving the field's
//! dotted key with [`join_key`] and delegating to [`resolve_scalar`] or
//! [`resolve_array`] with the field's [`FieldTag`]. Nested struct fields
//! recurse through the trait instead and never reach this module.

use serde_json::Value;

use crate::FlatDict;
use crate::coerce::{FromConfigValue, kind_name};
use crate::error::{FlatBindError, FlatBindResult};

/// Per-field metadata the derive macro encodes into generated calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldTag<'a> {
    /// String-form fallback applied when the key is absent; coerced through
    /// the string branch of the coercion matrix at bind time.
    pub default: Option<&'a str>,
    /// Whether resolution must produce a value.
    pub required: bool,
}

/// Joins a dotted prefix with a field name.
///
/// An empty prefix yields the bare name, so root-level binds produce keys
/// without a leading dot.
#[must_use]
pub fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Resolves one scalar field from the dictionary into `slot`.
///
/// Lookup order: a dictionary entry at `key` wins, then the tag's default,
/// then the required check. When none apply the slot keeps its prior
/// value. The slot is only assigned after a successful coercion, so a
/// failure leaves the target unchanged.
///
/// # Errors
///
/// Returns [`FlatBindError::Coerce`] when the entry or the default refuses
/// coercion, and [`FlatBindError::MissingRequired`] when a required key
/// resolves nothing.
pub fn resolve_scalar<T>(
    dict: &FlatDict,
    key: &str,
    tag: FieldTag<'_>,
    slot: &mut T,
) -> FlatBindResult<()>
where
    T: FromConfigValue,
{
    if let Some(value) = dict.get(key) {
        *slot = T::from_config_value(value).map_err(|err| err.at(key))?;
        return Ok(());
    }
    if let Some(default) = tag.default {
        let fallback = Value::String(default.to_owned());
        *slot = T::from_config_value(&fallback).map_err(|err| err.at(key))?;
        return Ok(());
    }
    if tag.required {
        return Err(FlatBindError::MissingRequired {
            key: key.to_owned(),
        });
    }
    Ok(())
}

/// Resolves a sequence field from the dictionary, appending to `slot`.
///
/// Elements coerce in source order and append after any existing contents.
/// The append is all-or-nothing: an element failure leaves the slot
/// unchanged. A missing key or a non-array value are tolerated unless the
/// field is required. The tag's `default` is ignored; sequences have no
/// default form.
///
/// # Errors
///
/// Returns [`FlatBindError::MissingRequired`] when a required key is
/// absent, [`FlatBindError::WrongType`] when a required key holds a
/// non-array, and [`FlatBindError::Coerce`] when an element refuses
/// coercion.
pub fn resolve_array<T>(
    dict: &FlatDict,
    key: &str,
    tag: FieldTag<'_>,
    slot: &mut Vec<T>,
) -> FlatBindResult<()>
where
    T: FromConfigValue,
{
    let Some(value) = dict.get(key) else {
        if tag.required {
            return Err(FlatBindError::MissingRequired {
                key: key.to_owned(),
            });
        }
        return Ok(());
    };
    let Some(items) = value.as_array() else {
        if tag.required {
            return Err(FlatBindError::WrongType {
                key: key.to_owned(),
                expected: "array",
                actual: kind_name(value),
            });
        }
        return Ok(());
    };
    let mut coerced = Vec::with_capacity(items.len());
    for item in items {
        coerced.push(T::from_config_value(item).map_err(|err| err.at(key))?);
    }
    slot.extend(coerced);
    Ok(())
}
