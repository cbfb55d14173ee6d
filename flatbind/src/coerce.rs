//! Best-effort type coercion between `serde_json::Value` leaves and the
//! scalar field types the binder supports.
//!
//! The matrix is deliberately permissive in one direction: numeric targets
//! accept native numbers and numeric strings, string targets accept any
//! value via its JSON text, and boolean targets accept native booleans or
//! the exact string `"true"`. Everything outside the matrix fails with a
//! [`CoerceError`].

use serde_json::Value;
use thiserror::Error;

use crate::error::FlatBindError;

/// Failure to coerce a value into a scalar target type.
///
/// The error captures the offending value's JSON text and the name of the
/// target type; [`CoerceError::at`] attaches the dotted key once the caller
/// knows it.
#[derive(Debug, Error)]
#[error("cannot convert {value} to {target}")]
pub struct CoerceError {
    value: String,
    target: &'static str,
}

impl CoerceError {
    /// Records a failed coercion of `value` towards `target`.
    #[must_use]
    pub fn new(value: &Value, target: &'static str) -> Self {
        Self {
            value: value.to_string(),
            target,
        }
    }

    /// Upgrades the failure with the dotted key it occurred at.
    pub(crate) fn at(self, key: &str) -> FlatBindError {
        FlatBindError::Coerce {
            key: key.to_owned(),
            value: self.value,
            target: self.target,
        }
    }
}

/// Conversion from a configuration leaf value into a scalar field type.
///
/// Implemented for the scalar types the binder supports: `i32`, `i64`,
/// `f32`, `f64`, `bool`, and `String`. The derive macro only generates
/// calls for these, but the trait is open so hand-written [`FlatBind`]
/// implementations can supply further scalars.
///
/// [`FlatBind`]: crate::FlatBind
pub trait FromConfigValue: Sized {
    /// Human-readable name of the target type, used in error messages.
    const KIND: &'static str;

    /// Coerces `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoerceError`] when `value` lies outside the coercion
    /// matrix for this type.
    fn from_config_value(value: &Value) -> Result<Self, CoerceError>;
}

impl FromConfigValue for i64 {
    const KIND: &'static str = "integer";

    #[expect(
        clippy::cast_possible_truncation,
        reason = "fractional inputs truncate toward zero, matching the documented matrix"
    )]
    fn from_config_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Number(number) => {
                if let Some(whole) = number.as_i64() {
                    Ok(whole)
                } else if let Some(fractional) = number.as_f64() {
                    Ok(fractional as Self)
                } else {
                    Err(CoerceError::new(value, Self::KIND))
                }
            }
            Value::String(text) => text
                .parse::<Self>()
                .map_err(|_| CoerceError::new(value, Self::KIND)),
            _ => Err(CoerceError::new(value, Self::KIND)),
        }
    }
}

impl FromConfigValue for i32 {
    const KIND: &'static str = "32-bit integer";

    fn from_config_value(value: &Value) -> Result<Self, CoerceError> {
        let wide = i64::from_config_value(value).map_err(|_| CoerceError::new(value, Self::KIND))?;
        Self::try_from(wide).map_err(|_| CoerceError::new(value, Self::KIND))
    }
}

impl FromConfigValue for f64 {
    const KIND: &'static str = "float";

    fn from_config_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| CoerceError::new(value, Self::KIND)),
            Value::String(text) => text
                .parse::<Self>()
                .map_err(|_| CoerceError::new(value, Self::KIND)),
            _ => Err(CoerceError::new(value, Self::KIND)),
        }
    }
}

impl FromConfigValue for f32 {
    const KIND: &'static str = "32-bit float";

    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing to f32 rounds to the nearest representable value"
    )]
    fn from_config_value(value: &Value) -> Result<Self, CoerceError> {
        let wide = f64::from_config_value(value).map_err(|_| CoerceError::new(value, Self::KIND))?;
        Ok(wide as Self)
    }
}

impl FromConfigValue for bool {
    const KIND: &'static str = "boolean";

    fn from_config_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            // Only the exact string "true" is truthy; every other string,
            // including "false", "True", and "1", coerces to false.
            Value::String(text) => Ok(text == "true"),
            _ => Err(CoerceError::new(value, Self::KIND)),
        }
    }
}

impl FromConfigValue for String {
    const KIND: &'static str = "string";

    fn from_config_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            other => Ok(other.to_string()),
        }
    }
}

/// Names the JSON shape of `value` for error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::native(json!(42), 42)]
    #[case::truncates_toward_zero(json!(42.9), 42)]
    #[case::negative_truncates_toward_zero(json!(-7.99), -7)]
    #[case::decimal_string(json!("42"), 42)]
    #[case::negative_string(json!("-13"), -13)]
    fn integer_matrix_accepts(#[case] value: Value, #[case] expected: i64) -> Result<()> {
        let got = i64::from_config_value(&value)?;
        ensure!(got == expected, "expected {expected}, got {got}");
        Ok(())
    }

    #[rstest]
    #[case::boolean(json!(true))]
    #[case::fractional_string(json!("4.5"))]
    #[case::word_string(json!("fast"))]
    #[case::array(json!([1]))]
    #[case::null(json!(null))]
    fn integer_matrix_rejects(#[case] value: Value) -> Result<()> {
        ensure!(
            i64::from_config_value(&value).is_err(),
            "expected rejection of {value}"
        );
        Ok(())
    }

    #[rstest]
    fn narrow_integer_rejects_overflow() -> Result<()> {
        let value = json!(i64::from(i32::MAX) + 1);
        let err = i32::from_config_value(&value)
            .err()
            .ok_or_else(|| anyhow!("expected overflow rejection"))?;
        ensure!(
            err.to_string().contains("32-bit integer"),
            "expected 32-bit target in message, got: {err}"
        );
        Ok(())
    }

    #[rstest]
    fn narrow_integer_accepts_in_range() -> Result<()> {
        let got = i32::from_config_value(&json!("-2048"))?;
        ensure!(got == -2048, "expected -2048, got {got}");
        Ok(())
    }

    #[rstest]
    #[case::native(json!(2.33), 2.33)]
    #[case::widened_integer(json!(7), 7.0)]
    #[case::decimal_string(json!("88.8"), 88.8)]
    fn float_matrix_accepts(#[case] value: Value, #[case] expected: f64) -> Result<()> {
        let got = f64::from_config_value(&value)?;
        ensure!(got == expected, "expected {expected}, got {got}");
        Ok(())
    }

    #[rstest]
    fn narrow_float_accepts_string() -> Result<()> {
        let got = f32::from_config_value(&json!("1.5"))?;
        ensure!(got == 1.5, "expected 1.5, got {got}");
        Ok(())
    }

    #[rstest]
    #[case::native_true(json!(true), true)]
    #[case::native_false(json!(false), false)]
    #[case::exact_string(json!("true"), true)]
    #[case::false_string(json!("false"), false)]
    #[case::capitalised_is_false(json!("True"), false)]
    #[case::numeric_string_is_false(json!("1"), false)]
    #[case::word_is_false(json!("yes"), false)]
    fn boolean_matrix(#[case] value: Value, #[case] expected: bool) -> Result<()> {
        let got = bool::from_config_value(&value)?;
        ensure!(got == expected, "expected {expected} for {value}");
        Ok(())
    }

    #[rstest]
    fn boolean_rejects_numbers() -> Result<()> {
        ensure!(
            bool::from_config_value(&json!(1)).is_err(),
            "expected numeric rejection"
        );
        Ok(())
    }

    #[rstest]
    #[case::native(json!("tag"), "tag")]
    #[case::integer(json!(42), "42")]
    #[case::float(json!(88.8), "88.8")]
    #[case::boolean(json!(true), "true")]
    #[case::null(json!(null), "null")]
    #[case::array(json!([1, 2]), "[1,2]")]
    fn string_matrix_never_fails(#[case] value: Value, #[case] expected: &str) -> Result<()> {
        let got = String::from_config_value(&value)?;
        ensure!(got == expected, "expected {expected}, got {got}");
        Ok(())
    }

    #[rstest]
    fn coerce_error_reports_value_and_target() -> Result<()> {
        let err = i64::from_config_value(&json!("fast"))
            .err()
            .ok_or_else(|| anyhow!("expected failure"))?;
        let message = err.to_string();
        ensure!(
            message.contains("\"fast\"") && message.contains("integer"),
            "unexpected message: {message}"
        );
        Ok(())
    }
}
