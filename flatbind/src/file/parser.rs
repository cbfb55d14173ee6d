//! Format-specific parsing for configuration files.

use camino::Utf8Path;
use serde_json::Value;

use crate::error::FlatBindResult;

use super::error::file_error;

/// Parse configuration data according to the file extension.
///
/// `json` parses as JSON, `yaml`/`yml` via `serde-saphyr` when the `yaml`
/// feature is enabled, and everything else as TOML. Disabled formats fail
/// with a file error naming the feature to enable.
///
/// # Errors
///
/// Returns a [`FlatBindError`](crate::FlatBindError) if the contents fail
/// to parse or the required feature is disabled.
pub(super) fn parse_by_format(path: &Utf8Path, data: &str) -> FlatBindResult<Value> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => serde_json::from_str(data).map_err(|err| file_error(path, err)),
        Some("yaml" | "yml") => parse_yaml(path, data),
        _ => parse_toml(path, data),
    }
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Utf8Path, data: &str) -> FlatBindResult<Value> {
    let table = toml::from_str::<toml::Value>(data).map_err(|err| file_error(path, err))?;
    serde_json::to_value(table).map_err(|err| file_error(path, err))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Utf8Path, _data: &str) -> FlatBindResult<Value> {
    Err(file_error(
        path,
        std::io::Error::other(
            "toml feature disabled: enable the 'toml' feature to support this file format",
        ),
    ))
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Utf8Path, data: &str) -> FlatBindResult<Value> {
    // Strict booleans keep YAML's yes/no aliases out of the boolean
    // coercion matrix.
    serde_saphyr::from_str_with_options(
        data,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|err| file_error(path, err))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Utf8Path, _data: &str) -> FlatBindResult<Value> {
    Err(file_error(
        path,
        std::io::Error::other(
            "yaml feature disabled: enable the 'yaml' feature to support this file format",
        ),
    ))
}
