//! Runtime loading entrypoint for configuration files.

use camino::Utf8Path;
use serde_json::Value;

use crate::error::FlatBindResult;

use super::error::{file_error, invalid_data};
use super::parser::parse_by_format;

/// Load a configuration document from a file, selecting the parser from
/// the extension.
///
/// The document root must be a table; scalar- or array-rooted files are
/// rejected so every loaded document flattens into meaningful dotted
/// keys.
///
/// # Errors
///
/// Returns a [`FlatBindError`](crate::FlatBindError) if reading or
/// parsing fails, or if the root is not a table.
pub fn load_document(path: &Utf8Path) -> FlatBindResult<Value> {
    let data = std::fs::read_to_string(path).map_err(|err| file_error(path, err))?;
    let document = parse_by_format(path, &data)?;
    if !document.is_object() {
        return Err(invalid_data(path, "configuration root must be a table"));
    }
    tracing::debug!(%path, "loaded configuration document");
    Ok(document)
}
