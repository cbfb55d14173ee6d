//! Error constructors shared by the file loading helpers.

use std::error::Error;

use camino::Utf8Path;

use crate::error::FlatBindError;

/// Construct a [`FlatBindError::File`] for a configuration path.
pub(super) fn file_error(
    path: &Utf8Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> FlatBindError {
    FlatBindError::File {
        path: path.to_owned(),
        source: err.into(),
    }
}

pub(super) fn invalid_data(path: &Utf8Path, msg: impl Into<String>) -> FlatBindError {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}
