//! File-backed implementation of the registry's [`Adapter`] trait.

use camino::Utf8Path;
use serde_json::Value;

use crate::error::FlatBindResult;
use crate::registry::Adapter;

use super::loader::load_document;

/// Adapter that loads configuration documents from the filesystem.
///
/// Register it under any name and initialise the registry with a path;
/// the format follows the file extension as described by
/// [`load_document`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FileAdapter;

impl Adapter for FileAdapter {
    fn load(&self, path: &Utf8Path) -> FlatBindResult<Value> {
        load_document(path)
    }
}
