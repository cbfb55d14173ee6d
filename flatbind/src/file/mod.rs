//! Loading configuration documents from files.
//!
//! The loader reads a file, picks a parser from the extension, and
//! normalises the result into a `serde_json::Value` with an object root.
//! TOML is the default format (and the fallback for unrecognised
//! extensions), JSON is built in, and YAML sits behind the `yaml`
//! feature.

mod adapter;
mod error;
mod loader;
mod parser;

pub use adapter::FileAdapter;
pub use loader::load_document;
