//! Core crate for the `FlatBind` configuration binder.
//!
//! This crate defines the [`FlatBind`] trait together with the runtime
//! resolvers, coercion rules, and registry that back it. The derive macro
//! itself lives in the companion `flatbind_macros` crate and is re-exported
//! here.
//!
//! Configuration travels as a flattened dictionary: dotted-path keys mapped
//! to [`serde_json::Value`] leaves. [`flatten`] produces such a dictionary
//! from a nested document, and [`FlatBind::bind`] walks a target struct's
//! fields, pulling each one out of the dictionary with best-effort type
//! coercion, declared defaults, and required-field enforcement.
//!
//! ```rust
//! use flatbind::{FlatBind, FlatDict, serde_json::json};
//!
//! #[derive(Debug, Default, FlatBind)]
//! struct Server {
//!     host: String,
//!     #[flatbind(default = "8080")]
//!     port: i64,
//! }
//!
//! # fn main() -> flatbind::FlatBindResult<()> {
//! let mut dict = FlatDict::new();
//! dict.insert("server.host".to_owned(), json!("localhost"));
//! let server = Server::from_flat(&dict, "server")?;
//! assert_eq!(server.host, "localhost");
//! assert_eq!(server.port, 8080);
//! # Ok(())
//! # }
//! ```

pub use flatbind_macros::FlatBind;

pub mod bind;
mod coerce;
mod error;
mod file;
mod flatten;
mod registry;

pub use coerce::{CoerceError, FromConfigValue};
pub use error::{FlatBindError, FlatBindResult};
pub use file::{FileAdapter, load_document};
pub use flatten::flatten;
pub use registry::{Adapter, ConfigHandle, ConfigRegistry, QueryValue};

// Re-exported so generated code and callers building dictionaries by hand
// share one `serde_json` version.
pub use serde_json;

/// A configuration dictionary flattened to dotted-path keys.
pub type FlatDict = std::collections::BTreeMap<String, serde_json::Value>;

/// Trait implemented for structs that can be populated from a [`FlatDict`].
///
/// Implementations are normally generated with `#[derive(FlatBind)]`. The
/// generated `bind` walks the struct's fields in declaration order: scalar
/// leaves and vectors of scalars resolve through [`bind::resolve_scalar`]
/// and [`bind::resolve_array`], while nested structs recurse with the
/// field's name appended to the dotted prefix.
pub trait FlatBind {
    /// Populates `self` from `dict`, reading keys beneath `prefix`.
    ///
    /// Fields whose key is absent and that carry neither a default nor the
    /// `required` flag are left untouched, so callers may pre-seed the
    /// target and layer configuration on top.
    ///
    /// # Errors
    ///
    /// Returns a [`FlatBindError`] if a required key is missing or a value
    /// refuses coercion to its field's type. The target is never partially
    /// updated past the failing field.
    fn bind(&mut self, dict: &FlatDict, prefix: &str) -> FlatBindResult<()>;

    /// Builds a fresh instance from its `Default` state and binds it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`FlatBind::bind`].
    fn from_flat(dict: &FlatDict, prefix: &str) -> FlatBindResult<Self>
    where
        Self: Default,
    {
        let mut target = Self::default();
        target.bind(dict, prefix)?;
        Ok(target)
    }
}
