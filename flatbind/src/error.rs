//! Primary error enum for binding and registry flows.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for fallible binding operations.
pub type FlatBindResult<T> = Result<T, FlatBindError>;

/// Errors that can occur while loading or binding configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlatBindError {
    /// A key marked `required` resolved neither a value nor a default.
    #[error("no value configured for required key '{key}'")]
    MissingRequired {
        /// Full dotted path of the missing key.
        key: String,
    },

    /// A value refused coercion to its field's type.
    #[error("cannot convert {value} to {target} for key '{key}'")]
    Coerce {
        /// Full dotted path of the offending key.
        key: String,
        /// JSON text of the value that failed to coerce.
        value: String,
        /// Name of the type the value was coerced towards.
        target: &'static str,
    },

    /// A required key held a value of the wrong shape.
    #[error("expected {expected} for key '{key}', found {actual}")]
    WrongType {
        /// Full dotted path of the offending key.
        key: String,
        /// Shape the binder needed.
        expected: &'static str,
        /// Shape the dictionary actually held.
        actual: &'static str,
    },

    /// An adapter was registered twice under one name.
    #[error("adapter '{name}' is already registered")]
    AdapterExists {
        /// Name the duplicate registration used.
        name: String,
    },

    /// An init referenced an adapter that was never registered.
    #[error("no adapter registered as '{name}'")]
    UnknownAdapter {
        /// Name the lookup used.
        name: String,
    },

    /// A resolve named a prefix absent from the document.
    #[error("no value found at '{prefix}'")]
    PrefixNotFound {
        /// Dotted prefix that failed to match.
        prefix: String,
    },

    /// The registry was queried before any instance was initialised.
    #[error("configuration registry has not been initialised")]
    Uninitialised,

    /// Error originating from a configuration file.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
