//! The active configuration instance: parsed document, memoized dotted-path
//! lookups, and prefix-scoped decoding.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::coerce::FromConfigValue;
use crate::error::{FlatBindError, FlatBindResult};
use crate::flatten::flatten;
use crate::{FlatBind, FlatDict};

/// A loaded configuration document with a query cache.
///
/// Handles are cheap to share by reference and safe to query from several
/// threads; the memo cache behind [`ConfigHandle::get`] is mutex-guarded.
/// Replacing a handle discards its cache wholesale, so a rebuilt instance
/// can never serve values from a document it no longer holds.
#[derive(Debug)]
pub struct ConfigHandle {
    document: Value,
    cache: Mutex<HashMap<String, Value>>,
}

impl ConfigHandle {
    /// Wraps an already-parsed document in a fresh handle.
    ///
    /// Adapter-loaded documents are always object-rooted; a handle built
    /// directly from a non-object value answers every query with `None`
    /// and decodes as an empty dictionary.
    #[must_use]
    pub fn from_value(document: Value) -> Self {
        Self {
            document,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Borrows the underlying document.
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Looks up a dotted path in the document.
    ///
    /// Path segments traverse object keys; purely numeric segments index
    /// into arrays. Successful lookups are memoized, so repeated queries
    /// for hot keys skip the traversal.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<QueryValue> {
        let mut cache = self.cache_lock();
        if let Some(hit) = cache.get(key) {
            return Some(QueryValue::new(key, hit.clone()));
        }
        let found = navigate(&self.document, key)?.clone();
        cache.insert(key.to_owned(), found.clone());
        Some(QueryValue::new(key, found))
    }

    /// Flattens the document and binds the subtree at `prefix` into a
    /// fresh `T`.
    ///
    /// An empty prefix decodes the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::PrefixNotFound`] when a non-empty prefix
    /// matches nothing in the document, otherwise propagates binding
    /// errors from [`FlatBind::bind`].
    pub fn resolve<T>(&self, prefix: &str) -> FlatBindResult<T>
    where
        T: FlatBind + Default,
    {
        if !prefix.is_empty() && navigate(&self.document, prefix).is_none() {
            return Err(FlatBindError::PrefixNotFound {
                prefix: prefix.to_owned(),
            });
        }
        let dict = self.flat_dict();
        T::from_flat(&dict, prefix)
    }

    /// Flattens the document into a dotted-path dictionary.
    #[must_use]
    pub fn flat_dict(&self) -> FlatDict {
        self.document.as_object().map(flatten).unwrap_or_default()
    }

    fn cache_lock(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        // A poisoned cache only means another thread panicked mid-insert;
        // the map itself stays usable.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Walks `value` along dotted `path` segments.
pub(super) fn navigate<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// A value plucked from the document, with typed accessors.
///
/// Accessors route through the same coercion matrix as field binding, so a
/// query observes exactly what a bound field would receive.
#[derive(Clone, Debug)]
pub struct QueryValue {
    key: String,
    value: Value,
}

impl QueryValue {
    fn new(key: &str, value: Value) -> Self {
        Self {
            key: key.to_owned(),
            value,
        }
    }

    /// The dotted path this value was found at.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrows the raw value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the query, yielding the raw value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Borrows the value as a native string, without coercion.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Renders the value as text; never fails.
    #[must_use]
    pub fn to_text(&self) -> String {
        String::from_config_value(&self.value).unwrap_or_default()
    }

    /// Coerces the value to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::Coerce`] when the value lies outside the
    /// integer coercion matrix.
    pub fn to_i64(&self) -> FlatBindResult<i64> {
        i64::from_config_value(&self.value).map_err(|err| err.at(&self.key))
    }

    /// Coerces the value to a float.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::Coerce`] when the value lies outside the
    /// float coercion matrix.
    pub fn to_f64(&self) -> FlatBindResult<f64> {
        f64::from_config_value(&self.value).map_err(|err| err.at(&self.key))
    }

    /// Coerces the value to a boolean, with the same `"true"`-only string
    /// semantics as field binding.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::Coerce`] for values that are neither
    /// booleans nor strings.
    pub fn to_bool(&self) -> FlatBindResult<bool> {
        bool::from_config_value(&self.value).map_err(|err| err.at(&self.key))
    }
}
