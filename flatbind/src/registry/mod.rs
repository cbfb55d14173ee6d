//! Adapter registration and the two-phase configuration lifecycle.
//!
//! A [`ConfigRegistry`] holds named [`Adapter`]s and at most one active
//! [`ConfigHandle`]. Callers register adapters up front, then initialise an
//! instance from one of them; the last successful init wins and hands back
//! the handle it displaced so anything still reading the old document keeps
//! a consistent view.

mod handle;

pub use handle::{ConfigHandle, QueryValue};

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use camino::Utf8Path;
use serde_json::Value;

use crate::FlatBind;
use crate::error::{FlatBindError, FlatBindResult};


/// Source of configuration documents, registered by name.
pub trait Adapter: Send + Sync {
    /// Loads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`FlatBindError`] when the source cannot be read or
    /// parsed.
    fn load(&self, path: &Utf8Path) -> FlatBindResult<Value>;
}

/// Named adapters plus the active configuration instance.
#[derive(Default)]
pub struct ConfigRegistry {
    adapters: BTreeMap<String, Box<dyn Adapter>>,
    active: Option<ConfigHandle>,
}

impl ConfigRegistry {
    /// Creates an empty registry with no adapters and no active instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `adapter` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::AdapterExists`] when the name is taken;
    /// existing registrations are never replaced silently.
    pub fn register(&mut self, name: &str, adapter: impl Adapter + 'static) -> FlatBindResult<()> {
        match self.adapters.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(FlatBindError::AdapterExists {
                name: name.to_owned(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(adapter));
                Ok(())
            }
        }
    }

    /// Loads a document through the named adapter and installs it as the
    /// active instance.
    ///
    /// Returns the handle the new instance displaced, if any, so callers
    /// can keep or drain readers of the previous document. The displaced
    /// handle's query cache goes with it; nothing served from the old
    /// document survives into the new instance.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::UnknownAdapter`] when no adapter answers
    /// to `name`, or the adapter's own error when loading fails. A failed
    /// load leaves the previously active instance in place.
    pub fn init(&mut self, name: &str, path: &Utf8Path) -> FlatBindResult<Option<ConfigHandle>> {
        let adapter = self
            .adapters
            .get(name)
            .ok_or_else(|| FlatBindError::UnknownAdapter {
                name: name.to_owned(),
            })?;
        let document = adapter.load(path)?;
        if self.active.is_some() {
            tracing::warn!(adapter = name, %path, "replacing active configuration instance");
        } else {
            tracing::info!(adapter = name, %path, "configuration instance initialised");
        }
        Ok(self.active.replace(ConfigHandle::from_value(document)))
    }

    /// Borrows the active instance, if one has been initialised.
    #[must_use]
    pub fn handle(&self) -> Option<&ConfigHandle> {
        self.active.as_ref()
    }

    /// Looks up a dotted path in the active instance.
    ///
    /// Returns `None` both for an absent path and for an uninitialised
    /// registry, mirroring a plain cache miss.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<QueryValue> {
        self.active.as_ref().and_then(|handle| handle.get(key))
    }

    /// Decodes the subtree at `prefix` from the active instance.
    ///
    /// # Errors
    ///
    /// Returns [`FlatBindError::Uninitialised`] before the first
    /// successful [`ConfigRegistry::init`], otherwise propagates
    /// [`ConfigHandle::resolve`] errors.
    pub fn resolve<T>(&self, prefix: &str) -> FlatBindResult<T>
    where
        T: FlatBind + Default,
    {
        self.active
            .as_ref()
            .ok_or(FlatBindError::Uninitialised)?
            .resolve(prefix)
    }
}

impl std::fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("adapters", &self.adapters.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .finish()
    }
}
