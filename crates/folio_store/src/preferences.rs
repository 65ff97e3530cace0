use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::{MemoryStorage, Storage};

/// Best-effort, optionally namespaced access to a [`Storage`] medium.
///
/// Cloning is cheap and shares the medium, so the locale and theme stores can
/// persist into the same place.
#[derive(Clone)]
pub struct Preferences {
    storage: Arc<dyn Storage>,
    scope: Option<String>,
}

impl Preferences {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            scope: None,
        }
    }

    /// Preferences over a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Prefix every key with `{scope}:`. An empty scope means no prefix.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        self.scope = if scope.is_empty() { None } else { Some(scope) };
        self
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The key actually used in the medium.
    pub fn scoped_key(&self, key: &str) -> String {
        match &self.scope {
            Some(scope) => format!("{scope}:{key}"),
            None => key.to_string(),
        }
    }

    /// Read a preference. Failures read as `None`.
    pub fn read(&self, key: &str) -> Option<String> {
        let key = self.scoped_key(key);
        match self.storage.get_item(&key) {
            Ok(value) => value,
            Err(err) => {
                debug!(key = %key, error = %err, "Preferences: read failed, treating as absent");
                None
            }
        }
    }

    /// Write a preference. Failures are dropped.
    pub fn write(&self, key: &str, value: &str) {
        let key = self.scoped_key(key);
        if let Err(err) = self.storage.set_item(&key, value) {
            debug!(key = %key, value, error = %err, "Preferences: write failed, not persisted");
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
