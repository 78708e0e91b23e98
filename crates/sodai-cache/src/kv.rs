//! Typed wrapper with automatic serialization.

use crate::{CacheError, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any `KeyValueStore`.
///
/// Values go through JSON; `get_text`/`set_text` store plain strings.
#[derive(Debug, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set_raw(key, &text)
    }

    /// Get a plain string value.
    pub fn get_text(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get_raw(key)
    }

    /// Set a plain string value.
    pub fn set_text(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store.set_raw(key, value)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }
}
