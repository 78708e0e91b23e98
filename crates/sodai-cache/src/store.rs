//! Storage backend trait.

use crate::CacheError;
use std::rc::Rc;

/// A string-to-string store scoped to the browsing client.
///
/// Methods take `&self`: backends are single-threaded and use interior
/// mutability (the browser storage handle, or a `RefCell`).
pub trait KeyValueStore {
    /// Read the raw value for a key.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write the raw value for a key.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get_raw(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}
