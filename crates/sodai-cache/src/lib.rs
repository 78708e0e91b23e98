//! Type-safe key-value persistence for the Sodai storefront.
//!
//! Provides a small storage trait with a browser `localStorage` backend and an
//! in-memory backend, and a JSON-typed wrapper over either.
//!
//! # Example
//!
//! ```rust
//! use sodai_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart", &vec![1, 2, 3]).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Vec<u32>> = cache.get("cart").unwrap();
//! assert_eq!(cart, Some(vec![1, 2, 3]));
//!
//! // Delete a value
//! cache.delete("cart").unwrap();
//! assert!(!cache.exists("cart").unwrap());
//! ```

mod error;
mod kv;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;
mod store;

pub use error::CacheError;
pub use kv::Cache;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, MemoryStore};
}
