//! Sodai storefront core.
//!
//! Ties the pure domain crate to persistence, HTTP and logging:
//!
//! - [`Storefront`] - the application state object, generic over a
//!   [`KeyValueStore`](sodai_cache::KeyValueStore)
//! - [`StorefrontConfig`] - endpoint, storage, language and logging settings
//! - [`StorefrontApi`] - the catalog and order endpoints
//! - [`routes`] - `/category/<id>` paths and the `open_modal` parameter
//! - [`install_catalog`] and [`open_requested`] - startup sequence
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sodai_core::prelude::*;
//!
//! let config = StorefrontConfig::default();
//! sodai_observability::init(&config.logging)?;
//!
//! let mut state = Storefront::load(LocalStorage::open()?, &config);
//! let api = StorefrontApi::new(&config.api, &origin);
//! install_catalog(&mut state, api.fetch_catalog().await);
//! let effects = open_requested(&mut state, open_modal.as_deref());
//! ```

pub mod api;
pub mod config;
mod error;
pub mod routes;
mod startup;
mod state;

pub use api::StorefrontApi;
pub use config::{ApiConfig, StorageConfig, StorefrontConfig};
pub use error::StorefrontError;
pub use startup::{install_catalog, open_requested, StartupEffects};
pub use state::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::routes::{ResultNavigation, OPEN_MODAL_PARAM};
    pub use crate::{install_catalog, open_requested, StartupEffects, Storefront, StorefrontApi, StorefrontConfig, StorefrontError};
    pub use sodai_cache::{KeyValueStore, MemoryStore};
    pub use sodai_commerce::prelude::*;
}
