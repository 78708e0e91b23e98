//! Error types for the storefront core.

use sodai_cache::CacheError;
use sodai_commerce::CommerceError;
use sodai_data::FetchError;
use sodai_observability::LogInitError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Domain rule violated (empty cart, unknown product, ...).
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// An HTTP request failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LogInitError),
}
