//! Storefront configuration.

use serde::{Deserialize, Serialize};
use sodai_commerce::i18n::Language;
use sodai_observability::{LogConfig, LogFormat, LogLevel};

use crate::StorefrontError;

/// Endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the endpoint paths are resolved against. Empty means the page origin.
    pub base_url: String,
    /// Catalog document endpoint.
    pub catalog_path: String,
    /// Order submission endpoint.
    pub order_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            catalog_path: "/api/data".to_string(),
            order_path: "/send-email".to_string(),
        }
    }
}

/// Persisted key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub language_key: String,
    pub cart_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            language_key: "language".to_string(),
            cart_key: "cart".to_string(),
        }
    }
}

/// Configuration for the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    /// Language used when none has been persisted yet.
    pub default_language: Language,
    pub logging: LogConfig,
}

impl StorefrontConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("Failed to parse TOML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json(content: &str) -> Result<Self, StorefrontError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| StorefrontError::Config(format!("Failed to parse JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse by file name: `.json` as JSON, anything else as TOML.
    pub fn parse(name: &str, content: &str) -> Result<Self, StorefrontError> {
        if name.ends_with(".json") {
            Self::from_json(content)
        } else {
            Self::from_toml(content)
        }
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Set the fallback language.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Check paths and keys are usable.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        for (name, path) in [
            ("api.catalog_path", &self.api.catalog_path),
            ("api.order_path", &self.api.order_path),
        ] {
            if !path.starts_with('/') && !path.starts_with("http://") && !path.starts_with("https://") {
                return Err(StorefrontError::Config(format!(
                    "{} must be an absolute path or URL, got {:?}",
                    name, path
                )));
            }
        }
        for (name, key) in [
            ("storage.language_key", &self.storage.language_key),
            ("storage.cart_key", &self.storage.cart_key),
        ] {
            if key.trim().is_empty() {
                return Err(StorefrontError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.storage.language_key == self.storage.cart_key {
            return Err(StorefrontError::Config(
                "storage keys for language and cart must differ".to_string(),
            ));
        }
        Ok(())
    }
}
