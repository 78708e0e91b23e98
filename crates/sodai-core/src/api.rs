//! Catalog and order endpoints.

use sodai_commerce::catalog::Catalog;
use sodai_commerce::checkout::{OrderRequest, SubmitOutcome};
use sodai_data::{FetchClient, Response};

use crate::config::ApiConfig;
use crate::StorefrontError;

/// Client for the storefront's two endpoints.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: FetchClient,
    config: ApiConfig,
}

impl StorefrontApi {
    /// `origin` is used when the configured base URL is empty.
    pub fn new(config: &ApiConfig, origin: &str) -> Self {
        let base = if config.base_url.trim().is_empty() {
            origin
        } else {
            config.base_url.as_str()
        };
        Self {
            client: FetchClient::new()
                .with_base_url(base)
                .with_default_header("Accept", "application/json"),
            config: config.clone(),
        }
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// Fetch and decode the catalog document.
    pub async fn fetch_catalog(&self) -> Result<Catalog, StorefrontError> {
        let response = self.client.get(&self.config.catalog_path).send().await?;
        decode_catalog(response)
    }

    /// Post an order. Never fails: transport errors become `SubmitOutcome::Failed`.
    pub async fn submit_order(&self, order: &OrderRequest) -> SubmitOutcome {
        let request = match self.client.post(&self.config.order_path).json(order) {
            Ok(request) => request,
            Err(e) => return SubmitOutcome::transport_failure(e.to_string()),
        };
        match request.send().await {
            Ok(response) => classify_reply(&response),
            Err(e) => SubmitOutcome::transport_failure(e.to_string()),
        }
    }
}

/// Decode a catalog reply; non-2xx statuses are errors.
pub fn decode_catalog(response: Response) -> Result<Catalog, StorefrontError> {
    let document: serde_json::Value = response.error_for_status()?.json()?;
    Ok(Catalog::from_value(document)?)
}

/// Classify an order endpoint reply.
pub fn classify_reply(response: &Response) -> SubmitOutcome {
    SubmitOutcome::from_reply(response.status, response.bytes())
}
