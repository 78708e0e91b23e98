//! HTTP client for the Sodai storefront.
//!
//! A thin builder over `reqwest` that resolves endpoint paths against a base
//! URL and reads replies fully into a [`Response`]. On wasm32 `reqwest` goes
//! through the browser's `fetch`, which only accepts absolute URLs, so the
//! storefront passes the page origin as the base.
//!
//! # Example
//!
//! ```rust,ignore
//! use sodai_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("https://shop.example");
//!
//! let catalog: serde_json::Value = client.get("/api/data").send().await?.json()?;
//!
//! let reply = client
//!     .post("/send-email")
//!     .json(&order)?
//!     .send()
//!     .await?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = (!base_url.trim().is_empty()).then_some(base_url);
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !is_absolute(&url) => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self.client.clone(),
            builder,
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    client: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// The request as built so far.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and read the whole reply.
    ///
    /// Non-2xx statuses are returned as responses, not errors; use
    /// [`Response::error_for_status`] where a failure status should abort.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = self.builder;

        if !is_absolute(&url) {
            return Err(FetchError::InvalidUrl(url));
        }

        let mut request = self.client.request(method.to_reqwest(), url.as_str());
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        tracing::debug!(method = method.as_str(), url = %url, "sending request");
        let response = request.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(status, bytes = body.len(), url = %url, "response received");

        Ok(Response::new(status, headers, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_against_base() {
        let client = FetchClient::new().with_base_url("https://shop.example/");
        assert_eq!(client.get("/api/data").request().url(), "https://shop.example/api/data");
        assert_eq!(
            client.post("send-email").request().url(),
            "https://shop.example/send-email"
        );
        assert_eq!(
            client.get("http://other.example/x").request().url(),
            "http://other.example/x"
        );
    }

    #[test]
    fn test_blank_base_is_ignored() {
        let client = FetchClient::new().with_base_url("  ");
        assert_eq!(client.base_url(), None);
        assert_eq!(client.get("/api/data").request().url(), "/api/data");
    }

    #[test]
    fn test_default_headers_are_applied() {
        let client = FetchClient::new().with_default_header("Accept", "application/json");
        let builder = client.post("https://shop.example/send-email");
        assert_eq!(builder.request().header_value("Accept"), Some("application/json"));
        assert_eq!(builder.request().method(), Method::Post);
    }

    #[tokio::test]
    async fn test_relative_url_without_base_is_rejected() {
        let result = FetchClient::new().get("/api/data").send().await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(url)) if url == "/api/data"));
    }
}
