//! HTTP client for the product manifest.

mod location;

use std::time::Duration;

use ganha_core::Product;
use reqwest::{Client, Url};

use crate::error::CatalogError;
use crate::types::parse_manifest;

pub use location::{is_local_page, manifest_url};

/// Fetches the product manifest over HTTP.
///
/// Every request asks intermediaries not to serve a cached copy. No retries
/// are attempted; callers decide what a failure means.
pub struct ManifestClient {
    client: Client,
}

impl ManifestClient {
    /// Creates a `ManifestClient` with the given `User-Agent`.
    ///
    /// `timeout_secs = None` configures no request timeout at all, leaving
    /// failure detection to the transport.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self, CatalogError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches and parses the manifest at `url`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::LocalFile`]: `url` uses the `file:` scheme.
    /// - [`CatalogError::Http`]: network or TLS failure.
    /// - [`CatalogError::UnexpectedStatus`]: any non-2xx status.
    /// - [`CatalogError::Deserialize`]: the body is not JSON, or its product
    ///   array holds something other than product objects.
    pub async fn fetch_manifest(&self, url: &Url) -> Result<Vec<Product>, CatalogError> {
        if url.scheme() == "file" {
            return Err(CatalogError::LocalFile {
                url: url.to_string(),
            });
        }

        tracing::debug!(%url, "fetching product manifest");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .header(reqwest::header::PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        parse_manifest(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("product manifest from {url}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
