//! HTTP client for the remote catalog service.
//!
//! Every call is a fresh round trip: the client holds no cache and performs
//! no retries. Staleness and retry policy belong to the screens.

use std::time::Duration;

use atelier_core::{AppConfig, Product};
use reqwest::{Client, StatusCode, Url};

use crate::error::ClientError;
use crate::normalize::normalize_record;

/// Client for the catalog's product collection endpoint.
///
/// With base URL `https://host/api/v1` and resource `tool`, the full catalog
/// is `GET https://host/api/v1/tool` and one product is
/// `GET https://host/api/v1/tool/{id}`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    collection_url: Url,
}

impl CatalogClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    /// - [`ClientError::InvalidBaseUrl`] if `base_url` does not parse or
    ///   cannot carry path segments.
    pub fn new(
        base_url: &str,
        resource: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let collection_url = Self::collection_url(base_url, resource)?;
        Ok(Self {
            client,
            collection_url,
        })
    }

    /// Creates a client from the `ATELIER_CATALOG_*` settings.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.catalog_base_url,
            &config.catalog_resource,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the full catalog.
    ///
    /// Records that fail validation are skipped and logged so one malformed
    /// record does not blank the whole catalog.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on transport failure.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.collection_url.clone();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let records = serde_json::from_str::<Vec<serde_json::Value>>(&body).map_err(|e| {
            ClientError::Deserialize {
                context: format!("product list from {url}"),
                source: e,
            }
        })?;

        let total = records.len();
        let products: Vec<Product> = records
            .into_iter()
            .filter_map(|record| match normalize_record(record) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed catalog record");
                    None
                }
            })
            .collect();

        tracing::debug!(
            total,
            kept = products.len(),
            url = %url,
            "fetched catalog"
        );
        Ok(products)
    }

    /// Fetches a single product by id.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] on HTTP 404.
    /// - [`ClientError::Http`] on transport failure.
    /// - [`ClientError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON object.
    /// - [`ClientError::Validation`] if the record has a mistyped field or
    ///   fails normalization.
    pub async fn fetch_one(&self, id: &str) -> Result<Product, ClientError> {
        let url = self.product_url(id);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id: id.to_owned() });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let record = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&body)
            .map_err(|e| ClientError::Deserialize {
                context: format!("product {id} from {url}"),
                source: e,
            })?;

        let product = normalize_record(serde_json::Value::Object(record))?;
        tracing::debug!(product_id = %product.id, "fetched product");
        Ok(product)
    }

    /// Builds `{base}/{resource}`, ensuring the base keeps its last path
    /// segment when joined.
    fn collection_url(base_url: &str, resource: &str) -> Result<Url, ClientError> {
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry path segments".to_owned(),
            });
        }
        base.join(resource.trim_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Builds `{collection}/{id}` with `id` percent-encoded as one segment.
    fn product_url(&self, id: &str) -> Url {
        let mut url = self.collection_url.clone();
        // cannot_be_a_base was rejected at construction, so segments are available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
