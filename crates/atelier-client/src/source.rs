use std::future::Future;

use atelier_core::Product;

use crate::client::CatalogClient;
use crate::error::ClientError;

/// Where screens get catalog data from.
///
/// Implemented by [`CatalogClient`] for the real service; tests substitute
/// in-process fakes to control latency and failures.
pub trait CatalogSource: Send + Sync {
    /// Fetches the full product collection.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    /// Fetches one product by id.
    fn fetch_one(&self, id: &str) -> impl Future<Output = Result<Product, ClientError>> + Send;
}

impl CatalogSource for CatalogClient {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send {
        CatalogClient::fetch_all(self)
    }

    fn fetch_one(&self, id: &str) -> impl Future<Output = Result<Product, ClientError>> + Send {
        CatalogClient::fetch_one(self, id)
    }
}
