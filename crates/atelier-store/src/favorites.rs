//! Persisted favorites set.
//!
//! The whole collection lives in one JSON array of product snapshots under a
//! fixed key. There is no in-memory copy: every call reads the backend fresh,
//! so independent screens holding their own `FavoritesStore` always agree
//! with what was last written.

use std::collections::HashMap;
use std::sync::Arc;

use atelier_core::config::DEFAULT_FAVORITES_KEY;
use atelier_core::Product;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

#[derive(Debug)]
pub struct FavoritesStore<S> {
    backend: Arc<S>,
    key: String,
}

impl<S> Clone for FavoritesStore<S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
        }
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Creates a store using the default `favorites` key.
    #[must_use]
    pub fn new(backend: Arc<S>) -> Self {
        Self::with_key(backend, DEFAULT_FAVORITES_KEY)
    }

    #[must_use]
    pub fn with_key(backend: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Returns every favorite in insertion order.
    ///
    /// Unparsable stored content is treated as an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend read itself fails.
    pub async fn list(&self) -> Result<Vec<Product>, StorageError> {
        self.read().await
    }

    /// Returns `true` if a favorite with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend read fails.
    pub async fn contains(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.read().await?.iter().any(|p| p.id == id))
    }

    /// Inserts `product`, or replaces the existing snapshot with the same id
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read or the write fails; the stored
    /// set is unchanged in that case.
    pub async fn add(&self, product: &Product) -> Result<(), StorageError> {
        let mut entries = self.read().await?;
        match entries.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => existing.clone_from(product),
            None => entries.push(product.clone()),
        }
        self.write(&entries).await?;
        tracing::info!(product_id = %product.id, count = entries.len(), "favorite saved");
        Ok(())
    }

    /// Removes the favorite with `id`. Absent ids are a no-op and do not
    /// touch the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read or the write fails.
    pub async fn remove(&self, id: &str) -> Result<(), StorageError> {
        let mut entries = self.read().await?;
        let before = entries.len();
        entries.retain(|p| p.id != id);
        if entries.len() == before {
            tracing::debug!(product_id = %id, "remove of absent favorite ignored");
            return Ok(());
        }
        self.write(&entries).await?;
        tracing::info!(product_id = %id, count = entries.len(), "favorite removed");
        Ok(())
    }

    /// Removes every favorite.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend delete fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(&self.key).await?;
        tracing::info!("favorites cleared");
        Ok(())
    }

    async fn read(&self) -> Result<Vec<Product>, StorageError> {
        let Some(blob) = self.backend.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Product>>(&blob) {
            Ok(entries) => Ok(dedupe_by_id(entries)),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "stored favorites are unreadable; treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, entries: &[Product]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(entries)?;
        self.backend.set(&self.key, &blob).await
    }
}

/// Collapses duplicate ids in a stored blob: the first position is kept and
/// the last snapshot wins. Entries without an id are dropped.
fn dedupe_by_id(entries: Vec<Product>) -> Vec<Product> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Product> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.id.is_empty() {
            continue;
        }
        if let Some(&idx) = position.get(&entry.id) {
            out[idx] = entry;
        } else {
            position.insert(entry.id.clone(), out.len());
            out.push(entry);
        }
    }
    out
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
