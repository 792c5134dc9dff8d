//! Product detail screen with the favorite toggle.
//!
//! The displayed favorite flag is always re-derived from the store after a
//! mutation and on every focus, so a removal made on the favorites screen
//! shows up here without any shared in-memory state.

use std::sync::Arc;

use atelier_client::{CatalogSource, ClientError};
use atelier_core::{FailureKind, Product};
use atelier_store::{FavoritesStore, KeyValueStore};

use crate::lifecycle::{LoadOutcome, LoadTicket, LoadTracker, Phase, Settled, Trigger};
use crate::notice::Notice;

/// Result of [`DetailScreen::toggle_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// No product is loaded yet, so there is nothing to toggle.
    Unavailable,
    /// The store failed; the displayed flag is unchanged.
    Failed(FailureKind),
}

#[derive(Debug)]
pub struct DetailScreen<C, S> {
    catalog: Arc<C>,
    favorites: FavoritesStore<S>,
    product_id: Option<String>,
    tracker: LoadTracker,
    product: Option<Product>,
    is_favorite: bool,
    notice: Option<Notice>,
}

impl<C: CatalogSource, S: KeyValueStore> DetailScreen<C, S> {
    /// `product_id` is `None` when the screen was opened without a target;
    /// the screen then stays in its "no product" state and never fetches.
    #[must_use]
    pub fn new(catalog: Arc<C>, favorites: FavoritesStore<S>, product_id: Option<String>) -> Self {
        Self {
            catalog,
            favorites,
            product_id,
            tracker: LoadTracker::new(),
            product: None,
            is_favorite: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub async fn on_mount(&mut self) -> LoadOutcome {
        self.load(Trigger::Mount).await
    }

    /// Re-fetches the product and re-checks the favorite flag.
    pub async fn on_focus(&mut self) -> LoadOutcome {
        self.load(Trigger::Focus).await
    }

    pub async fn refresh(&mut self) -> LoadOutcome {
        self.load(Trigger::Refresh).await
    }

    async fn load(&mut self, trigger: Trigger) -> LoadOutcome {
        let Some(id) = self.product_id.clone() else {
            return LoadOutcome::Skipped;
        };
        let ticket = self.begin_load(trigger);
        let result = self.catalog.fetch_one(&id).await;
        let outcome = self.finish_load(ticket, result);
        if self.tracker.is_mounted() {
            self.recheck_favorite().await;
        }
        outcome
    }

    pub fn begin_load(&mut self, trigger: Trigger) -> LoadTicket {
        self.tracker.begin(trigger)
    }

    /// Applies a product fetch started with [`Self::begin_load`].
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Product, ClientError>,
    ) -> LoadOutcome {
        match self.tracker.settle(ticket, result.is_ok()) {
            Settled::Stale => return LoadOutcome::Stale,
            Settled::Unmounted => return LoadOutcome::Unmounted,
            Settled::Current => {}
        }
        match result {
            Ok(product) => {
                self.product = Some(product);
                LoadOutcome::Applied
            }
            Err(e) => {
                let kind = e.kind();
                tracing::warn!(
                    product_id = ?self.product_id,
                    error = %e,
                    %kind,
                    "product fetch failed"
                );
                self.notice = Some(Notice::failed(kind, &e));
                LoadOutcome::Failed(kind)
            }
        }
    }

    /// Reads the favorite flag for the target product from the store.
    /// On a storage failure the previous flag is kept.
    pub async fn recheck_favorite(&mut self) {
        let Some(id) = self.product_id.as_deref() else {
            return;
        };
        match self.favorites.contains(id).await {
            Ok(flag) => self.is_favorite = flag,
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "favorite check failed");
                self.notice = Some(Notice::failed(e.kind(), &e));
            }
        }
    }

    /// Removes the product from favorites if it is one, otherwise saves the
    /// loaded snapshot. The flag is then re-read from the store.
    pub async fn toggle_favorite(&mut self) -> ToggleOutcome {
        let Some(product) = self.product.as_ref() else {
            return ToggleOutcome::Unavailable;
        };
        let removing = self.is_favorite;
        let written = if removing {
            self.favorites.remove(&product.id).await
        } else {
            self.favorites.add(product).await
        };
        if let Err(e) = written {
            tracing::warn!(product_id = %product.id, error = %e, "favorite toggle failed");
            let kind = e.kind();
            self.notice = Some(Notice::failed(kind, &e));
            return ToggleOutcome::Failed(kind);
        }

        let id = product.id.clone();
        match self.favorites.contains(&id).await {
            Ok(flag) => {
                self.is_favorite = flag;
                if flag {
                    self.notice = Some(Notice::FavoriteAdded);
                    ToggleOutcome::Added
                } else {
                    self.notice = Some(Notice::FavoriteRemoved);
                    ToggleOutcome::Removed
                }
            }
            // The write landed but the flag can't be confirmed; the next focus
            // re-check corrects it.
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "favorite re-check failed");
                let kind = e.kind();
                self.notice = Some(Notice::failed(kind, &e));
                ToggleOutcome::Failed(kind)
            }
        }
    }

    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// `true` when opened without a product id.
    #[must_use]
    pub fn has_no_product(&self) -> bool {
        self.product_id.is_none()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.tracker.phase()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.tracker.is_refreshing()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
