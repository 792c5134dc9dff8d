//! Home screen: the full catalog with search text and a category chip row.

use std::sync::Arc;

use atelier_client::{CatalogSource, ClientError};
use atelier_core::{filter, unique_categories, FilterCriteria, Product};

use crate::lifecycle::{LoadOutcome, LoadTicket, LoadTracker, Phase, Settled, Trigger};
use crate::notice::Notice;

#[derive(Debug)]
pub struct CatalogScreen<C> {
    catalog: Arc<C>,
    tracker: LoadTracker,
    products: Vec<Product>,
    criteria: FilterCriteria,
    notice: Option<Notice>,
}

impl<C: CatalogSource> CatalogScreen<C> {
    #[must_use]
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            tracker: LoadTracker::new(),
            products: Vec::new(),
            criteria: FilterCriteria::default(),
            notice: None,
        }
    }

    /// The catalog source, for shells that run fetches themselves via
    /// [`Self::begin_load`] and [`Self::finish_load`].
    #[must_use]
    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    pub async fn on_mount(&mut self) -> LoadOutcome {
        self.load(Trigger::Mount).await
    }

    pub async fn on_focus(&mut self) -> LoadOutcome {
        self.load(Trigger::Focus).await
    }

    pub async fn refresh(&mut self) -> LoadOutcome {
        self.load(Trigger::Refresh).await
    }

    async fn load(&mut self, trigger: Trigger) -> LoadOutcome {
        let ticket = self.begin_load(trigger);
        let result = self.catalog.fetch_all().await;
        self.finish_load(ticket, result)
    }

    /// Starts a fetch without awaiting it.
    pub fn begin_load(&mut self, trigger: Trigger) -> LoadTicket {
        self.tracker.begin(trigger)
    }

    /// Applies a fetch started with [`Self::begin_load`], unless a newer
    /// result already landed or the screen was unmounted.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, ClientError>,
    ) -> LoadOutcome {
        match self.tracker.settle(ticket, result.is_ok()) {
            Settled::Stale => return LoadOutcome::Stale,
            Settled::Unmounted => return LoadOutcome::Unmounted,
            Settled::Current => {}
        }
        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog applied");
                self.products = products;
                LoadOutcome::Applied
            }
            Err(e) => {
                let kind = e.kind();
                tracing::warn!(error = %e, %kind, "catalog fetch failed");
                self.notice = Some(Notice::failed(kind, &e));
                LoadOutcome::Failed(kind)
            }
        }
    }

    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    /// Selects a category chip. Selecting the active chip again clears it.
    pub fn select_category(&mut self, category: &str) {
        if self.criteria.category == category {
            self.criteria.category.clear();
        } else {
            category.clone_into(&mut self.criteria.category);
        }
    }

    /// The "See all" chip.
    pub fn clear_category(&mut self) {
        self.criteria.category.clear();
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Everything the last successful fetch returned, unfiltered.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the current query and category.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        filter(&self.products, &self.criteria)
    }

    /// Chip row, derived from the full catalog so chips never disappear
    /// while a query is typed.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        unique_categories(&self.products)
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

    /// `true` once loaded with nothing to show at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracker.phase() == Phase::Ready && self.products.is_empty()
    }

    /// Returns the pending notice, if any, and clears it.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
