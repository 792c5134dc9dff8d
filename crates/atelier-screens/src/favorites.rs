//! Favorites screen: the persisted set with search, single removal and
//! remove-all, both behind a confirmation.

use atelier_core::{filter, FilterCriteria, Product};
use atelier_store::{FavoritesStore, KeyValueStore, StorageError};

use crate::lifecycle::{LoadOutcome, LoadTicket, LoadTracker, Phase, Settled, Trigger};
use crate::notice::{Confirm, ConfirmPrompt, Notice};

/// Result of a confirmed destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined the confirmation; nothing changed.
    Cancelled,
    /// Nothing to remove (unknown id, or remove-all on an empty list).
    Nothing,
    /// The store failed; the displayed list is unchanged.
    Failed(atelier_core::FailureKind),
}

#[derive(Debug)]
pub struct FavoritesScreen<S> {
    favorites: FavoritesStore<S>,
    tracker: LoadTracker,
    entries: Vec<Product>,
    criteria: FilterCriteria,
    notice: Option<Notice>,
}

impl<S: KeyValueStore> FavoritesScreen<S> {
    #[must_use]
    pub fn new(favorites: FavoritesStore<S>) -> Self {
        Self {
            favorites,
            tracker: LoadTracker::new(),
            entries: Vec::new(),
            criteria: FilterCriteria::default(),
            notice: None,
        }
    }

    pub async fn on_mount(&mut self) -> LoadOutcome {
        self.load(Trigger::Mount).await
    }

    /// Re-reads the store so removals made elsewhere show up.
    pub async fn on_focus(&mut self) -> LoadOutcome {
        self.load(Trigger::Focus).await
    }

    pub async fn refresh(&mut self) -> LoadOutcome {
        self.load(Trigger::Refresh).await
    }

    async fn load(&mut self, trigger: Trigger) -> LoadOutcome {
        let ticket = self.begin_load(trigger);
        let result = self.favorites.list().await;
        self.finish_load(ticket, result)
    }

    pub fn begin_load(&mut self, trigger: Trigger) -> LoadTicket {
        self.tracker.begin(trigger)
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, StorageError>,
    ) -> LoadOutcome {
        match self.tracker.settle(ticket, result.is_ok()) {
            Settled::Stale => return LoadOutcome::Stale,
            Settled::Unmounted => return LoadOutcome::Unmounted,
            Settled::Current => {}
        }
        match result {
            Ok(entries) => {
                self.entries = entries;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "favorites read failed");
                let kind = e.kind();
                self.notice = Some(Notice::failed(kind, &e));
                LoadOutcome::Failed(kind)
            }
        }
    }

    /// Asks for confirmation, then removes `id` and re-reads the store.
    pub async fn remove(&mut self, id: &str, confirm: &impl Confirm) -> RemoveOutcome {
        let Some(entry) = self.entries.iter().find(|p| p.id == id) else {
            return RemoveOutcome::Nothing;
        };
        let prompt = ConfirmPrompt::RemoveFavorite {
            art_name: entry.art_name.clone(),
        };
        if !confirm.confirm(&prompt) {
            return RemoveOutcome::Cancelled;
        }
        if let Err(e) = self.favorites.remove(id).await {
            tracing::warn!(product_id = %id, error = %e, "favorite removal failed");
            return self.fail(&e);
        }
        self.notice = Some(Notice::FavoriteRemoved);
        self.reload_after_write().await;
        RemoveOutcome::Removed
    }

    /// Asks for confirmation, then empties the store. A no-op without a
    /// prompt when there is nothing to remove.
    pub async fn clear_all(&mut self, confirm: &impl Confirm) -> RemoveOutcome {
        if self.entries.is_empty() {
            return RemoveOutcome::Nothing;
        }
        if !confirm.confirm(&ConfirmPrompt::RemoveAll) {
            return RemoveOutcome::Cancelled;
        }
        if let Err(e) = self.favorites.clear().await {
            tracing::warn!(error = %e, "clearing favorites failed");
            return self.fail(&e);
        }
        self.notice = Some(Notice::FavoritesCleared);
        self.reload_after_write().await;
        RemoveOutcome::Removed
    }

    fn fail(&mut self, error: &StorageError) -> RemoveOutcome {
        let kind = error.kind();
        self.notice = Some(Notice::failed(kind, error));
        RemoveOutcome::Failed(kind)
    }

    async fn reload_after_write(&mut self) {
        match self.favorites.list().await {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                tracing::warn!(error = %e, "favorites re-read failed");
                self.notice = Some(Notice::failed(e.kind(), &e));
            }
        }
    }

    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.criteria.query
    }

    /// Every favorite in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Favorites whose name matches the current query.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        filter(&self.entries, &self.criteria)
    }

    /// Size of the whole set, independent of the query.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Looks up a favorite for navigation to its detail screen.
    #[must_use]
    pub fn open(&self, id: &str) -> Option<&Product> {
        self.entries.iter().find(|p| p.id == id)
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

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracker.phase() == Phase::Ready && self.entries.is_empty()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
