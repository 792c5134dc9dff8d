//! Screen controllers for the catalog browser.
//!
//! Each controller owns its screen-local state (loaded data, filter text,
//! loading flags, pending notice) and drives the shared [`LoadTracker`] state
//! machine. Favorites are never cached across screens: every controller reads
//! them through its own [`atelier_store::FavoritesStore`].

pub mod catalog;
pub mod detail;
pub mod favorites;
pub mod lifecycle;
pub mod notice;

pub use catalog::CatalogScreen;
pub use detail::{DetailScreen, ToggleOutcome};
pub use favorites::{FavoritesScreen, RemoveOutcome};
pub use lifecycle::{LoadOutcome, LoadTicket, LoadTracker, Phase, Settled, Trigger};
pub use notice::{Confirm, ConfirmPrompt, Notice};
