use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::price::{price_view, PriceView};
use crate::rating::DerivedRating;

/// A catalog product as served by the remote service, normalized for the
/// client. The client never mutates these; it only re-fetches.
///
/// Serialized field names follow the service's camelCase shape so a favorites
/// snapshot is stored as the same JSON the service produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Stable identifier, always non-empty after normalization.
    pub id: String,
    pub art_name: String,
    /// Base price in currency units, never negative.
    pub price: f64,
    /// Discount fraction in `[0, 1)`; `0.0` means no deal.
    pub limited_time_deal: f64,
    /// Image URI.
    pub image: String,
    pub description: String,
    /// Category key used by the category filter.
    pub brand: String,
    pub glass_surface: bool,
    pub comments: Vec<Comment>,
}

impl Product {
    /// Returns `true` when a limited-time deal is active.
    #[must_use]
    pub fn has_deal(&self) -> bool {
        self.limited_time_deal > 0.0
    }

    #[must_use]
    pub fn price_view(&self) -> PriceView {
        price_view(self)
    }

    #[must_use]
    pub fn rating(&self) -> DerivedRating {
        DerivedRating::from_comments(&self.comments)
    }
}

/// A customer review embedded in its parent [`Product`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: String,
    pub user: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
    /// Date the review was written; absent when the service sent an
    /// unparsable value.
    pub created_at: Option<NaiveDate>,
}
