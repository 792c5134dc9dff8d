//! Wire types for the catalog service's product endpoints.
//!
//! ## Observed shape
//!
//! The service is a mock REST backend that owns the schema and is loose about
//! it, so every field is optional here and defaults are applied in
//! `normalize.rs`.
//!
//! ### `id`
//! Usually a JSON string (`"12"`), occasionally a number. Both are accepted
//! through [`RawId`].
//!
//! ### `price` / `limitedTimeDeal`
//! Numbers in practice; hand-edited records sometimes carry numeric strings
//! (`"12.5"`), accepted through [`RawNumber`].
//!
//! ### `comments[].createdAt`
//! Day-first `DD-MM-YYYY` strings. Parsing is best-effort.

use serde::Deserialize;

/// A product record as returned by `GET /{resource}` or `GET /{resource}/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<RawId>,

    #[serde(default)]
    pub art_name: Option<String>,

    #[serde(default)]
    pub price: Option<RawNumber>,

    /// Discount fraction; absent or `0` when there is no deal.
    #[serde(default)]
    pub limited_time_deal: Option<RawNumber>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Used as the category key.
    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub glass_surface: Option<bool>,

    #[serde(default)]
    pub comments: Option<Vec<RawComment>>,
}

/// A review embedded in a [`RawProduct`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    #[serde(default)]
    pub id: Option<RawId>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub rating: Option<RawNumber>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Identifier sent either as a string or as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    /// Returns the identifier as a trimmed string.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s.trim().to_owned(),
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Numeric value sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Returns the value as `f64`, or `None` when a string does not parse.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}
