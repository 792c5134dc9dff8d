//! Search and category filtering over product collections.
//!
//! Both functions are pure and keep the source order: the catalog screen
//! renders results and category chips in the order the service returned them.

use std::collections::HashSet;

use crate::product::Product;

/// Screen-local filter state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against `art_name`. Empty matches all.
    pub query: String,
    /// Exact match against `brand`. Empty matches all.
    pub category: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self::new(query, String::new())
    }

    /// Returns `true` when neither predicate constrains anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_empty()
    }

    /// Returns `true` if `product` passes both the category and query predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && matches_query(&self.query.to_lowercase(), product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category.is_empty() || product.brand == self.category
    }
}

fn matches_query(lowered_query: &str, product: &Product) -> bool {
    lowered_query.is_empty() || product.art_name.to_lowercase().contains(lowered_query)
}

/// Returns the products passing `criteria`, as an order-preserving subsequence
/// of `products`.
#[must_use]
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let lowered_query = criteria.query.to_lowercase();
    products
        .iter()
        .filter(|p| criteria.matches_category(p) && matches_query(&lowered_query, p))
        .collect()
}

/// Returns the distinct non-empty `brand` values in first-seen order.
///
/// Empty brands are skipped: an empty category already means "all".
#[must_use]
pub fn unique_categories(products: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.brand.as_str())
        .filter(|brand| !brand.is_empty() && seen.insert(*brand))
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
