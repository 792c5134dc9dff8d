pub mod app_config;
pub mod config;
pub mod filter;
pub mod format;
pub mod price;
pub mod product;
pub mod rating;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter, unique_categories, FilterCriteria};
pub use format::{format_comment_date, format_usd, yes_no};
pub use price::{price_view, PriceView};
pub use product::{Comment, Product};
pub use rating::{average_rating, DerivedRating};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Failure taxonomy shared by every layer that talks to a collaborator.
///
/// Crate-specific error enums classify themselves into one of these so the
/// screens can decide how to recover without matching on transport details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure or non-success response from the catalog service.
    Network,
    /// The catalog service has no product with the requested id.
    NotFound,
    /// The persistent key-value store could not be read or written.
    Storage,
    /// A product record is missing a required field or carries an
    /// out-of-range value.
    Validation,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Storage => write!(f, "storage"),
            FailureKind::Validation => write!(f, "validation"),
        }
    }
}
