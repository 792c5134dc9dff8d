use atelier_core::FailureKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("product not found: {id}")]
    NotFound { id: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid product record {product_id}: {reason}")]
    Validation { product_id: String, reason: String },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ClientError {
    /// Classifies this error into the shared failure taxonomy.
    ///
    /// An unparsable response body counts as a service failure, not a
    /// validation failure: validation is about individual product records.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::NotFound { .. } => FailureKind::NotFound,
            ClientError::Validation { .. } => FailureKind::Validation,
            ClientError::Http(_)
            | ClientError::Deserialize { .. }
            | ClientError::UnexpectedStatus { .. }
            | ClientError::InvalidBaseUrl { .. } => FailureKind::Network,
        }
    }
}
