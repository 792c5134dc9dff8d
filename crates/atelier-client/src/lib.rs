pub mod client;
pub mod error;
pub mod normalize;
pub mod source;
pub mod types;

pub use client::CatalogClient;
pub use error::ClientError;
pub use normalize::normalize_product;
pub use source::CatalogSource;
pub use types::{RawComment, RawId, RawNumber, RawProduct};
