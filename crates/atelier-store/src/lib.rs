pub mod error;
pub mod favorites;
pub mod file;
pub mod kv;

pub use error::StorageError;
pub use favorites::FavoritesStore;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
