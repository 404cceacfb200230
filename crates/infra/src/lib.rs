//! Infrastructure layer: item persistence adapters and store configuration.

pub mod config;
pub mod item_store;

pub use config::{StoreBackend, StoreConfig};
pub use item_store::{connect, InMemoryItemStore, ItemStore, StoreError, TimeoutItemStore};
#[cfg(feature = "mongo")]
pub use item_store::MongoItemStore;
