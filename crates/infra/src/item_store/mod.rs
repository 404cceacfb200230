//! Item persistence boundary.
//!
//! Handlers only see `ItemStore`; the concrete backend is chosen at startup
//! from [`StoreConfig`](crate::config::StoreConfig).

pub mod in_memory;
#[cfg(feature = "mongo")]
pub mod mongo;
pub mod timeout;
pub mod r#trait;

use std::sync::Arc;

pub use in_memory::InMemoryItemStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoItemStore;
pub use r#trait::{ItemStore, StoreError};
pub use timeout::TimeoutItemStore;

use crate::config::{StoreBackend, StoreConfig};

/// Build the configured store, wrapped with the per-call timeout.
///
/// For MongoDB this does not wait for the server: the driver connects lazily,
/// so an unreachable store surfaces on the first request instead of at boot.
pub async fn connect(cfg: &StoreConfig) -> Result<Arc<dyn ItemStore>, StoreError> {
    match cfg.backend {
        StoreBackend::Memory => {
            tracing::info!("using in-memory item store");
            Ok(Arc::new(TimeoutItemStore::new(InMemoryItemStore::new(), cfg.timeout)))
        }
        #[cfg(feature = "mongo")]
        StoreBackend::Mongo => {
            let store = MongoItemStore::connect(cfg).await?;
            tracing::info!(
                host = %cfg.host,
                port = cfg.port,
                database = %cfg.database,
                "using mongodb item store"
            );
            Ok(Arc::new(TimeoutItemStore::new(store, cfg.timeout)))
        }
        #[cfg(not(feature = "mongo"))]
        StoreBackend::Mongo => Err(StoreError::Config(
            "mongo backend requested but the `mongo` feature is disabled".to_string(),
        )),
    }
}
