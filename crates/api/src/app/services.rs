use std::sync::Arc;

use itemstore_core::{Item, ItemName};
use itemstore_infra::{ItemStore, StoreConfig, StoreError};

/// Shared state handed to every handler.
///
/// Holds nothing but the store handle; requests are otherwise independent.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ItemStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Wire the store selected by `cfg` (timeout-wrapped).
    pub async fn from_config(cfg: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self::new(itemstore_infra::connect(cfg).await?))
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        self.store.list().await
    }

    /// Persist a new item with an already-validated name.
    pub async fn create_item(&self, name: ItemName) -> Result<Item, StoreError> {
        let item = Item::new(name);
        self.store.insert(item.clone()).await?;
        Ok(item)
    }
}
