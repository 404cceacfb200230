use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use itemstore_core::Item;

/// Item store operation error.
///
/// Every variant other than `Config` means the document store could not serve
/// the call. None of them are retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Flat collection of items.
///
/// Implementations must:
/// - return items from `list()` in insertion order
/// - make an item visible to `list()` once `insert()` has returned `Ok`
/// - only ever persist validated items (guaranteed by `Item`'s constructor)
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// All stored items, oldest first.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Persist one new item.
    async fn insert(&self, item: Item) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list().await
    }

    async fn insert(&self, item: Item) -> Result<(), StoreError> {
        (**self).insert(item).await
    }
}
