use std::future::Future;
use std::time::Duration;

use itemstore_core::Item;

use super::r#trait::{ItemStore, StoreError};

/// Decorator bounding every call on the inner store.
///
/// An expired call yields `StoreError::Timeout`; the inner future is dropped.
#[derive(Debug)]
pub struct TimeoutItemStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimeoutItemStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => res,
            Err(_) => {
                tracing::warn!(op, timeout_ms = self.timeout.as_millis() as u64, "store call timed out");
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait::async_trait]
impl<S> ItemStore for TimeoutItemStore<S>
where
    S: ItemStore,
{
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.bounded("list", self.inner.list()).await
    }

    async fn insert(&self, item: Item) -> Result<(), StoreError> {
        self.bounded("insert", self.inner.insert(item)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_store::InMemoryItemStore;
    use itemstore_core::ItemName;

    /// Store whose calls never complete.
    struct HangingStore;

    #[async_trait::async_trait]
    impl ItemStore for HangingStore {
        async fn list(&self) -> Result<Vec<Item>, StoreError> {
            std::future::pending().await
        }

        async fn insert(&self, _item: Item) -> Result<(), StoreError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn fast_calls_pass_through() {
        let store = TimeoutItemStore::new(InMemoryItemStore::new(), Duration::from_secs(1));
        store
            .insert(Item::new(ItemName::new("apple").unwrap()))
            .await
            .unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert_eq!(store.into_inner().len(), 1);
    }

    #[tokio::test]
    async fn hanging_list_times_out() {
        let store = TimeoutItemStore::new(HangingStore, Duration::from_millis(20));
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Timeout(d) if d == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn hanging_insert_times_out() {
        let store = TimeoutItemStore::new(HangingStore, Duration::from_millis(20));
        let err = store
            .insert(Item::new(ItemName::new("apple").unwrap()))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Timeout(_)));
    }
}
