use std::sync::RwLock;

use itemstore_core::Item;

use super::r#trait::{ItemStore, StoreError};

/// In-memory item store.
///
/// Intended for tests/dev. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::unavailable("in-memory store lock poisoned"))?;
        Ok(items.clone())
    }

    async fn insert(&self, item: Item) -> Result<(), StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::unavailable("in-memory store lock poisoned"))?;
        items.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemstore_core::ItemName;

    fn item(name: &str) -> Item {
        Item::new(ItemName::new(name).unwrap())
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryItemStore::new();
        assert!(store.is_empty());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_is_visible_to_list() {
        let store = InMemoryItemStore::new();
        store.insert(item("apple")).await.unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(items, vec![item("apple")]);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_duplicates() {
        let store = InMemoryItemStore::new();
        for name in ["pear", "apple", "pear"] {
            store.insert(item(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["pear", "apple", "pear"]);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn list_is_idempotent() {
        let store = InMemoryItemStore::new();
        store.insert(item("a")).await.unwrap();
        store.insert(item("b")).await.unwrap();

        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = std::sync::Arc::new(InMemoryItemStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(item(&format!("item-{i}"))).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(store.list().await.unwrap().len(), 32);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: list returns exactly what was inserted, in order.
            #[test]
            fn list_mirrors_inserts(names in proptest::collection::vec("[a-z]{1,12}", 0..20)) {
                let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
                let listed = rt.block_on(async {
                    let store = InMemoryItemStore::new();
                    for n in &names {
                        store.insert(item(n)).await.unwrap();
                    }
                    store.list().await.unwrap()
                });

                let listed: Vec<String> = listed.into_iter().map(|i| i.name().to_string()).collect();
                prop_assert_eq!(listed, names);
            }
        }
    }
}
