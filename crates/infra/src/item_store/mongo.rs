//! MongoDB-backed item store.
//!
//! Items live in the `items` collection as `{ _id, name }` documents. The
//! driver-assigned `_id` is never read back; it only provides ordering.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use itemstore_core::{Item, ItemName};

use super::r#trait::{ItemStore, StoreError};
use crate::config::{StoreConfig, ITEMS_COLLECTION};

/// Item store over a MongoDB collection.
///
/// The driver keeps its own connection pool, so one instance is shared by
/// all requests.
#[derive(Debug, Clone)]
pub struct MongoItemStore {
    collection: Collection<Document>,
}

impl MongoItemStore {
    /// Build a client for `cfg`.
    ///
    /// Server selection and connect timeouts are bounded by `cfg.timeout` so
    /// that an unreachable server fails a request instead of stalling it.
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(cfg.mongo_uri())
            .await
            .map_err(|e| StoreError::Config(format!("invalid mongodb uri: {e}")))?;
        options.app_name = Some("itemstore".to_string());
        options.server_selection_timeout = Some(cfg.timeout);
        options.connect_timeout = Some(cfg.timeout);

        let client = Client::with_options(options)
            .map_err(|e| StoreError::Config(format!("mongodb client: {e}")))?;

        Ok(Self::from_collection(
            client.database(&cfg.database).collection(ITEMS_COLLECTION),
        ))
    }

    pub fn from_collection(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

fn unavailable(err: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

/// Map a stored document to an `Item`, or `None` if it has no usable `name`.
fn document_to_item(document: &Document) -> Option<Item> {
    let name = document.get_str("name").ok()?;
    ItemName::new(name).ok().map(Item::new)
}

fn item_to_document(item: &Item) -> Document {
    doc! { "name": item.name().as_str() }
}

#[async_trait::async_trait]
impl ItemStore for MongoItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .projection(doc! { "_id": 0, "name": 1 })
            .await
            .map_err(unavailable)?
            .try_collect()
            .await
            .map_err(unavailable)?;

        let mut items = Vec::with_capacity(documents.len());
        for document in &documents {
            match document_to_item(document) {
                Some(item) => items.push(item),
                None => tracing::warn!(?document, "skipping item document without a valid name"),
            }
        }
        Ok(items)
    }

    async fn insert(&self, item: Item) -> Result<(), StoreError> {
        self.collection
            .insert_one(item_to_document(&item))
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}
