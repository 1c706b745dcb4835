//! Document store abstraction. One trait call per catalog operation.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::{Settings, StoreBackend, CLUSTER_APP_NAME};
use crate::error::StoreError;
use crate::query::FindQuery;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct InsertOutcome {
    pub inserted_id: Bson,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Bson>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in `collection` matching the query, in the requested order.
    async fn find(&self, collection: &str, query: &FindQuery) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, StoreError>;

    /// Insert a document without `_id`; the store assigns one.
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertOutcome, StoreError>;

    /// `$set` the given fields on the document with `id`, inserting `{_id: id, ..fields}` when absent.
    async fn set_fields_upsert(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<DeleteOutcome, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. Called once after the server stops accepting requests.
    async fn shutdown(&self) {}
}

/// Construct the configured store and verify it answers a ping before any route is served.
pub async fn open_store(settings: &Settings) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let store: Arc<dyn DocumentStore> = match &settings.backend {
        StoreBackend::Mongo { uri } => {
            Arc::new(MongoStore::connect(uri, &settings.database, CLUSTER_APP_NAME).await?)
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    store.ping().await?;
    Ok(store)
}
