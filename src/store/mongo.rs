//! MongoDB-backed store. One client per process, shared by every request.

use super::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};
use crate::error::StoreError;
use crate::query::FindQuery;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{ClientOptions, FindOptions, UpdateOptions};
use mongodb::{Client, Collection, Database};

#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Parse the connection string, build the client and select `database`.
    /// The driver connects lazily; call `ping` to verify reachability.
    pub async fn connect(uri: &str, database: &str, app_name: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        if options.app_name.is_none() {
            options.app_name = Some(app_name.to_string());
        }
        let client = Client::with_options(options)?;
        let db = client.database(database);
        tracing::info!(database = %database, "document store client created");
        Ok(Self { client, db })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, query: &FindQuery) -> Result<Vec<Document>, StoreError> {
        let filter = query.filter_document();
        let options = FindOptions::builder().sort(query.sort_document()).build();
        tracing::debug!(collection = %collection, filter = %filter, sort = ?query.sort, "find");
        let cursor = self.collection(collection).find(filter, options).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, StoreError> {
        tracing::debug!(collection = %collection, id = %id, "find_one");
        Ok(self.collection(collection).find_one(doc! { "_id": id }, None).await?)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertOutcome, StoreError> {
        tracing::debug!(collection = %collection, "insert_one");
        let result = self.collection(collection).insert_one(doc, None).await?;
        Ok(InsertOutcome {
            inserted_id: result.inserted_id,
        })
    }

    async fn set_fields_upsert(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        tracing::debug!(collection = %collection, id = %id, "update_one (upsert)");
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, options)
            .await?;
        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
        })
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<DeleteOutcome, StoreError> {
        tracing::debug!(collection = %collection, id = %id, "delete_one");
        let result = self.collection(collection).delete_one(doc! { "_id": id }, None).await?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("document store client closed");
    }
}
