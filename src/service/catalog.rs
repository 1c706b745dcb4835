//! Toy and review operations over any `DocumentStore`.

use crate::document::document_to_json;
use crate::error::AppError;
use crate::model::{ToyUpdate, REVIEWS, TOYS};
use crate::query::FindQuery;
use crate::store::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;

pub struct CatalogService;

impl CatalogService {
    /// Every toy in natural store order.
    pub async fn list_toys(store: &dyn DocumentStore) -> Result<Vec<Value>, AppError> {
        Self::find_toys(store, &FindQuery::all()).await
    }

    /// Toys matching an exact-match filter, optionally sorted.
    pub async fn find_toys(store: &dyn DocumentStore, query: &FindQuery) -> Result<Vec<Value>, AppError> {
        let docs = store.find(TOYS, query).await?;
        Ok(docs.into_iter().map(document_to_json).collect())
    }

    pub async fn get_toy(store: &dyn DocumentStore, id: ObjectId) -> Result<Option<Value>, AppError> {
        Ok(store.find_by_id(TOYS, id).await?.map(document_to_json))
    }

    pub async fn create_toy(store: &dyn DocumentStore, toy: Document) -> Result<InsertOutcome, AppError> {
        let outcome = store.insert_one(TOYS, toy).await?;
        tracing::info!(id = %outcome.inserted_id, "toy created");
        Ok(outcome)
    }

    /// Replace the seven listing fields, creating the toy under `id` when it does not exist.
    pub async fn update_toy(
        store: &dyn DocumentStore,
        id: ObjectId,
        update: ToyUpdate,
    ) -> Result<UpdateOutcome, AppError> {
        let outcome = store.set_fields_upsert(TOYS, id, update.into_document()).await?;
        tracing::info!(
            id = %id,
            matched = outcome.matched_count,
            modified = outcome.modified_count,
            upserted = outcome.upserted_id.is_some(),
            "toy updated"
        );
        Ok(outcome)
    }

    pub async fn delete_toy(store: &dyn DocumentStore, id: ObjectId) -> Result<DeleteOutcome, AppError> {
        let outcome = store.delete_by_id(TOYS, id).await?;
        tracing::info!(id = %id, deleted = outcome.deleted_count, "toy deleted");
        Ok(outcome)
    }

    pub async fn list_reviews(store: &dyn DocumentStore) -> Result<Vec<Value>, AppError> {
        let docs = store.find(REVIEWS, &FindQuery::all()).await?;
        Ok(docs.into_iter().map(document_to_json).collect())
    }
}
