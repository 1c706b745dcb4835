//! In-process store with the same observable semantics as the MongoDB store for the operations the
//! catalog issues. Backs the test suite and `STORE_BACKEND=memory` local runs.

use super::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};
use crate::error::StoreError;
use crate::query::{FindQuery, SortOrder};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with documents as-is (used for read-only collections such as reviews).
    pub async fn seed(&self, collection: &str, docs: impl IntoIterator<Item = Document>) {
        let mut guard = self.collections.write().await;
        let entries = guard.entry(collection.to_string()).or_default();
        for mut doc in docs {
            if !doc.contains_key("_id") {
                doc = with_id(ObjectId::new(), doc);
            }
            entries.push(doc);
        }
    }
}

fn with_id(id: ObjectId, doc: Document) -> Document {
    let mut out = Document::new();
    out.insert("_id", id);
    for (k, v) in doc {
        if k != "_id" {
            out.insert(k, v);
        }
    }
    out
}

fn id_matches(doc: &Document, id: &ObjectId) -> bool {
    matches!(doc.get("_id"), Some(Bson::ObjectId(oid)) if oid == id)
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(f) => Some(*f),
        _ => None,
    }
}

fn values_equal(a: &Bson, b: &Bson) -> bool {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn matches_filter(doc: &Document, filter: &[(String, Bson)]) -> bool {
    filter
        .iter()
        .all(|(field, expected)| doc.get(field).is_some_and(|actual| values_equal(actual, expected)))
}

/// Cross-type rank in MongoDB's sort order: missing/null, then numbers, then strings, then the rest.
fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        None | Some(Bson::Null) => 0,
        Some(v) if as_number(v).is_some() => 1,
        Some(Bson::String(_)) => 2,
        Some(_) => 3,
    }
}

fn compare_field(a: &Document, b: &Document, field: &str) -> Ordering {
    let (va, vb) = (a.get(field), b.get(field));
    let rank = type_rank(va).cmp(&type_rank(vb));
    if rank != Ordering::Equal {
        return rank;
    }
    match (va, vb) {
        (Some(Bson::String(x)), Some(Bson::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (as_number(x), as_number(y)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, query: &FindQuery) -> Result<Vec<Document>, StoreError> {
        let guard = self.collections.read().await;
        let mut docs: Vec<Document> = guard
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_filter(d, &query.filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if let Some(sort) = &query.sort {
            docs.sort_by(|a, b| {
                let ord = compare_field(a, b, &sort.field);
                match sort.order {
                    SortOrder::Ascending => ord,
                    SortOrder::Descending => ord.reverse(),
                }
            });
        }
        Ok(docs)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> Result<Option<Document>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| id_matches(d, &id)).cloned()))
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertOutcome, StoreError> {
        let id = ObjectId::new();
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(with_id(id, doc));
        Ok(InsertOutcome {
            inserted_id: Bson::ObjectId(id),
        })
    }

    async fn set_fields_upsert(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_string()).or_default();
        if let Some(existing) = docs.iter_mut().find(|d| id_matches(d, &id)) {
            let mut changed = false;
            for (k, v) in fields {
                if existing.get(&k) != Some(&v) {
                    existing.insert(k, v);
                    changed = true;
                }
            }
            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: u64::from(changed),
                upserted_id: None,
            });
        }
        docs.push(with_id(id, fields));
        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(Bson::ObjectId(id)),
        })
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<DeleteOutcome, StoreError> {
        let mut guard = self.collections.write().await;
        let deleted_count = match guard.get_mut(collection) {
            Some(docs) => match docs.iter().position(|d| id_matches(d, &id)) {
                Some(pos) => {
                    docs.remove(pos);
                    1
                }
                None => 0,
            },
            None => 0,
        };
        Ok(DeleteOutcome { deleted_count })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
