//! Conversion between JSON payloads and BSON documents.
//!
//! Responses never leak driver-specific shapes: ObjectIds become hex strings and datetimes become
//! RFC 3339 strings. Anything without a natural JSON form falls back to relaxed extended JSON.

use crate::error::AppError;
use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};

/// Render a stored document as a JSON object.
pub fn document_to_json(doc: Document) -> Value {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc {
        map.insert(key, bson_to_json(value));
    }
    Value::Object(map)
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::Number(n.into()),
        Bson::Int64(n) => Value::Number(n.into()),
        Bson::Double(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Document(d) => document_to_json(d),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        other => other.into_relaxed_extjson(),
    }
}

/// Encode a JSON object body as a document. Non-object bodies are rejected.
pub fn json_to_document(value: Value) -> Result<Document, AppError> {
    match value {
        Value::Object(map) => bson::to_document(&map).map_err(|e| AppError::BadRequest(e.to_string())),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
