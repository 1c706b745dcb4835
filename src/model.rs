//! Collections and typed payloads for toys and reviews.

use crate::error::AppError;
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

pub const TOYS: &str = "toys";
pub const REVIEWS: &str = "reviews";

/// Parse a path segment into a document identifier.
pub fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

/// The seven fields replaced by an update. Any other stored field is left alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyUpdate {
    pub name: String,
    pub available_quantity: i64,
    pub seller_name: String,
    pub seller_email: String,
    #[serde(rename = "pictureURL")]
    pub picture_url: String,
    pub subcategory: String,
    pub price: f64,
}

impl ToyUpdate {
    pub fn into_document(self) -> Document {
        doc! {
            "name": self.name,
            "availableQuantity": self.available_quantity,
            "sellerName": self.seller_name,
            "sellerEmail": self.seller_email,
            "pictureURL": self.picture_url,
            "subcategory": self.subcategory,
            "price": self.price,
        }
    }
}

/// Validate a create body: must be a JSON object and must not carry its own `_id`.
pub fn new_toy_document(body: serde_json::Value) -> Result<Document, AppError> {
    let doc = crate::document::json_to_document(body)?;
    if doc.contains_key("_id") {
        return Err(AppError::BadRequest("_id is assigned by the server".into()));
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_payload_uses_wire_field_names() {
        let update: ToyUpdate = serde_json::from_value(json!({
            "name": "Race Car",
            "availableQuantity": 4,
            "sellerName": "Ann",
            "sellerEmail": "ann@toys.com",
            "pictureURL": "https://img.example/car.png",
            "subcategory": "cars",
            "price": 19.99,
        }))
        .unwrap();
        let doc = update.into_document();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["name", "availableQuantity", "sellerName", "sellerEmail", "pictureURL", "subcategory", "price"]
        );
        assert_eq!(doc.get_f64("price").unwrap(), 19.99);
        assert_eq!(doc.get_i64("availableQuantity").unwrap(), 4);
    }

    #[test]
    fn update_payload_missing_field_fails() {
        let parsed = serde_json::from_value::<ToyUpdate>(json!({ "name": "Race Car" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(parse_id("invalid-id-format"), Err(AppError::InvalidId(_))));
        let oid = ObjectId::new();
        assert_eq!(parse_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn create_body_with_id_is_rejected() {
        let err = new_toy_document(json!({ "_id": "abc", "name": "Kite" })).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(new_toy_document(json!({ "name": "Kite" })).is_ok());
    }
}
