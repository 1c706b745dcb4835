//! Filter and sort specifications built from query-string parameters.

use mongodb::bson::{Bson, Document};
use serde::Deserialize;

pub const PRICE_FIELD: &str = "price";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Maps the `sort` parameter to an order. `"desc"` sorts ascending and every other value sorts
    /// descending; clients depend on this mapping as published.
    pub fn from_sort_param(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

/// Exact-match filter (all pairs must match) plus optional sort. Empty means "everything".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindQuery {
    pub filter: Vec<(String, Bson)>,
    pub sort: Option<SortSpec>,
}

impl FindQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.filter.push((field.to_string(), value.into()));
        self
    }

    pub fn sorted_by(mut self, field: &str, order: SortOrder) -> Self {
        self.sort = Some(SortSpec {
            field: field.to_string(),
            order,
        });
        self
    }

    pub fn filter_document(&self) -> Document {
        self.filter
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn sort_document(&self) -> Option<Document> {
        self.sort.as_ref().map(|s| {
            let mut d = Document::new();
            d.insert(s.field.clone(), s.order.direction());
            d
        })
    }
}

/// Query parameters of `GET /toys-each`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerParams {
    pub seller_email: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters of `GET /toys-category`.
#[derive(Debug, Default, Deserialize)]
pub struct SubcategoryParams {
    pub subcategory: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl SellerParams {
    pub fn to_query(&self) -> FindQuery {
        let mut query = FindQuery::all();
        if let Some(email) = non_empty(self.seller_email.as_deref()) {
            query = query.with_eq("sellerEmail", email);
        }
        if let Some(sort) = non_empty(self.sort.as_deref()) {
            query = query.sorted_by(PRICE_FIELD, SortOrder::from_sort_param(sort));
        }
        query
    }
}

impl SubcategoryParams {
    pub fn to_query(&self) -> FindQuery {
        match non_empty(self.subcategory.as_deref()) {
            Some(subcategory) => FindQuery::all().with_eq("subcategory", subcategory),
            None => FindQuery::all(),
        }
    }
}
