//! Review handler: the whole `reviews` collection, unfiltered.

use crate::error::AppError;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let reviews = CatalogService::list_reviews(state.store.as_ref()).await?;
    Ok(Json(reviews))
}
