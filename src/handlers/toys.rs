//! Toy handlers: list, filtered lists, read, create, upsert, delete.

use crate::error::AppError;
use crate::model::{new_toy_document, parse_id, ToyUpdate};
use crate::query::{SellerParams, SubcategoryParams};
use crate::response::{DeleteResponse, InsertResponse, UpdateResponse};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list_toys(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let toys = CatalogService::list_toys(state.store.as_ref()).await?;
    Ok(Json(toys))
}

/// `GET /toys-each?sellerEmail=..&sort=..`
pub async fn list_toys_by_seller(
    State(state): State<AppState>,
    Query(params): Query<SellerParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let toys = CatalogService::find_toys(state.store.as_ref(), &params.to_query()).await?;
    Ok(Json(toys))
}

/// `GET /toys-category?subcategory=..`
pub async fn list_toys_by_subcategory(
    State(state): State<AppState>,
    Query(params): Query<SubcategoryParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let toys = CatalogService::find_toys(state.store.as_ref(), &params.to_query()).await?;
    Ok(Json(toys))
}

/// Absent toys render as JSON `null` with status 200.
pub async fn read_toy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Value>>, AppError> {
    let id = parse_id(&id)?;
    let toy = CatalogService::get_toy(state.store.as_ref(), id).await?;
    Ok(Json(toy))
}

pub async fn create_toy(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertResponse>), AppError> {
    let Json(body) = payload?;
    let toy = new_toy_document(body)?;
    let outcome = CatalogService::create_toy(state.store.as_ref(), toy).await?;
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

pub async fn update_toy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdateResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(body) = payload?;
    let update: ToyUpdate =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let outcome = CatalogService::update_toy(state.store.as_ref(), id, update).await?;
    Ok(Json(outcome.into()))
}

pub async fn delete_toy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;
    let outcome = CatalogService::delete_toy(state.store.as_ref(), id).await?;
    Ok(Json(outcome.into()))
}
