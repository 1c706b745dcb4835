//! Toy and review routes.

use crate::handlers::{
    create_toy, delete_toy, list_reviews, list_toys, list_toys_by_seller, list_toys_by_subcategory,
    read_toy, update_toy,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/toys", get(list_toys).post(create_toy))
        .route("/toys/:id", get(read_toy).put(update_toy).delete(delete_toy))
        .route("/toys-each", get(list_toys_by_seller))
        .route("/toys-category", get(list_toys_by_subcategory))
        .route("/reviews", get(list_reviews))
        .with_state(state)
}
