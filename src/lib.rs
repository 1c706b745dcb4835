//! Toy catalog: REST backend over a MongoDB document store.

pub mod config;
pub mod document;
pub mod error;
pub mod handlers;
pub mod model;
pub mod query;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError, StoreError};
pub use routes::{app, catalog_routes, common_routes};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{open_store, DocumentStore, MemoryStore, MongoStore};
