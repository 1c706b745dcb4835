//! CatalogService: one store call per catalog operation.

mod catalog;
pub use catalog::CatalogService;
