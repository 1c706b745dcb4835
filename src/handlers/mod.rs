//! HTTP handlers for the toy catalog and reviews.

pub mod reviews;
pub mod toys;
pub use reviews::*;
pub use toys::*;
