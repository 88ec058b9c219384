pub mod catalog_service;
pub mod catalog_view;
pub mod error;
pub mod generation;
pub mod recommendation_service;

pub use catalog_service::CatalogService;
pub use catalog_view::{CatalogView, Completion};
pub use error::{CatalogError, CatalogResult};
pub use generation::{GenerationCounter, GenerationToken};
pub use recommendation_service::RecommendationService;
