pub mod anime;
pub mod company;
pub mod filter;
pub mod pagination;
pub mod query_result;
pub mod recommendation;
pub mod scope;

pub use anime::{Anime, AnimeStatus, AnimeType};
pub use company::{Company, ScopeEntity};
pub use filter::CatalogFilter;
pub use pagination::{PageRequest, Paged, Pagination, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use query_result::QueryResult;
pub use recommendation::Recommendation;
pub use scope::ResourceScope;
