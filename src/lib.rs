// 番剧目录客户端库
//
// 本库提供目录浏览的核心功能，包括：
// - 统一的过滤 + 分页查询（搜索、季度、标签、制作公司等）
// - 查询代次令牌，用于丢弃过期响应
// - 渐进显示控制器
// - 基于 reqwest 的传输层与测试用传输层

pub mod config;
pub mod external;
pub mod models;
pub mod reveal;
pub mod services;
pub mod telemetry;

pub use config::CatalogConfig;
pub use external::{HttpTransport, Transport};
pub use models::{Anime, CatalogFilter, PageRequest, Pagination, QueryResult, ResourceScope, ScopeEntity};
pub use reveal::{RevealController, RevealState};
pub use services::{CatalogError, CatalogResult, CatalogService, CatalogView, RecommendationService};
