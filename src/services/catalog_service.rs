use std::sync::Arc;

use serde::Deserialize;

use super::error::{CatalogError, CatalogResult};
use crate::external::{RequestOptions, Transport, TransportResponse};
use crate::models::{Anime, CatalogFilter, Company, PageRequest, Pagination, QueryResult, ResourceScope};

/// 列表接口的响应结构
///
/// 按实体查询时，父实体以 `studio` / `producer` / `licensor` 字段回传
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(alias = "data")]
    items: Vec<Anime>,
    pagination: Pagination,
    studio: Option<Company>,
    producer: Option<Company>,
    licensor: Option<Company>,
}

impl ListEnvelope {
    fn take_parent(&mut self, field: &str) -> Option<Company> {
        match field {
            "studio" => self.studio.take(),
            "producer" => self.producer.take(),
            "licensor" => self.licensor.take(),
            _ => None,
        }
    }
}

/// 番剧目录查询服务
///
/// 把不同结构的后端接口（搜索、季度、标签、制作公司等）统一为
/// "过滤条件 + 分页" 的查询方式。每次调用只发出一次请求，
/// 不缓存、不合并相同的并发请求，也不重试。
#[derive(Clone)]
pub struct CatalogService {
    transport: Arc<dyn Transport>,
}

impl CatalogService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// 按 ID 获取番剧，不存在时返回 `NotFound`
    pub async fn by_id(&self, id: i64) -> CatalogResult<Anime> {
        self.fetch_one(ResourceScope::ById(id)).await
    }

    /// 随机获取一部番剧
    pub async fn random(&self) -> CatalogResult<Anime> {
        self.fetch_one(ResourceScope::Random).await
    }

    /// 关键字搜索
    pub async fn search(&self, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        self.list(ResourceScope::Search, filter, page).await
    }

    /// 本季番剧
    pub async fn seasonal(&self, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        self.list(ResourceScope::Seasonal, filter, page).await
    }

    /// 按标签查询，标签 ID 作为路径参数而不是过滤字段
    pub async fn by_tag(&self, tag_id: i64, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        self.list(ResourceScope::Tag(tag_id), filter, page).await
    }

    /// 按制作公司查询，结果附带制作公司信息
    pub async fn by_studio(&self, studio_id: i64, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        self.list(ResourceScope::Studio(studio_id), filter, page).await
    }

    /// 按出品方查询，结果附带出品方信息
    pub async fn by_producer(&self, producer_id: i64, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        self.list(ResourceScope::Producer(producer_id), filter, page).await
    }

    /// 按授权方查询，结果附带授权方信息
    pub async fn by_licensor(&self, licensor_id: i64, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        self.list(ResourceScope::Licensor(licensor_id), filter, page).await
    }

    async fn fetch_one(&self, scope: ResourceScope) -> CatalogResult<Anime> {
        let path = scope.path();
        let response = self
            .transport
            .get(&path, RequestOptions::default())
            .await
            .map_err(|e| CatalogError::from_transport(&path, e))?;

        response.json().map_err(|e| CatalogError::from_transport(&path, e))
    }

    async fn list(&self, scope: ResourceScope, filter: &CatalogFilter, page: PageRequest) -> CatalogResult<QueryResult> {
        let path = scope.path();

        // 过滤字段与分页参数合并为一份扁平参数
        let mut params = filter.to_query_pairs();
        params.extend(page.to_query_pairs());

        let response = self
            .transport
            .get(&path, RequestOptions::with_params(params))
            .await
            .map_err(|e| CatalogError::from_transport(&path, e))?;

        normalize(scope, &path, &response)
    }
}

/// 将列表响应规范化为 `QueryResult`
fn normalize(scope: ResourceScope, path: &str, response: &TransportResponse) -> CatalogResult<QueryResult> {
    let mut envelope: ListEnvelope = response.json().map_err(|e| CatalogError::from_transport(path, e))?;

    let scope_entity = match scope.parent_field() {
        Some(field) => {
            let company = envelope.take_parent(field).ok_or_else(|| CatalogError::Server {
                status: Some(response.status),
                message: format!("response from {} is missing `{}`", path, field),
            })?;
            scope.wrap_parent(company)
        }
        None => None,
    };

    Ok(QueryResult {
        items: envelope.items,
        pagination: envelope.pagination,
        scope_entity,
    })
}
