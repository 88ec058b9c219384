use super::{Anime, Pagination, ScopeEntity};

/// 列表查询的统一结果
///
/// `items` 保持服务端返回的顺序；`scope_entity` 仅在按制作公司 / 出品方 / 授权方查询时存在
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub items: Vec<Anime>,
    pub pagination: Pagination,
    pub scope_entity: Option<ScopeEntity>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
