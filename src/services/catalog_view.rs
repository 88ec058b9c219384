// 目录网格视图状态
//
// 视图层持有的查询结果、加载状态与分页信息。
// 过期响应的丢弃在这里完成：每次发起查询前调用 `begin` 取得令牌，
// 完成后用该令牌调用 `complete`，令牌已非当前时结果被丢弃。

use super::error::{CatalogError, CatalogResult};
use super::generation::{GenerationCounter, GenerationToken};
use crate::models::{Anime, PageRequest, Pagination, QueryResult, ScopeEntity};

/// `complete` 的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 结果已应用
    Applied,
    /// 查询失败，已记录错误，原有结果保持不变
    Failed,
    /// 令牌已过期，结果被丢弃
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    items: Vec<Anime>,
    pagination: Option<Pagination>,
    scope_entity: Option<ScopeEntity>,
    loading: bool,
    error: Option<CatalogError>,
    page: PageRequest,
    generations: GenerationCounter,
}

impl CatalogView {
    pub fn new(page: PageRequest) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Anime] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn scope_entity(&self) -> Option<&ScopeEntity> {
        self.scope_entity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// 总页数，尚未加载时为 0
    pub fn total_pages(&self) -> u64 {
        self.pagination.map(|p| p.total_pages).unwrap_or(0)
    }

    pub fn set_page(&mut self, page_number: u32) {
        self.page = PageRequest::new(page_number, self.page.page_size());
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page = PageRequest::new(1, page_size);
    }

    /// 发起新查询前调用，之前所有未完成的查询随之过期
    pub fn begin(&mut self) -> GenerationToken {
        self.loading = true;
        self.generations.mint()
    }

    pub fn is_current(&self, token: GenerationToken) -> bool {
        self.generations.is_current(token)
    }

    /// 查询完成时调用
    pub fn complete(&mut self, token: GenerationToken, result: CatalogResult<QueryResult>) -> Completion {
        if !self.generations.is_current(token) {
            tracing::debug!("Discarding stale catalog response (generation {})", token.value());
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(result) => {
                self.items = result.items;
                self.pagination = Some(result.pagination);
                self.scope_entity = result.scope_entity;
                self.error = None;
                Completion::Applied
            }
            Err(err) => {
                self.error = Some(err);
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(ids: &[i64]) -> QueryResult {
        QueryResult {
            items: ids
                .iter()
                .map(|&id| Anime {
                    id,
                    sources: String::new(),
                    title: format!("Anime {}", id),
                    kind: 1,
                    episodes: 12,
                    status: 1,
                    picture: String::new(),
                    thumbnail: String::new(),
                    duration_value: None,
                })
                .collect(),
            pagination: Pagination::for_totals(1, 20, ids.len() as u64),
            scope_entity: None,
        }
    }

    #[test]
    fn test_applies_current_result() {
        let mut view = CatalogView::new(PageRequest::default());
        let token = view.begin();
        assert!(view.is_loading());

        assert_eq!(view.complete(token, Ok(result(&[1, 2]))), Completion::Applied);
        assert!(!view.is_loading());
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.total_pages(), 1);
    }

    #[test]
    fn test_discards_stale_result() {
        let mut view = CatalogView::new(PageRequest::default());
        let t1 = view.begin();
        let t2 = view.begin();

        assert_eq!(view.complete(t2, Ok(result(&[2]))), Completion::Applied);
        assert_eq!(view.complete(t1, Ok(result(&[1, 1, 1]))), Completion::Stale);
        assert_eq!(view.items()[0].id, 2);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut view = CatalogView::new(PageRequest::default());
        let token = view.begin();
        view.complete(token, Ok(result(&[1, 2, 3])));

        let token = view.begin();
        let completion = view.complete(token, Err(CatalogError::Network("offline".to_string())));
        assert_eq!(completion, Completion::Failed);
        assert_eq!(view.items().len(), 3);
        assert!(matches!(view.error(), Some(CatalogError::Network(_))));
        assert!(!view.is_loading());
    }

    #[test]
    fn test_page_changes() {
        let mut view = CatalogView::new(PageRequest::new(1, 40));
        view.set_page(0);
        assert_eq!(view.page().page_number(), 1);
        view.set_page(3);
        assert_eq!(view.page(), PageRequest::new(3, 40));
        view.set_page_size(10);
        assert_eq!(view.page(), PageRequest::new(1, 10));
    }
}
