use serde::{Deserialize, Serialize};

/// 默认页码
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 每页条数上限，限制单次响应体积
pub const MAX_PAGE_SIZE: u32 = 100;

/// 分页请求参数
///
/// 在构造时规范化：页码小于 1 时取 1，每页条数限制在 `1..=MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// 指定页码，使用默认每页条数
    pub fn page(page_number: u32) -> Self {
        Self::new(page_number, DEFAULT_PAGE_SIZE)
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn next(&self) -> Self {
        Self::new(self.page_number.saturating_add(1), self.page_size)
    }

    /// 请求参数对
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// 分页元数据，以服务端返回为准
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// 根据总条数计算总页数
    ///
    /// 供服务端或测试夹具使用，客户端不会重算服务端返回的分页信息
    pub fn for_totals(page_number: u32, page_size: u32, total_items: u64) -> Self {
        let size = u64::from(page_size.max(1));
        Self {
            page_number,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(size),
        }
    }

    /// `total_pages == ceil(total_items / page_size)`
    pub fn is_consistent(&self) -> bool {
        self.page_size >= 1 && self.total_pages == self.total_items.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }
}

/// 通用分页响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    pub pagination: Pagination,
}
