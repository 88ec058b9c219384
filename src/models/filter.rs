use chrono::NaiveDate;

use super::{AnimeStatus, AnimeType};

/// 查询过滤条件
///
/// 所有字段均可缺省，缺省字段不会出现在请求参数中。
/// 日期与集数范围的合法性由服务端校验，这里只做原样转发。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// 关键字
    pub q: Option<String>,
    pub anime_type: Option<AnimeType>,
    pub status: Option<AnimeStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_episodes: Option<u32>,
    pub max_episodes: Option<u32>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 空白关键字视为未设置
    pub fn query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.q = if q.trim().is_empty() { None } else { Some(q) };
        self
    }

    pub fn anime_type(mut self, anime_type: AnimeType) -> Self {
        self.anime_type = Some(anime_type);
        self
    }

    pub fn status(mut self, status: AnimeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn aired_between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn episodes_between(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_episodes = min;
        self.max_episodes = max;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// 转换为请求参数，仅包含已设置的字段
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(ref q) = self.q {
            if !q.trim().is_empty() {
                pairs.push(("q".to_string(), q.clone()));
            }
        }

        if let Some(anime_type) = self.anime_type {
            pairs.push(("type".to_string(), anime_type.code().to_string()));
        }

        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.code().to_string()));
        }

        if let Some(start) = self.start_date {
            pairs.push(("start_date".to_string(), start.format("%Y-%m-%d").to_string()));
        }

        if let Some(end) = self.end_date {
            pairs.push(("end_date".to_string(), end.format("%Y-%m-%d").to_string()));
        }

        if let Some(min) = self.min_episodes {
            pairs.push(("min_episodes".to_string(), min.to_string()));
        }

        if let Some(max) = self.max_episodes {
            pairs.push(("max_episodes".to_string(), max.to_string()));
        }

        pairs
    }
}
