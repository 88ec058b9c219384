use super::{Company, ScopeEntity};

/// 查询作用域，决定请求路径以及是否回传父实体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceScope {
    Search,
    Seasonal,
    Tag(i64),
    Studio(i64),
    Producer(i64),
    Licensor(i64),
    ById(i64),
    Random,
}

impl ResourceScope {
    /// 请求路径（相对于后端基础地址）
    pub fn path(&self) -> String {
        match self {
            ResourceScope::Search => "/anime/search".to_string(),
            ResourceScope::Seasonal => "/anime/seasonal".to_string(),
            ResourceScope::Tag(id) => format!("/anime/tag/{}", id),
            ResourceScope::Studio(id) => format!("/studios/{}/anime", id),
            ResourceScope::Producer(id) => format!("/producers/{}/anime", id),
            ResourceScope::Licensor(id) => format!("/licensors/{}/anime", id),
            ResourceScope::ById(id) => format!("/anime/{}", id),
            ResourceScope::Random => "/anime/random".to_string(),
        }
    }

    /// 回传父实体所在的响应字段名
    ///
    /// 标签列表不回传标签本身
    pub fn parent_field(&self) -> Option<&'static str> {
        match self {
            ResourceScope::Studio(_) => Some("studio"),
            ResourceScope::Producer(_) => Some("producer"),
            ResourceScope::Licensor(_) => Some("licensor"),
            _ => None,
        }
    }

    /// 是否为分页列表类作用域
    pub fn is_list(&self) -> bool {
        !matches!(self, ResourceScope::ById(_) | ResourceScope::Random)
    }

    /// 将回传的父实体包装为对应类型
    pub fn wrap_parent(&self, company: Company) -> Option<ScopeEntity> {
        match self {
            ResourceScope::Studio(_) => Some(ScopeEntity::Studio(company)),
            ResourceScope::Producer(_) => Some(ScopeEntity::Producer(company)),
            ResourceScope::Licensor(_) => Some(ScopeEntity::Licensor(company)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        assert_eq!(ResourceScope::Search.path(), "/anime/search");
        assert_eq!(ResourceScope::Tag(7).path(), "/anime/tag/7");
        assert_eq!(ResourceScope::Studio(3).path(), "/studios/3/anime");
        assert_eq!(ResourceScope::ById(999).path(), "/anime/999");
        assert_eq!(ResourceScope::Random.path(), "/anime/random");
    }

    #[test]
    fn test_parent_field_only_for_entity_scopes() {
        assert_eq!(ResourceScope::Producer(1).parent_field(), Some("producer"));
        assert_eq!(ResourceScope::Licensor(1).parent_field(), Some("licensor"));
        assert!(ResourceScope::Tag(7).parent_field().is_none());
        assert!(ResourceScope::Seasonal.parent_field().is_none());
        assert!(ResourceScope::Search.wrap_parent(Company::new(1, "x")).is_none());
    }

    #[test]
    fn test_list_scopes() {
        assert!(ResourceScope::Seasonal.is_list());
        assert!(!ResourceScope::Random.is_list());
        assert!(!ResourceScope::ById(1).is_list());
    }
}
