use serde::{Deserialize, Serialize};

/// 制作公司 / 出品方 / 授权方
///
/// 后端在按实体查询列表时会回传该实体，未识别的字段保留在 `extra` 中
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    #[serde(alias = "ID")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// 列表查询回传的父实体，按作用域区分类型
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeEntity {
    Studio(Company),
    Producer(Company),
    Licensor(Company),
}

impl ScopeEntity {
    pub fn company(&self) -> &Company {
        match self {
            ScopeEntity::Studio(c) | ScopeEntity::Producer(c) | ScopeEntity::Licensor(c) => c,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScopeEntity::Studio(_) => "studio",
            ScopeEntity::Producer(_) => "producer",
            ScopeEntity::Licensor(_) => "licensor",
        }
    }
}
