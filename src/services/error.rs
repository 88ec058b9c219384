// 目录查询错误类型
//
// 每种错误都只针对单次请求，不重试、不降级

use thiserror::Error;

use crate::external::TransportError;

/// 目录查询的统一错误类型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// 资源不存在（HTTP 404）
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// 服务端拒绝了请求参数（除 404 外的 4xx）
    #[error("Validation error ({status}): {message}")]
    Validation { status: u16, message: String },

    /// 服务端错误（5xx）或响应无法解析
    #[error("Server error: {message}")]
    Server { status: Option<u16>, message: String },

    /// 超时或连接失败
    #[error("Network error: {0}")]
    Network(String),
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// 将传输层错误映射为目录错误
    pub fn from_transport(path: &str, err: TransportError) -> Self {
        match err {
            TransportError::Status { status: 404, .. } => CatalogError::NotFound { path: path.to_string() },
            TransportError::Status {
                status,
                status_text,
                body,
            } if (400..500).contains(&status) => CatalogError::Validation {
                status,
                message: error_message(&body).unwrap_or(status_text),
            },
            TransportError::Status {
                status,
                status_text,
                body,
            } => CatalogError::Server {
                status: Some(status),
                message: error_message(&body).unwrap_or(status_text),
            },
            TransportError::Timeout => CatalogError::Network(format!("request to {} timed out", path)),
            TransportError::Connect(msg) => CatalogError::Network(msg),
            TransportError::Decode(msg) => CatalogError::Server {
                status: None,
                message: format!("invalid response from {}: {}", path, msg),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::NotFound { .. } => Some(404),
            CatalogError::Validation { status, .. } => Some(*status),
            CatalogError::Server { status, .. } => *status,
            CatalogError::Network(_) => None,
        }
    }
}

/// 从错误响应体中提取说明文字
fn error_message(body: &serde_json::Value) -> Option<String> {
    match body {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Object(map) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()).map(str::to_string)),
        _ => None,
    }
}
