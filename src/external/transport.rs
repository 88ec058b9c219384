// 网络传输层接口
//
// 目录服务只依赖这里的 `Transport` trait，测试中可以替换为 `MockTransport`

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 请求选项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// 查询参数
    pub params: Vec<(String, String)>,
    /// 额外请求头
    pub headers: Vec<(String, String)>,
    /// JSON 请求体（仅 POST / PUT）
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn with_params(params: Vec<(String, String)>) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }
}

/// 一次完整的请求描述
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// 相对于基础地址的路径
    pub path: String,
    pub options: RequestOptions,
}

/// 统一的响应包装
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub data: serde_json::Value,
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
}

impl TransportResponse {
    /// 将响应体解码为指定类型
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_value(self.data.clone()).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// 传输层错误
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// 服务端返回非 2xx 状态
    #[error("HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: serde_json::Value,
    },

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// 网络传输能力
///
/// 基础地址、超时和凭据策略都在实现构造时固定
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;

    async fn get(&self, path: &str, options: RequestOptions) -> Result<TransportResponse, TransportError> {
        self.send(TransportRequest {
            method: Method::Get,
            path: path.to_string(),
            options,
        })
        .await
    }

    async fn post(&self, path: &str, options: RequestOptions) -> Result<TransportResponse, TransportError> {
        self.send(TransportRequest {
            method: Method::Post,
            path: path.to_string(),
            options,
        })
        .await
    }

    async fn put(&self, path: &str, options: RequestOptions) -> Result<TransportResponse, TransportError> {
        self.send(TransportRequest {
            method: Method::Put,
            path: path.to_string(),
            options,
        })
        .await
    }

    async fn delete(&self, path: &str, options: RequestOptions) -> Result<TransportResponse, TransportError> {
        self.send(TransportRequest {
            method: Method::Delete,
            path: path.to_string(),
            options,
        })
        .await
    }
}
