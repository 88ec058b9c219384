// 可编排的传输层实现，用于测试
//
// 按 (方法, 路径, 参数) 匹配预设路由，返回固定响应，并记录每一次请求

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};

/// 预设响应
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(serde_json::Value),
    Status(u16, serde_json::Value),
    Timeout,
    Connect(String),
}

/// 预设路由
#[derive(Debug, Clone)]
pub struct MockRoute {
    method: Method,
    path: String,
    params: Vec<(String, String)>,
    delay: Option<Duration>,
    reply: MockReply,
}

impl MockRoute {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            delay: None,
            reply: MockReply::Json(serde_json::Value::Null),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// 仅当请求带有该参数时匹配
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// 响应前等待，模拟网络延迟
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.reply = MockReply::Json(body);
        self
    }

    pub fn status(mut self, status: u16, body: serde_json::Value) -> Self {
        self.reply = MockReply::Status(status, body);
        self
    }

    pub fn reply(mut self, reply: MockReply) -> Self {
        self.reply = reply;
        self
    }

    fn matches(&self, request: &TransportRequest) -> bool {
        self.method == request.method
            && self.path == request.path
            && self
                .params
                .iter()
                .all(|required| request.options.params.iter().any(|p| p == required))
    }
}

/// 测试用传输层
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Vec<MockRoute>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, route: MockRoute) -> Self {
        self.routes.push(route);
        self
    }

    /// 已收到的请求（按到达顺序）
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// 参数要求最多的匹配路由优先
    fn find_route(&self, request: &TransportRequest) -> Option<&MockRoute> {
        self.routes
            .iter()
            .filter(|route| route.matches(request))
            .max_by_key(|route| route.params.len())
    }
}

fn status_text(status: u16) -> String {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
    .to_string()
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let route = match self.find_route(&request) {
            Some(route) => route.clone(),
            None => {
                tracing::warn!("No mock route for {} {}", request.method, request.path);
                return Err(TransportError::Status {
                    status: 404,
                    status_text: status_text(404),
                    body: serde_json::json!({ "error": "no route" }),
                });
            }
        };

        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        match route.reply {
            MockReply::Json(data) => Ok(TransportResponse {
                data,
                status: 200,
                status_text: status_text(200),
                headers: HashMap::from([("content-type".to_string(), "application/json".to_string())]),
            }),
            MockReply::Status(status, body) => Err(TransportError::Status {
                status,
                status_text: status_text(status),
                body,
            }),
            MockReply::Timeout => Err(TransportError::Timeout),
            MockReply::Connect(msg) => Err(TransportError::Connect(msg)),
        }
    }
}
