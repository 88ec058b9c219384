// 客户端配置
//
// 后端地址与请求超时在构造时固定，之后不可更改

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// 默认后端地址
pub const DEFAULT_API_URL: &str = "http://localhost:6969";

/// 默认请求超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// 目录客户端配置
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// 后端基础地址
    pub api_url: Url,
    /// 单次请求超时
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .with_context(|| format!("Invalid catalog API url: {}", api_url))?;

        Ok(Self { api_url, timeout })
    }

    /// 从环境变量读取配置
    ///
    /// - `CATALOG_API_URL`: 后端地址，缺省为 `http://localhost:6969`
    /// - `CATALOG_TIMEOUT_MS`: 超时毫秒数，缺省为 10000
    ///
    /// 会先尝试加载 `.env` 文件
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_url = std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_ms = match std::env::var("CATALOG_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CATALOG_TIMEOUT_MS is not a number: {}", raw))?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        let config = Self::new(&api_url, Duration::from_millis(timeout_ms))?;
        tracing::debug!("Catalog config loaded: {} (timeout {:?})", config.api_url, config.timeout);
        Ok(config)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_url.as_str(), "http://localhost:6969/");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = CatalogConfig::new("not a url", Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_config() {
        let config = CatalogConfig::new("https://api.example.com/v1/", Duration::from_millis(250)).unwrap();
        assert_eq!(config.api_url.path(), "/v1/");
        assert_eq!(config.timeout.as_millis(), 250);
    }

    // 唯一读写这两个环境变量的测试
    #[test]
    fn test_from_env() {
        std::env::set_var("CATALOG_API_URL", "http://catalog.internal:8080");
        std::env::set_var("CATALOG_TIMEOUT_MS", "1500");
        let config = CatalogConfig::from_env().unwrap();
        assert_eq!(config.api_url.host_str(), Some("catalog.internal"));
        assert_eq!(config.timeout, Duration::from_millis(1500));

        std::env::set_var("CATALOG_TIMEOUT_MS", "soon");
        assert!(CatalogConfig::from_env().is_err());

        std::env::remove_var("CATALOG_API_URL");
        std::env::remove_var("CATALOG_TIMEOUT_MS");
        assert_eq!(CatalogConfig::from_env().unwrap(), CatalogConfig::default());
    }
}
