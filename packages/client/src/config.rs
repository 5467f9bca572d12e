//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where the game service lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL under which the `/games` resources are served
    pub base_url: Url,
    /// Upper bound for a single request, connection included
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration, validating the base URL.
    ///
    /// The URL must be absolute and able to carry path segments
    /// (`http://host:port/prefix`), since endpoint paths are appended to it.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            request_timeout,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_http_url() {
        // テスト項目: HTTP の URL が受け入れられる
        // given (前提条件):
        let url = "http://localhost:9000/api";

        // when (操作):
        let config = ClientConfig::new(url, Duration::from_secs(3)).unwrap();

        // then (期待する結果):
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_new_rejects_relative_url() {
        // テスト項目: 相対 URL はエラーになる
        // given (前提条件):
        let url = "/api";

        // when (操作):
        let result = ClientConfig::new(url, Duration::from_secs(3));

        // then (期待する結果):
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_new_rejects_non_hierarchical_url() {
        // テスト項目: パスを持てない URL はエラーになる
        // given (前提条件):
        let url = "mailto:bowling@example.com";

        // when (操作):
        let result = ClientConfig::new(url, Duration::from_secs(3));

        // then (期待する結果):
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_default_points_to_local_service() {
        // テスト項目: デフォルト設定がローカルのサービスを指す
        // given (前提条件) / when (操作):
        let config = ClientConfig::default();

        // then (期待する結果):
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }
}
