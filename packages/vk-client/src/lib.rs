//! Minimal VK API client.
//!
//! Just enough of the VK API to back [`vk_resolver::ResourceResolver`]:
//! `utils.resolveScreenName`, plus a generic [`VkClient::call`] for other
//! methods.
//!
//! # Example
//!
//! ```rust,ignore
//! use vk_client::VkClient;
//! use vk_resolver::ResourceResolver;
//!
//! let client = VkClient::from_env()?;
//! let resolver = ResourceResolver::new(client);
//!
//! let resource = resolver.resolve("https://vk.com/durov").await?;
//! ```

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::AccessToken;
pub use error::{Result, VkError};
pub use types::{ApiEnvelope, ApiErrorBody, ResolveScreenNameParams};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use vk_resolver::{BoxError, ScreenNameLookup, ScreenNameResponse};

const DEFAULT_BASE_URL: &str = "https://api.vk.com/method";
const DEFAULT_API_VERSION: &str = "5.199";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// VK API client.
#[derive(Debug, Clone)]
pub struct VkClient {
    http_client: Client,
    access_token: AccessToken,
    api_version: String,
    base_url: String,
}

impl VkClient {
    /// Create a new client with the given access token.
    pub fn new(access_token: impl Into<AccessToken>) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(VkError::Config("access token is empty".into()));
        }

        Ok(Self {
            http_client: build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
            access_token,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from environment variables.
    ///
    /// `VK_ACCESS_TOKEN` is required; `VK_API_VERSION` and `VK_API_URL`
    /// override the defaults when set.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("VK_ACCESS_TOKEN")
            .map_err(|_| VkError::Config("VK_ACCESS_TOKEN not set".into()))?;

        let mut client = Self::new(token)?;
        if let Ok(version) = std::env::var("VK_API_VERSION") {
            client = client.with_api_version(version);
        }
        if let Ok(url) = std::env::var("VK_API_URL") {
            client = client.with_base_url(url);
        }
        Ok(client)
    }

    /// Set the API version sent as `v`.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = build_http_client(timeout)?;
        Ok(self)
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Call an API method and unwrap its `response` payload.
    pub async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<R> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.method_url(method))
            .query(&[
                ("access_token", self.access_token.expose()),
                ("v", self.api_version.as_str()),
            ])
            .form(params)
            .send()
            .await
            .map_err(|e| {
                warn!(method, error = %e, "VK request failed");
                VkError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(method, status = %status, error = %body, "VK HTTP error");
            return Err(VkError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiEnvelope<R> = response
            .json()
            .await
            .map_err(|e| VkError::Parse(format!("Failed to parse {} response: {}", method, e)))?;

        debug!(
            method,
            duration_ms = start.elapsed().as_millis() as u64,
            "VK request completed"
        );

        envelope.into_result()
    }

    /// `utils.resolveScreenName`.
    pub async fn resolve_screen_name(&self, screen_name: &str) -> Result<ScreenNameResponse> {
        self.call(
            "utils.resolveScreenName",
            &ResolveScreenNameParams { screen_name },
        )
        .await
    }
}

fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| VkError::Config(format!("Failed to build HTTP client: {}", e)))
}

#[async_trait]
impl ScreenNameLookup for VkClient {
    async fn resolve_screen_name(
        &self,
        screen_name: &str,
    ) -> std::result::Result<ScreenNameResponse, BoxError> {
        VkClient::resolve_screen_name(self, screen_name)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_token() {
        assert!(matches!(VkClient::new(""), Err(VkError::Config(_))));
    }

    #[test]
    fn test_builder_overrides() {
        let client = VkClient::new("token")
            .unwrap()
            .with_api_version("5.131")
            .with_base_url("http://localhost:8080/method/");

        assert_eq!(client.api_version(), "5.131");
        assert_eq!(client.base_url(), "http://localhost:8080/method");
        assert_eq!(
            client.method_url("utils.resolveScreenName"),
            "http://localhost:8080/method/utils.resolveScreenName"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let client = VkClient::new("vk1.a.super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_lookup_error() {
        let client = VkClient::new("token")
            .unwrap()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2))
            .unwrap();

        let resolver = vk_resolver::ResourceResolver::new(client);
        let err = resolver.resolve("durov").await.unwrap_err();
        assert!(matches!(err, vk_resolver::ResourceError::Lookup(_)));

        // local grammars never touch the network
        assert!(resolver.resolve("club1").await.is_ok());
    }
}
