use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;

use vk_client::VkClient;
use vk_resolver::{OfflineLookup, ScreenNameLookup};

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub access_token: Option<String>,
    pub api_version: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            access_token: env::var("VK_ACCESS_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            api_version: env::var("VK_API_VERSION").ok(),
            api_url: env::var("VK_API_URL").ok(),
            timeout_secs: env::var("VK_TIMEOUT_SECS")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .context("VK_TIMEOUT_SECS must be a valid number")?,
        })
    }

    /// Build the screen-name lookup. Falls back to offline mode when there
    /// is no token or `offline` is requested.
    pub fn lookup(&self, offline: bool) -> Result<Arc<dyn ScreenNameLookup>> {
        let token = match (&self.access_token, offline) {
            (Some(token), false) => token,
            (None, false) => {
                tracing::warn!("VK_ACCESS_TOKEN not set, screen names will not be resolved");
                return Ok(Arc::new(OfflineLookup));
            }
            (_, true) => return Ok(Arc::new(OfflineLookup)),
        };

        let mut client = VkClient::new(token.as_str()).context("Failed to create VK client")?;
        if let Some(version) = &self.api_version {
            client = client.with_api_version(version);
        }
        if let Some(url) = &self.api_url {
            client = client.with_base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            client = client
                .with_timeout(std::time::Duration::from_secs(secs))
                .context("Failed to configure VK client timeout")?;
        }

        tracing::info!(api_version = client.api_version(), "Using VK API for screen names");
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_without_token() {
        let lookup = Config::default().lookup(false).unwrap();
        assert!(lookup.resolve_screen_name("durov").await.is_err());
    }

    #[test]
    fn test_token_builds_client() {
        let config = Config {
            access_token: Some("token".into()),
            api_version: Some("5.131".into()),
            timeout_secs: Some(5),
            ..Default::default()
        };
        assert!(config.lookup(false).is_ok());
        assert!(config.lookup(true).is_ok());
    }
}
