use std::env;
use std::time::Duration;

use anyhow::Context;
use url::Url;

use backend_api::client::BackendClientConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the storefront backend API.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Environment variables:
    /// - BACKEND_API_URL: Base URL of the backend, e.g. "https://shop.example.com/api/" (required)
    /// - BACKEND_API_TOKEN: Bearer token sent on every request (optional)
    /// - BACKEND_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("BACKEND_API_URL").context("BACKEND_API_URL environment variable must be set")?;
        Self::parse(
            &base_url,
            env::var("BACKEND_API_TOKEN").ok(),
            env::var("BACKEND_TIMEOUT_SECS").ok(),
        )
    }

    fn parse(
        base_url: &str,
        bearer_token: Option<String>,
        timeout_secs: Option<String>,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("BACKEND_API_URL is not a valid URL: {}", base_url))?;

        let timeout_secs = match timeout_secs {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("BACKEND_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            bearer_token: bearer_token.filter(|token| !token.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client_config(&self) -> BackendClientConfig {
        BackendClientConfig {
            base_url: self.base_url.clone(),
            bearer_token: self.bearer_token.clone(),
            timeout: self.timeout,
        }
    }
}
