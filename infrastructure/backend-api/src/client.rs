use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::cart::value_objects::BasketId;
use business::domain::errors::GatewayError;

use crate::cookie::{BASKET_COOKIE_NAME, BasketCookie};
use crate::dto::Envelope;

/// Connection settings for the storefront backend.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    pub base_url: Url,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

impl BackendClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            bearer_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Error body some backend failures carry next to the status code.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    title: Option<String>,
}

/// Shared HTTP client for the storefront backend.
///
/// Owns the cookie jar, so every gateway built on the same client sends the
/// same `basketId` cookie.
pub struct BackendClient {
    client: Client,
    base_url: Url,
    bearer_token: Option<String>,
    jar: Arc<Jar>,
}

impl BackendClient {
    pub fn new(config: BackendClientConfig) -> Result<Self, reqwest::Error> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(config.base_url),
            bearer_token: config.bearer_token,
            jar,
        })
    }

    /// Resolves a backend path such as `basket` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::transport(format!("invalid endpoint {}: {}", path, e)))
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, GatewayError> {
        let builder = self.client.request(method, self.endpoint(path)?);
        Ok(match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Sends the request and unwraps the `{ data: ... }` envelope.
    ///
    /// Non-2xx responses become `GatewayError::Status`; an empty body or a
    /// missing `data` field yields `Ok(None)`.
    pub async fn send_enveloped<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, GatewayError> {
        let body = self.send_checked(request).await?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| GatewayError::decode(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Sends the request and only checks the status; the body is discarded.
    pub async fn send_without_payload(&self, request: RequestBuilder) -> Result<(), GatewayError> {
        self.send_checked(request).await.map(|_| ())
    }

    async fn send_checked(&self, request: RequestBuilder) -> Result<String, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.title))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
            return Err(GatewayError::status(status.as_u16(), message));
        }

        Ok(body)
    }

    /// Stores the basket cookie so later requests are attributed to it.
    pub fn remember_basket(&self, cookie: &BasketCookie) {
        self.jar
            .add_cookie_str(&cookie.to_header_value(), &self.base_url);
    }

    /// Basket id currently held in the cookie jar, if not expired.
    pub fn remembered_basket(&self) -> Option<BasketId> {
        let header = self.jar.cookies(&self.base_url)?;
        let header = header.to_str().ok()?;
        header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == BASKET_COOKIE_NAME && !value.is_empty()).then(|| BasketId::new(value))
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
