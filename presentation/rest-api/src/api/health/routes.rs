use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Backend this session talks to
    pub backend: String,
}

/// Liveness of the storefront session process.
pub struct Api {
    backend: String,
}

impl Api {
    pub fn new(backend: &url::Url) -> Self {
        Self {
            backend: backend.to_string(),
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports that the session process is up. Does not call the backend.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: self.backend.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::Value;
    use url::Url;

    #[tokio::test]
    async fn should_report_healthy_with_backend_url() {
        let backend = Url::parse("http://shop.internal:8080/api/").unwrap();
        let service = OpenApiService::new(Api::new(&backend), "Health", "test");
        let cli = TestClient::new(Route::new().nest("/", service));

        let resp = cli.get("/health").send().await;
        resp.assert_status_is_ok();

        let json: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["backend"], "http://shop.internal:8080/api/");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["timestamp"].as_str().is_some());
    }
}
