use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for the storefront UI
///
/// Environment variables:
/// - STOREFRONT_CORS_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:3000")
///
/// Credentials are allowed so the UI can keep its own session cookies.
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("STOREFRONT_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    let origins: Vec<&str> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true)
}
