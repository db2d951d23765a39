use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Status for a failure reported by the backend. Its 4xx rejections are
/// passed on as 422, except 401/403 which mean the configured backend token
/// was refused.
pub fn backend_status(status: Option<u16>) -> (StatusCode, &'static str) {
    match status {
        Some(401 | 403) => (StatusCode::BAD_GATEWAY, "BackendAuthRejected"),
        Some(code) if (400..500).contains(&code) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "BackendRejected")
        }
        _ => (StatusCode::BAD_GATEWAY, "BackendUnavailable"),
    }
}
