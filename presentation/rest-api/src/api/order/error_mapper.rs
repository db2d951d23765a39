use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, backend_status};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            OrderError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "order.not_found"),
            ),
            OrderError::InvalidAddress => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", "order.invalid_address"),
            ),
            OrderError::Gateway(err) => {
                let (status, name) = backend_status(err.status_code());
                (status, ErrorResponse::new(name, self.to_string()))
            }
        }
    }
}
