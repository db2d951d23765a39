use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, backend_status};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", "cart.invalid_quantity"),
            ),
            CartError::ItemNotInCart => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "cart.item_not_in_cart"),
            ),
            CartError::Gateway(err) => {
                let (status, name) = backend_status(err.status_code());
                (status, ErrorResponse::new(name, self.to_string()))
            }
        }
    }
}
