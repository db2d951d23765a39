use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::application::cart::store::CartStore;
use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartState;
use business::domain::cart::value_objects::{ProductId, Quantity};
use business::domain::order::use_cases::update_address::{
    UpdateShippingAddressParams, UpdateShippingAddressUseCase,
};

use crate::api::cart::dto::{CartResponse, CreatedOrderResponse, ShippingAddressRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    store: Arc<CartStore>,
    update_address_use_case: Arc<dyn UpdateShippingAddressUseCase>,
}

impl CartApi {
    pub fn new(
        store: Arc<CartStore>,
        update_address_use_case: Arc<dyn UpdateShippingAddressUseCase>,
    ) -> Self {
        Self {
            store,
            update_address_use_case,
        }
    }
}

/// Cart session API
///
/// Every mutation is forwarded to the backend; the returned snapshot is the
/// backend's answer, never a local recomputation.
#[OpenApi]
impl CartApi {
    /// Current cart snapshot
    ///
    /// Returns the locally held state without calling the backend.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn snapshot(&self) -> Json<CartResponse> {
        Json(self.store.snapshot().await.into())
    }

    /// Reload the cart from the backend
    #[oai(path = "/cart/refresh", method = "post", tag = "ApiTags::Cart")]
    async fn refresh(&self) -> CartActionResponse {
        self.store.fetch_cart().await.into()
    }

    /// Add units of a product
    ///
    /// The backend creates the basket on the first add.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        #[oai(name = "productId")] product_id: Query<i64>,
        quantity: Query<i64>,
    ) -> CartActionResponse {
        let quantity = match Quantity::try_from(quantity.0) {
            Ok(quantity) => quantity,
            Err(err) => return CartActionResponse::from_error(err),
        };

        self.store
            .add_to_cart(ProductId::new(product_id.0), quantity)
            .await
            .into()
    }

    /// Remove units of a product
    ///
    /// Decrements the line by `quantity`; the backend drops the line when it
    /// reaches zero.
    #[oai(path = "/cart/items", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(
        &self,
        #[oai(name = "productId")] product_id: Query<i64>,
        quantity: Query<i64>,
    ) -> CartActionResponse {
        let quantity = match Quantity::try_from(quantity.0) {
            Ok(quantity) => quantity,
            Err(err) => return CartActionResponse::from_error(err),
        };

        self.store
            .remove_from_cart(ProductId::new(product_id.0), quantity)
            .await
            .into()
    }

    /// Remove a whole line
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_line(&self, product_id: Path<i64>) -> CartActionResponse {
        self.store
            .remove_line(ProductId::new(product_id.0))
            .await
            .into()
    }

    /// Empty the cart
    ///
    /// Removes every line, one backend call per line.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> CartActionResponse {
        self.store.clear_cart().await.into()
    }

    /// Place an order for the current cart
    ///
    /// Saves the shipping address first; the order is only created once the
    /// backend accepted it. Refused while the cart snapshot is empty. On
    /// success the local cart is reset.
    #[oai(path = "/cart/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self, address: Json<ShippingAddressRequest>) -> CheckoutResponse {
        if self.store.snapshot().await.is_empty() {
            return CheckoutResponse::BadRequest(ErrorResponse::new(
                "ValidationError",
                "cart.empty",
            ));
        }

        let params = UpdateShippingAddressParams {
            address: address.0.into(),
        };
        if let Err(err) = self.update_address_use_case.execute(params).await {
            return CheckoutResponse::from_error(err.into_error_response());
        }

        match self.store.create_order().await {
            Ok(order) => CheckoutResponse::Created(Json(CreatedOrderResponse::from(order))),
            Err(err) => CheckoutResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartActionResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    Unprocessable(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

impl CartActionResponse {
    fn from_error(err: CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartActionResponse::BadRequest(json),
            404 => CartActionResponse::NotFound(json),
            422 => CartActionResponse::Unprocessable(json),
            _ => CartActionResponse::BadGateway(json),
        }
    }
}

impl From<Result<CartState, CartError>> for CartActionResponse {
    fn from(result: Result<CartState, CartError>) -> Self {
        match result {
            Ok(state) => CartActionResponse::Ok(Json(state.into())),
            Err(err) => CartActionResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<CreatedOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    Unprocessable(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

impl CheckoutResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => CheckoutResponse::BadRequest(json),
            422 => CheckoutResponse::Unprocessable(json),
            _ => CheckoutResponse::BadGateway(json),
        }
    }
}
