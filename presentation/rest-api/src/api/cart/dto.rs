use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::cart::model::{CartItem, CartState};
use business::domain::order::model::{Address, OrderSummary};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Product identifier
    pub product_id: i64,
    /// Product name
    pub name: String,
    /// Unit price as reported by the backend
    pub price: f64,
    /// Units in the cart
    pub quantity: u32,
    /// Product images
    pub image_urls: Vec<String>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.value(),
            name: item.name,
            price: item.price.to_f64().unwrap_or_default(),
            quantity: item.quantity,
            image_urls: item.image_urls,
        }
    }
}

/// Snapshot of the cart session
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    /// Basket identifier, null until the first item is added
    pub basket_id: Option<String>,
    /// Lines in backend order
    pub items: Vec<CartItemResponse>,
    /// Total as last reported by the backend
    pub total_price: f64,
    /// Whether an action is in flight
    pub loading: bool,
    /// Message of the last failed action
    pub error: Option<String>,
}

impl From<CartState> for CartResponse {
    fn from(state: CartState) -> Self {
        Self {
            basket_id: state.basket.basket_id.map(|id| id.to_string()),
            items: state.basket.items.into_iter().map(Into::into).collect(),
            total_price: state.basket.total_price.to_f64().unwrap_or_default(),
            loading: state.loading,
            error: state.error,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreatedOrderResponse {
    /// Order identifier
    pub id: i64,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Order total
    pub total: f64,
}

impl From<OrderSummary> for CreatedOrderResponse {
    fn from(order: OrderSummary) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            total: order.total.to_f64().unwrap_or_default(),
        }
    }
}

/// Shipping address sent before the order is placed
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShippingAddressRequest {
    pub street: String,
    pub number: String,
    pub commune: String,
    pub region: String,
    /// Seven digits
    pub postal_code: String,
}

impl From<ShippingAddressRequest> for Address {
    fn from(request: ShippingAddressRequest) -> Self {
        Self {
            street: request.street,
            number: request.number,
            commune: request.commune,
            region: request.region,
            postal_code: request.postal_code,
        }
    }
}
