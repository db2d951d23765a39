use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::order::model::{Address, Order, OrderItem, OrderSummary};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    /// Order identifier
    pub id: i64,
    /// Creation timestamp, when the backend reports one
    pub created_at: Option<DateTime<Utc>>,
    /// Order total
    pub total: f64,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(order: OrderSummary) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            total: order.total.to_f64().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddressResponse {
    pub street: String,
    pub number: String,
    pub commune: String,
    pub region: String,
    pub postal_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            number: address.number,
            commune: address.commune,
            region: address.region,
            postal_code: address.postal_code,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub quantity: u32,
    pub price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id.value(),
            name: item.name,
            image_url: item.image_url,
            quantity: item.quantity,
            price: item.price.to_f64().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Order identifier
    pub id: i64,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Order total
    pub total: f64,
    /// Shipping address
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<AddressResponse>,
    /// Ordered lines
    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            total: order.total.to_f64().unwrap_or_default(),
            address: order.address.map(Into::into),
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}
