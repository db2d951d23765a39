use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::cart::value_objects::ProductId;

/// Order as listed in the customer's history, also returned on checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub price: BigDecimal,
}

/// Shipping address attached to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub commune: String,
    pub region: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub total: BigDecimal,
    pub address: Option<Address>,
    pub items: Vec<OrderItem>,
}
