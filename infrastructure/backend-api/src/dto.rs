use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use business::domain::cart::model::{Basket, CartItem};
use business::domain::cart::value_objects::{BasketId, ProductId};
use business::domain::errors::GatewayError;
use business::domain::order::model::{Address, Order, OrderItem, OrderSummary};

/// `{ data: ... }` wrapper around every backend payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// Basket ids come back as strings or as plain numbers depending on the backend.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BasketIdDto {
    Text(String),
    Number(i64),
}

impl BasketIdDto {
    fn into_domain(self) -> Option<BasketId> {
        match self {
            BasketIdDto::Text(id) if id.trim().is_empty() => None,
            BasketIdDto::Text(id) => Some(BasketId::new(id)),
            BasketIdDto::Number(id) => Some(BasketId::new(id.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    pub price: Number,
    pub quantity: u32,
    #[serde(default, alias = "urls")]
    pub image_urls: Option<Vec<String>>,
}

impl CartItemDto {
    pub fn into_domain(self) -> Result<CartItem, GatewayError> {
        Ok(CartItem {
            product_id: ProductId::new(self.product_id),
            name: self.name,
            price: decimal(&self.price)?,
            quantity: self.quantity,
            image_urls: self.image_urls.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketDto {
    #[serde(default)]
    pub basket_id: Option<BasketIdDto>,
    #[serde(default)]
    pub items: Option<Vec<CartItemDto>>,
    #[serde(default)]
    pub total_price: Option<Number>,
}

impl BasketDto {
    /// Missing items read as an empty basket, a missing total as zero.
    pub fn into_domain(self) -> Result<Basket, GatewayError> {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(CartItemDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Basket {
            basket_id: self.basket_id.and_then(BasketIdDto::into_domain),
            items,
            total_price: optional_decimal(self.total_price.as_ref())?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryDto {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub total: Option<Number>,
}

impl OrderSummaryDto {
    pub fn into_domain(self) -> Result<OrderSummary, GatewayError> {
        Ok(OrderSummary {
            id: self.id,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            total: optional_decimal(self.total.as_ref())?,
        })
    }
}

/// Shipping address, read from order details and sent on `PUT user/address`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub commune: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub postal_code: String,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            number: address.number.clone(),
            commune: address.commune.clone(),
            region: address.region.clone(),
            postal_code: address.postal_code.clone(),
        }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Self {
            street: dto.street,
            number: dto.number,
            commune: dto.commune,
            region: dto.region,
            postal_code: dto.postal_code,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
    pub price: Number,
}

impl OrderItemDto {
    pub fn into_domain(self) -> Result<OrderItem, GatewayError> {
        Ok(OrderItem {
            product_id: ProductId::new(self.product_id),
            name: self.name,
            image_url: self.image_url.filter(|url| !url.is_empty()),
            quantity: self.quantity,
            price: decimal(&self.price)?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub total: Option<Number>,
    #[serde(default)]
    pub address: Option<AddressDto>,
    #[serde(default)]
    pub items: Option<Vec<OrderItemDto>>,
}

impl OrderDto {
    pub fn into_domain(self) -> Result<Order, GatewayError> {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(OrderItemDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order {
            id: self.id,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            total: optional_decimal(self.total.as_ref())?,
            address: self.address.map(Address::from),
            items,
        })
    }
}

// Goes through the textual form so 0.1 stays 0.1 instead of its f64 expansion.
fn decimal(number: &Number) -> Result<BigDecimal, GatewayError> {
    BigDecimal::from_str(&number.to_string())
        .map_err(|e| GatewayError::decode(format!("invalid amount {}: {}", number, e)))
}

fn optional_decimal(number: Option<&Number>) -> Result<BigDecimal, GatewayError> {
    number.map_or_else(|| Ok(BigDecimal::from(0)), decimal)
}

/// Accepts RFC 3339 and the zone-less `2024-05-01T10:00:00` form, read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
