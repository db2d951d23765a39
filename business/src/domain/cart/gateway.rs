use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::order::model::OrderSummary;

use super::model::Basket;
use super::value_objects::{ProductId, Quantity};

/// Port to the backend basket resource.
///
/// Implementations return the authoritative basket after every call and
/// never retry. Persisting the basket id between calls is their concern.
#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Current basket, or `None` when the backend holds none.
    async fn fetch_cart(&self) -> Result<Option<Basket>, GatewayError>;
    async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Basket, GatewayError>;
    /// Decrements the line by `quantity` units.
    async fn remove_from_cart(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Basket, GatewayError>;
    async fn create_order(&self) -> Result<OrderSummary, GatewayError>;
}
