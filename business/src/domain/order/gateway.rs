use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Address, Order, OrderSummary};

/// Port to the backend order resource and the customer's shipping address.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<OrderSummary>, GatewayError>;
    /// `None` when the backend has no order with that id.
    async fn get_order(&self, id: i64) -> Result<Option<Order>, GatewayError>;
    /// Address the next order is shipped to.
    async fn update_shipping_address(&self, address: &Address) -> Result<(), GatewayError>;
}
