use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

pub struct GetOrderDetailParams {
    pub id: i64,
}

#[async_trait]
pub trait GetOrderDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderDetailParams) -> Result<Order, OrderError>;
}
