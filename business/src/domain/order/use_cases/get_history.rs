use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderSummary;

#[async_trait]
pub trait GetOrderHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<OrderSummary>, OrderError>;
}
