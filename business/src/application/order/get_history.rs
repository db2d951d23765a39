use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::OrderSummary;
use crate::domain::order::use_cases::get_history::GetOrderHistoryUseCase;

pub struct GetOrderHistoryUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderHistoryUseCase for GetOrderHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<OrderSummary>, OrderError> {
        self.logger.info("Getting order history");
        let orders = self.gateway.list_orders().await?;
        self.logger
            .info(&format!("Retrieved {} orders", orders.len()));
        Ok(orders)
    }
}
