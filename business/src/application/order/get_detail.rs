use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::get_detail::{GetOrderDetailParams, GetOrderDetailUseCase};

pub struct GetOrderDetailUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderDetailUseCase for GetOrderDetailUseCaseImpl {
    async fn execute(&self, params: GetOrderDetailParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Getting order detail: {}", params.id));
        let order = self
            .gateway
            .get_order(params.id)
            .await?
            .ok_or(OrderError::NotFound)?;
        self.logger.info(&format!(
            "Retrieved order {} with {} items",
            order.id,
            order.items.len()
        ));
        Ok(order)
    }
}
