use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;
use business::domain::order::gateway::OrderGateway;
use business::domain::order::model::{Address, Order, OrderSummary};

use crate::client::BackendClient;
use crate::dto::{AddressDto, OrderDto, OrderSummaryDto};

pub struct OrderGatewayHttp {
    client: Arc<BackendClient>,
    logger: Arc<dyn Logger>,
}

impl OrderGatewayHttp {
    pub fn new(client: Arc<BackendClient>, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, GatewayError> {
        let request = self.client.request(Method::GET, "order")?;
        self.client
            .send_enveloped::<Vec<OrderSummaryDto>>(request)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(OrderSummaryDto::into_domain)
            .collect()
    }

    async fn fetch_order(&self, id: i64) -> Result<Option<Order>, GatewayError> {
        let request = self.client.request(Method::GET, &format!("order/{}", id))?;
        match self.client.send_enveloped::<OrderDto>(request).await {
            Ok(dto) => dto.map(OrderDto::into_domain).transpose(),
            Err(err) if err.status_code() == Some(404) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn put_address(&self, address: &Address) -> Result<(), GatewayError> {
        let request = self
            .client
            .request(Method::PUT, "user/address")?
            .json(&AddressDto::from(address));
        self.client.send_without_payload(request).await
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn list_orders(&self) -> Result<Vec<OrderSummary>, GatewayError> {
        let result = self.fetch_orders().await;
        if let Err(err) = &result {
            self.logger
                .error(&format!("Fetching order history failed: {}", err));
        }
        result
    }

    async fn get_order(&self, id: i64) -> Result<Option<Order>, GatewayError> {
        let result = self.fetch_order(id).await;
        if let Err(err) = &result {
            self.logger
                .error(&format!("Fetching order {} failed: {}", id, err));
        }
        result
    }

    async fn update_shipping_address(&self, address: &Address) -> Result<(), GatewayError> {
        let result = self.put_address(address).await;
        match &result {
            Ok(()) => self.logger.info("Shipping address updated"),
            Err(err) => self
                .logger
                .error(&format!("Updating shipping address failed: {}", err)),
        }
        result
    }
}
