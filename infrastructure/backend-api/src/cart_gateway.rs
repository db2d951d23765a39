use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use business::domain::cart::gateway::CartGateway;
use business::domain::cart::model::Basket;
use business::domain::cart::value_objects::{ProductId, Quantity};
use business::domain::errors::GatewayError;
use business::domain::logger::Logger;
use business::domain::order::model::OrderSummary;

use crate::client::BackendClient;
use crate::cookie::BasketCookie;
use crate::dto::{BasketDto, OrderSummaryDto};

const BASKET_PATH: &str = "basket";
const ORDER_PATH: &str = "order";

/// `CartGateway` over the backend `basket` and `order` resources.
///
/// Every failure is logged here and handed back unchanged; nothing is retried.
pub struct CartGatewayHttp {
    client: Arc<BackendClient>,
    logger: Arc<dyn Logger>,
}

impl CartGatewayHttp {
    pub fn new(client: Arc<BackendClient>, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }

    async fn get_basket(&self) -> Result<Option<Basket>, GatewayError> {
        let request = self.client.request(Method::GET, BASKET_PATH)?;
        self.client
            .send_enveloped::<BasketDto>(request)
            .await?
            .map(BasketDto::into_domain)
            .transpose()
    }

    async fn post_order(&self) -> Result<OrderSummary, GatewayError> {
        let request = self.client.request(Method::POST, ORDER_PATH)?;
        self.client
            .send_enveloped::<OrderSummaryDto>(request)
            .await?
            .ok_or(GatewayError::EmptyEnvelope)?
            .into_domain()
    }

    async fn basket_mutation(
        &self,
        method: Method,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Basket, GatewayError> {
        let request = self
            .client
            .request(method, BASKET_PATH)?
            .query(&[("productId", product_id.value())])
            .query(&[("quantity", quantity.value())]);

        self.client
            .send_enveloped::<BasketDto>(request)
            .await?
            .ok_or(GatewayError::EmptyEnvelope)?
            .into_domain()
    }

    fn report<T>(
        &self,
        action: &str,
        result: Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        match &result {
            Ok(_) => self.logger.info(&format!("{} succeeded", action)),
            Err(err) => self.logger.error(&format!("{} failed: {}", action, err)),
        }
        result
    }
}

#[async_trait]
impl CartGateway for CartGatewayHttp {
    async fn fetch_cart(&self) -> Result<Option<Basket>, GatewayError> {
        let result = self.get_basket().await;
        self.report("Fetch cart", result)
    }

    async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Basket, GatewayError> {
        let result = self
            .basket_mutation(Method::POST, product_id, quantity)
            .await;

        if let Ok(Basket {
            basket_id: Some(basket_id),
            ..
        }) = &result
        {
            match BasketCookie::new(basket_id.clone()) {
                Ok(cookie) => {
                    self.client.remember_basket(&cookie);
                    self.logger
                        .debug(&format!("Basket cookie set for basket {}", basket_id));
                }
                Err(err) => self
                    .logger
                    .warn(&format!("Basket cookie not set: {}", err)),
            }
        }

        self.report(&format!("Add product {} to cart", product_id), result)
    }

    async fn remove_from_cart(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Basket, GatewayError> {
        let result = self
            .basket_mutation(Method::DELETE, product_id, quantity)
            .await;

        self.report(&format!("Remove product {} from cart", product_id), result)
    }

    async fn create_order(&self) -> Result<OrderSummary, GatewayError> {
        let result = self.post_order().await;
        self.report("Create order", result)
    }
}
