use std::sync::Arc;

use anyhow::Context;

use backend_api::cart_gateway::CartGatewayHttp;
use backend_api::client::BackendClient;
use backend_api::order_gateway::OrderGatewayHttp;
use logger::TracingLogger;

use business::application::cart::store::CartStore;
use business::application::order::get_detail::GetOrderDetailUseCaseImpl;
use business::application::order::get_history::GetOrderHistoryUseCaseImpl;
use business::application::order::update_address::UpdateShippingAddressUseCaseImpl;

use crate::config::backend_config::BackendConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
}

impl DependencyContainer {
    pub fn new(backend: &BackendConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(&backend.base_url);

        // One client, one cookie jar: every gateway shares the basket cookie
        let client = Arc::new(
            BackendClient::new(backend.client_config())
                .context("failed to build backend HTTP client")?,
        );

        let cart_gateway = Arc::new(CartGatewayHttp::new(client.clone(), logger.clone()));
        let order_gateway = Arc::new(OrderGatewayHttp::new(client, logger.clone()));

        // The session's cart state lives here for the lifetime of the process
        let cart_store = Arc::new(CartStore::new(cart_gateway, logger.clone()));

        // Order use cases
        let get_history_use_case = Arc::new(GetOrderHistoryUseCaseImpl {
            gateway: order_gateway.clone(),
            logger: logger.clone(),
        });
        let get_detail_use_case = Arc::new(GetOrderDetailUseCaseImpl {
            gateway: order_gateway.clone(),
            logger: logger.clone(),
        });
        let update_address_use_case = Arc::new(UpdateShippingAddressUseCaseImpl {
            gateway: order_gateway,
            logger,
        });

        let cart_api =
            crate::api::cart::routes::CartApi::new(cart_store, update_address_use_case);
        let order_api =
            crate::api::order::routes::OrderApi::new(get_history_use_case, get_detail_use_case);

        Ok(Self {
            health_api,
            cart_api,
            order_api,
        })
    }
}
