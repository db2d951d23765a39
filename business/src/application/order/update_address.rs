use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Address;
use crate::domain::order::use_cases::update_address::{
    UpdateShippingAddressParams, UpdateShippingAddressUseCase,
};

const POSTAL_CODE_DIGITS: usize = 7;

pub struct UpdateShippingAddressUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShippingAddressUseCase for UpdateShippingAddressUseCaseImpl {
    async fn execute(&self, params: UpdateShippingAddressParams) -> Result<(), OrderError> {
        let address = params.address;
        if !is_complete(&address) {
            self.logger.warn("Rejected incomplete shipping address");
            return Err(OrderError::InvalidAddress);
        }

        self.logger.info(&format!(
            "Updating shipping address: {}, {}",
            address.commune, address.region
        ));
        self.gateway.update_shipping_address(&address).await?;
        self.logger.info("Shipping address updated");
        Ok(())
    }
}

fn is_complete(address: &Address) -> bool {
    let filled = [
        &address.street,
        &address.number,
        &address.commune,
        &address.region,
    ]
    .iter()
    .all(|field| !field.trim().is_empty());

    filled
        && address.postal_code.len() == POSTAL_CODE_DIGITS
        && address.postal_code.bytes().all(|b| b.is_ascii_digit())
}
