use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Address;

pub struct UpdateShippingAddressParams {
    pub address: Address,
}

#[async_trait]
pub trait UpdateShippingAddressUseCase: Send + Sync {
    async fn execute(&self, params: UpdateShippingAddressParams) -> Result<(), OrderError>;
}
