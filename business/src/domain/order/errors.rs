#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.invalid_address")]
    InvalidAddress,
    #[error("{0}")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
