#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.item_not_in_cart")]
    ItemNotInCart,
    #[error("{0}")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
