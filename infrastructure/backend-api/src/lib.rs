pub mod cart_gateway;
pub mod client;
pub mod cookie;
pub mod dto;
pub mod order_gateway;

#[cfg(test)]
pub(crate) mod test_support;
