use bigdecimal::BigDecimal;

use super::value_objects::{BasketId, ProductId};

/// One product line within a basket.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    pub image_urls: Vec<String>,
}

/// Server-owned cart aggregate, exactly as the backend last reported it.
///
/// `total_price` is never derived from `items` on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub basket_id: Option<BasketId>,
    pub items: Vec<CartItem>,
    pub total_price: BigDecimal,
}

impl Basket {
    pub fn empty() -> Self {
        Self {
            basket_id: None,
            items: Vec::new(),
            total_price: BigDecimal::from(0),
        }
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::empty()
    }
}

/// Observable state of the cart session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub basket: Basket,
    pub loading: bool,
    pub error: Option<String>,
}

impl CartState {
    pub fn basket_id(&self) -> Option<&BasketId> {
        self.basket.basket_id.as_ref()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.basket.items
    }

    pub fn total_price(&self) -> &BigDecimal {
        &self.basket.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.basket.items.is_empty()
    }
}
