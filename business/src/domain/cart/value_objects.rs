use super::errors::CartError;

/// Backend identifier of a catalogue product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of units of a product. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(units: u32) -> Result<Self, CartError> {
        if units == 0 {
            return Err(CartError::InvalidQuantity);
        }
        Ok(Self(units))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = CartError;

    fn try_from(units: i64) -> Result<Self, Self::Error> {
        u32::try_from(units)
            .map_err(|_| CartError::InvalidQuantity)
            .and_then(Quantity::new)
    }
}

/// Server-assigned basket identifier, carried in the `basketId` cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasketId(String);

impl BasketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BasketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
