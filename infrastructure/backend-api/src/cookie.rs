use std::time::Duration;

use business::domain::cart::value_objects::BasketId;
use business::domain::errors::GatewayError;

pub const BASKET_COOKIE_NAME: &str = "basketId";
/// Fixed lifetime, never renewed.
pub const BASKET_COOKIE_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24);

/// Site-wide cookie correlating requests with the server-held basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketCookie {
    basket_id: BasketId,
}

impl BasketCookie {
    /// Fails when the id cannot be carried verbatim as a cookie value
    /// (RFC 6265 `cookie-octet`s only).
    pub fn new(basket_id: BasketId) -> Result<Self, GatewayError> {
        let id = basket_id.as_str();
        if id.is_empty() || !id.bytes().all(is_cookie_octet) {
            return Err(GatewayError::decode(format!(
                "basket id {:?} is not a valid cookie value",
                id
            )));
        }
        Ok(Self { basket_id })
    }

    /// `Set-Cookie` style value: `basketId=<id>; path=/; max-age=86400`.
    pub fn to_header_value(&self) -> String {
        format!(
            "{}={}; path=/; max-age={}",
            BASKET_COOKIE_NAME,
            self.basket_id,
            BASKET_COOKIE_MAX_AGE.as_secs()
        )
    }
}

fn is_cookie_octet(byte: u8) -> bool {
    matches!(byte, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}
