//! Total price for a quantity
//!
//! Multiplication happens on smallest units before any decimal formatting.

use crate::amount::{format_units, parse_optional, AmountError};
use crate::condition::CurrencyValue;
use primitive_types::U256;
use std::fmt;

/// Price of the requested quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Total in the currency's smallest unit
    pub total: U256,

    /// Total formatted with the currency's decimals
    pub amount: String,

    /// Currency ticker, if the condition reported one
    pub symbol: Option<String>,
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} {}", self.amount, symbol),
            None => write!(f, "{}", self.amount),
        }
    }
}

/// Parsed unit price
///
/// Absent means free; a malformed price yields `None` so that nothing is
/// shown rather than a wrong figure.
pub fn unit_price(currency: Option<&CurrencyValue>) -> Option<U256> {
    match parse_optional(currency.and_then(|c| c.value.as_deref())) {
        Ok(price) => Some(price),
        Err(AmountError::Empty) => Some(U256::zero()),
        Err(_) => None,
    }
}

/// Quote the total price of `quantity` units
///
/// Returns `None` for a zero quantity, a malformed unit price, or a total
/// that overflows 256 bits.
///
/// # Examples
///
/// ```
/// use tokendrop_domain::CurrencyValue;
/// use tokendrop_domain::pricing::quote_price;
///
/// let currency = CurrencyValue {
///     value: Some("1000000000000000000".into()),
///     decimals: Some(18),
///     symbol: Some("ETH".into()),
/// };
///
/// let quote = quote_price(3, Some(&currency), 18).unwrap();
/// assert_eq!(quote.to_string(), "3.0 ETH");
/// ```
pub fn quote_price(quantity: u64, currency: Option<&CurrencyValue>, default_decimals: u8) -> Option<PriceQuote> {
    if quantity == 0 {
        return None;
    }

    let total = unit_price(currency)?.checked_mul(U256::from(quantity))?;
    let decimals = currency.and_then(|c| c.decimals).unwrap_or(default_decimals);

    Some(PriceQuote {
        total,
        amount: format_units(total, decimals),
        symbol: currency.and_then(|c| c.symbol.clone()),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: doubling the quantity doubles the smallest-unit total
        #[test]
        fn test_price_scales_linearly(price in 0u128..u128::MAX / 4, quantity in 1u64..=375_000) {
            let c = CurrencyValue {
                value: Some(price.to_string()),
                decimals: Some(18),
                symbol: None,
            };

            let single = quote_price(quantity, Some(&c), 18).unwrap();
            let double = quote_price(quantity * 2, Some(&c), 18).unwrap();

            prop_assert_eq!(double.total, single.total * U256::from(2u64));
        }
    }
}
