//! Raw amount parsing and display formatting
//!
//! Chain values reach the storefront as strings. They are parsed into
//! [`U256`] and never pass through floating point.

use primitive_types::U256;
use thiserror::Error;

/// Why a raw amount could not be turned into a non-negative integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Field absent or empty
    #[error("amount is empty")]
    Empty,

    /// A well-formed negative integer
    #[error("amount is negative: {0}")]
    Negative(String),

    /// Not an integer at all
    #[error("malformed amount: {0}")]
    Malformed(String),

    /// Does not fit in 256 bits
    #[error("amount overflows 256 bits: {0}")]
    Overflow(String),
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer
///
/// # Examples
///
/// ```
/// use tokendrop_domain::{parse_amount, AmountError, U256};
///
/// assert_eq!(parse_amount("1500").unwrap(), U256::from(1500u64));
/// assert_eq!(parse_amount("0xff").unwrap(), U256::from(255u64));
/// assert!(matches!(parse_amount("-3"), Err(AmountError::Negative(_))));
/// assert!(matches!(parse_amount("1.5"), Err(AmountError::Malformed(_))));
/// ```
pub fn parse_amount(raw: &str) -> Result<U256, AmountError> {
    if raw.is_empty() {
        return Err(AmountError::Empty);
    }

    if let Some(magnitude) = raw.strip_prefix('-') {
        return if is_decimal(magnitude) {
            Err(AmountError::Negative(raw.to_string()))
        } else {
            Err(AmountError::Malformed(raw.to_string()))
        };
    }

    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AmountError::Malformed(raw.to_string()));
        }
        if hex.trim_start_matches('0').len() > 64 {
            return Err(AmountError::Overflow(raw.to_string()));
        }
        return U256::from_str_radix(hex, 16).map_err(|_| AmountError::Overflow(raw.to_string()));
    }

    if !is_decimal(raw) {
        return Err(AmountError::Malformed(raw.to_string()));
    }

    U256::from_dec_str(raw).map_err(|_| AmountError::Overflow(raw.to_string()))
}

/// Parse an optional field, treating absence as [`AmountError::Empty`]
pub fn parse_optional(raw: Option<&str>) -> Result<U256, AmountError> {
    raw.map_or(Err(AmountError::Empty), parse_amount)
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Render an integer with `,` between groups of three digits
///
/// # Examples
///
/// ```
/// use tokendrop_domain::{group_thousands, U256};
///
/// assert_eq!(group_thousands(&U256::from(115_000_000u64)), "115,000,000");
/// assert_eq!(group_thousands(&U256::from(999u64)), "999");
/// ```
pub fn group_thousands(value: &U256) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format a smallest-unit amount as a decimal string
///
/// Trailing fractional zeros are dropped but at least one fractional digit is
/// kept; with zero decimals the integer is returned unchanged.
///
/// # Examples
///
/// ```
/// use tokendrop_domain::{format_units, U256};
///
/// let three = U256::from(3u64) * U256::exp10(18);
/// assert_eq!(format_units(three, 18), "3.0");
/// assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
/// assert_eq!(format_units(U256::from(42u64), 0), "42");
/// ```
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{}.{}", whole, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_amount("0").unwrap(), U256::zero());
        assert_eq!(parse_amount("750000").unwrap(), U256::from(750_000u64));
        assert_eq!(parse_amount("007").unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_amount("0x0").unwrap(), U256::zero());
        assert_eq!(parse_amount("0X1A").unwrap(), U256::from(26u64));
        assert!(matches!(parse_amount("0x"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("0xzz"), Err(AmountError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert!(matches!(parse_amount("abc"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1e18"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount(" 5"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("-"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("-12"), Err(AmountError::Negative(_))));
    }

    #[test]
    fn test_parse_overflow() {
        let too_big = "1".repeat(80);
        assert!(matches!(parse_amount(&too_big), Err(AmountError::Overflow(_))));

        let hex_too_big = format!("0x1{}", "0".repeat(64));
        assert!(matches!(parse_amount(&hex_too_big), Err(AmountError::Overflow(_))));
    }

    #[test]
    fn test_parse_optional_absent() {
        assert_eq!(parse_optional(None), Err(AmountError::Empty));
        assert_eq!(parse_optional(Some("9")).unwrap(), U256::from(9u64));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(&U256::zero()), "0");
        assert_eq!(group_thousands(&U256::from(1000u64)), "1,000");
        assert_eq!(group_thousands(&U256::from(12_345u64)), "12,345");
        assert_eq!(group_thousands(&U256::from(1_234_567u64)), "1,234,567");
    }

    #[test]
    fn test_format_units_small_values() {
        assert_eq!(format_units(U256::from(5u64), 18), "0.000000000000000005");
        assert_eq!(format_units(U256::zero(), 18), "0.0");
        assert_eq!(format_units(U256::from(10u64), 1), "1.0");
    }

    #[test]
    fn test_format_units_fractional() {
        let value = U256::from(125u64) * U256::exp10(16);
        assert_eq!(format_units(value, 18), "1.25");
    }
}
