//! Requested quantity parsing and clamping

use crate::cap::Cap;

/// Parse free-form quantity input using integer-prefix rules
///
/// Leading whitespace is skipped, an optional sign is honoured and the
/// longest run of digits is read (`"12abc"` is 12, `"3.9"` is 3). Input
/// without leading digits yields `None`. Oversized values saturate.
pub fn parse_quantity_input(raw: &str) -> Option<i128> {
    let trimmed = raw.trim_start();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i128, |acc, b| {
        acc.saturating_mul(10).saturating_add(i128::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Keep a requested quantity within `[1, max]`
///
/// Non-numeric input and anything below one becomes one; anything above the
/// cap becomes the cap. The upper bound is applied last, so a zero cap
/// yields zero.
///
/// # Examples
///
/// ```
/// use tokendrop_domain::{Cap, U256};
/// use tokendrop_domain::quantity::clamp_quantity;
///
/// let cap = Cap::Bounded(U256::from(10u64));
/// assert_eq!(clamp_quantity(Some(25), cap, 750_000), 10);
/// assert_eq!(clamp_quantity(Some(-3), cap, 750_000), 1);
/// assert_eq!(clamp_quantity(None, cap, 750_000), 1);
/// assert_eq!(clamp_quantity(Some(4), cap, 750_000), 4);
/// ```
pub fn clamp_quantity(requested: Option<i128>, max: Cap, ceiling: u64) -> u64 {
    let requested = match requested {
        Some(value) if value >= 1 => u64::try_from(value).unwrap_or(u64::MAX),
        _ => 1,
    };

    requested.min(max.limit(ceiling))
}

/// Parse raw input and clamp it in one step
pub fn clamp_input(raw: &str, max: Cap, ceiling: u64) -> u64 {
    clamp_quantity(parse_quantity_input(raw), max, ceiling)
}
