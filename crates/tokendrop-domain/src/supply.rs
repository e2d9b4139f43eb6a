//! Supply tracking
//!
//! `available` and `claimed` come from independent queries. Their sum is
//! reported only while it stays below the ceiling.

use crate::amount::{group_thousands, parse_optional, AmountError};
use primitive_types::U256;

/// Derived supply figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplySnapshot {
    /// Parsed available supply; zero when negative, the ceiling when absent
    /// or malformed
    pub total_available: U256,

    /// Parsed claimed amount; zero when absent or malformed
    pub claimed: U256,

    /// `total_available + claimed`, or `None` when that reaches the ceiling
    pub total: Option<U256>,

    /// Available supply grouped for display; `None` when it does not parse
    pub remaining_display: Option<String>,
}

impl SupplySnapshot {
    /// Claimed amount as rendered text
    pub fn claimed_text(&self) -> String {
        self.claimed.to_string()
    }

    /// Total as rendered text; empty when unknown
    pub fn total_text(&self) -> String {
        self.total.map(|t| t.to_string()).unwrap_or_default()
    }
}

/// Derive supply figures from the active condition and the supply counter
///
/// # Examples
///
/// ```
/// use tokendrop_domain::supply::track_supply;
/// use tokendrop_domain::U256;
///
/// let supply = track_supply(Some("1200"), Some("300"), 750_000);
/// assert_eq!(supply.total, Some(U256::from(1500u64)));
/// assert_eq!(supply.remaining_display.as_deref(), Some("1,200"));
///
/// // Near-unbounded totals are not reported
/// let supply = track_supply(None, Some("300"), 750_000);
/// assert_eq!(supply.total, None);
/// ```
pub fn track_supply(available: Option<&str>, claimed: Option<&str>, ceiling: u64) -> SupplySnapshot {
    let parsed_available = parse_optional(available);

    let total_available = match &parsed_available {
        Ok(available) => *available,
        Err(AmountError::Negative(_)) => U256::zero(),
        Err(_) => U256::from(ceiling),
    };
    let claimed = parse_optional(claimed).unwrap_or_else(|_| U256::zero());

    let total = total_available
        .checked_add(claimed)
        .filter(|sum| *sum < U256::from(ceiling));

    SupplySnapshot {
        total_available,
        claimed,
        total,
        remaining_display: parsed_available.ok().map(|n| group_thousands(&n)),
    }
}
