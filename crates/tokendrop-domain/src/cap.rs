//! Purchasable quantity caps

use primitive_types::U256;
use std::fmt;

/// Maximum quantity a wallet may claim
///
/// `Unbounded` replaces the practice of using the ceiling as a magic number
/// for "no binding cap known". Any amount at or above the ceiling collapses
/// to `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    /// A known cap strictly below the ceiling
    Bounded(U256),

    /// No binding cap below the ceiling
    Unbounded,
}

impl Cap {
    /// Build a cap from an amount, collapsing values at or above `ceiling`
    ///
    /// # Examples
    ///
    /// ```
    /// use tokendrop_domain::{Cap, U256};
    ///
    /// assert_eq!(Cap::from_amount(U256::from(10u64), 750_000), Cap::Bounded(U256::from(10u64)));
    /// assert_eq!(Cap::from_amount(U256::from(750_000u64), 750_000), Cap::Unbounded);
    /// ```
    pub fn from_amount(amount: U256, ceiling: u64) -> Self {
        if amount >= U256::from(ceiling) {
            Cap::Unbounded
        } else {
            Cap::Bounded(amount)
        }
    }

    /// Numeric quantity limit; `Unbounded` maps to the ceiling
    pub fn limit(&self, ceiling: u64) -> u64 {
        match self {
            // Bounded values are below the ceiling, so they fit in u64
            Cap::Bounded(n) if *n < U256::from(ceiling) => n.low_u64(),
            Cap::Bounded(_) | Cap::Unbounded => ceiling,
        }
    }

    /// Whether no binding cap is known
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Cap::Unbounded)
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cap::Bounded(n) => write!(f, "{}", n),
            Cap::Unbounded => write!(f, "unbounded"),
        }
    }
}
