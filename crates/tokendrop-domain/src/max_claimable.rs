//! Effective claim limit for a wallet
//!
//! Combines the tier's global cap, its per-wallet cap, the wallet's allowlist
//! override and the remaining supply. Each source may be unknown; unknown
//! sources degrade to the ceiling instead of blocking the flow.

use crate::amount::{parse_amount, parse_optional, AmountError};
use crate::cap::Cap;
use crate::condition::{ClaimCondition, ClaimerProof};
use primitive_types::U256;

/// What happened to the allowlist override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideOutcome {
    /// No proof, or the proof carries no override
    Absent,

    /// Override `"0"`: unlimited for this wallet
    Unlimited,

    /// Override replaced the tier caps
    Applied(U256),

    /// Override did not parse and was ignored
    Ignored(AmountError),
}

/// Result of resolving the effective claim limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxClaimable {
    /// Effective cap
    pub cap: Cap,

    /// How the allowlist override was treated
    pub allowlist_override: OverrideOutcome,
}

/// Resolve the maximum quantity the wallet may claim
///
/// 1. Global cap; absent or malformed means the ceiling
/// 2. Per-wallet cap; absent or malformed means the ceiling
/// 3. The smaller of the two
/// 4. Allowlist override: `"0"` lifts the cap to the ceiling, any other
///    integer replaces it, anything else is ignored
/// 5. Never more than the available supply
/// 6. Anything at or above the ceiling is [`Cap::Unbounded`]
///
/// # Examples
///
/// ```
/// use tokendrop_domain::{ClaimCondition, Cap, U256};
/// use tokendrop_domain::max_claimable::resolve_max_claimable;
///
/// let condition = ClaimCondition {
///     max_claimable_supply: Some("100".into()),
///     max_claimable_per_wallet: Some("10".into()),
///     available_supply: Some("100".into()),
///     ..Default::default()
/// };
///
/// let max = resolve_max_claimable(Some(&condition), None, U256::from(100u64), 750_000);
/// assert_eq!(max.cap, Cap::Bounded(U256::from(10u64)));
/// ```
pub fn resolve_max_claimable(
    condition: Option<&ClaimCondition>,
    proof: Option<&ClaimerProof>,
    total_available: U256,
    ceiling: u64,
) -> MaxClaimable {
    let fallback = U256::from(ceiling);

    let global_max = parse_optional(condition.and_then(|c| c.max_claimable_supply.as_deref()))
        .unwrap_or(fallback);
    let per_wallet_max = parse_optional(condition.and_then(|c| c.max_claimable_per_wallet.as_deref()))
        .unwrap_or(fallback);

    let mut effective = if per_wallet_max <= global_max {
        per_wallet_max
    } else {
        global_max
    };

    let allowlist_override = match proof.and_then(|p| p.max_claimable.as_deref()) {
        None | Some("") => OverrideOutcome::Absent,
        Some(ClaimerProof::UNLIMITED) => {
            effective = fallback;
            OverrideOutcome::Unlimited
        }
        Some(raw) => match parse_amount(raw) {
            Ok(value) => {
                effective = value;
                OverrideOutcome::Applied(value)
            }
            Err(e) => OverrideOutcome::Ignored(e),
        },
    };

    if total_available < effective {
        effective = total_available;
    }

    MaxClaimable {
        cap: Cap::from_amount(effective, ceiling),
        allowlist_override,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CEILING: u64 = 750_000;

    fn condition(global: Option<&str>, per_wallet: Option<&str>) -> ClaimCondition {
        ClaimCondition {
            max_claimable_supply: global.map(String::from),
            max_claimable_per_wallet: per_wallet.map(String::from),
            ..Default::default()
        }
    }

    fn bounded(n: u64) -> Cap {
        Cap::Bounded(U256::from(n))
    }

    #[test]
    fn test_per_wallet_cap_wins_when_smaller() {
        let c = condition(Some("100"), Some("10"));
        let max = resolve_max_claimable(Some(&c), None, U256::from(100u64), CEILING);
        assert_eq!(max.cap, bounded(10));
        assert_eq!(max.allowlist_override, OverrideOutcome::Absent);
    }

    #[test]
    fn test_global_cap_wins_when_smaller() {
        let c = condition(Some("5"), Some("10"));
        let max = resolve_max_claimable(Some(&c), None, U256::from(100u64), CEILING);
        assert_eq!(max.cap, bounded(5));
    }

    #[test]
    fn test_unlimited_override_is_capped_by_supply() {
        let c = condition(Some("100"), Some("10"));
        let proof = ClaimerProof::with_override("0");
        let max = resolve_max_claimable(Some(&c), Some(&proof), U256::from(100u64), CEILING);
        assert_eq!(max.cap, bounded(100));
        assert_eq!(max.allowlist_override, OverrideOutcome::Unlimited);
    }

    #[test]
    fn test_unlimited_override_with_ample_supply_is_unbounded() {
        let c = condition(Some("100"), Some("10"));
        let proof = ClaimerProof::with_override("0");
        let max = resolve_max_claimable(Some(&c), Some(&proof), U256::from(10_000_000u64), CEILING);
        assert_eq!(max.cap, Cap::Unbounded);
    }

    #[test]
    fn test_numeric_override_replaces_caps() {
        let c = condition(Some("100"), Some("10"));
        let proof = ClaimerProof::with_override("25");
        let max = resolve_max_claimable(Some(&c), Some(&proof), U256::from(100u64), CEILING);
        assert_eq!(max.cap, bounded(25));
        assert_eq!(max.allowlist_override, OverrideOutcome::Applied(U256::from(25u64)));
    }

    #[test]
    fn test_corrupt_override_is_ignored() {
        let c = condition(Some("100"), Some("10"));
        let proof = ClaimerProof::with_override("ten");
        let max = resolve_max_claimable(Some(&c), Some(&proof), U256::from(100u64), CEILING);
        assert_eq!(max.cap, bounded(10));
        assert!(matches!(max.allowlist_override, OverrideOutcome::Ignored(AmountError::Malformed(_))));
    }

    #[test]
    fn test_empty_override_counts_as_absent() {
        let c = condition(Some("100"), Some("10"));
        let proof = ClaimerProof::with_override("");
        let max = resolve_max_claimable(Some(&c), Some(&proof), U256::from(100u64), CEILING);
        assert_eq!(max.allowlist_override, OverrideOutcome::Absent);
        assert_eq!(max.cap, bounded(10));
    }

    #[test]
    fn test_malformed_caps_fall_back_to_ceiling() {
        let c = condition(Some("n/a"), None);
        let max = resolve_max_claimable(Some(&c), None, U256::from(CEILING * 2), CEILING);
        assert_eq!(max.cap, Cap::Unbounded);

        let max = resolve_max_claimable(Some(&c), None, U256::from(40u64), CEILING);
        assert_eq!(max.cap, bounded(40));
    }

    #[test]
    fn test_missing_condition_is_limited_by_supply_only() {
        let max = resolve_max_claimable(None, None, U256::from(7u64), CEILING);
        assert_eq!(max.cap, bounded(7));
    }

    #[test]
    fn test_exhausted_supply_gives_zero_cap() {
        let c = condition(Some("100"), Some("10"));
        let max = resolve_max_claimable(Some(&c), None, U256::zero(), CEILING);
        assert_eq!(max.cap, bounded(0));
    }
}
