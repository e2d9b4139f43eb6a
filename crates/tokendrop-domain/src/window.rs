//! Claim window signals
//!
//! Tier selection itself happens in the provider; this module only reacts to
//! the condition list and the active condition it reports.

use crate::amount::parse_optional;
use crate::condition::ClaimCondition;
use crate::query::QueryState;

/// Informational banners about the claim window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaimWindow {
    /// Active condition failed to resolve while conditions exist, or it opens in the future
    pub presale_starting_soon: bool,

    /// No conditions exist, or every condition caps supply at zero
    pub presale_not_started: bool,
}

/// Derive the window banners
///
/// # Arguments
/// * `conditions` - Every claim condition on the contract, in order
/// * `active` - The condition the provider selected for the wallet
/// * `now` - Current time in seconds since the Unix epoch
pub fn resolve_claim_window(
    conditions: &QueryState<Vec<ClaimCondition>>,
    active: &QueryState<ClaimCondition>,
    now: u64,
) -> ClaimWindow {
    let has_conditions = conditions.data().is_some_and(|list| !list.is_empty());

    let opens_later = active.data().is_some_and(|condition| !condition.has_started(now));

    let presale_starting_soon = (has_conditions && active.is_error()) || opens_later;

    let presale_not_started = conditions.data().is_some_and(|list| {
        list.iter().all(|condition| {
            parse_optional(condition.max_claimable_supply.as_deref()).is_ok_and(|cap| cap.is_zero())
        })
    });

    ClaimWindow {
        presale_starting_soon,
        presale_not_started,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(max_supply: &str, start_time: u64) -> ClaimCondition {
        ClaimCondition {
            start_time: Some(start_time),
            max_claimable_supply: Some(max_supply.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list_means_not_started() {
        let window = resolve_claim_window(&QueryState::Success(vec![]), &QueryState::Loading, 100);
        assert!(window.presale_not_started);
        assert!(!window.presale_starting_soon);
    }

    #[test]
    fn test_all_zero_caps_means_not_started() {
        let list = vec![condition("0", 10), condition("0x0", 20)];
        let window = resolve_claim_window(&QueryState::Success(list), &QueryState::Idle, 100);
        assert!(window.presale_not_started);
    }

    #[test]
    fn test_one_nonzero_cap_means_started() {
        let list = vec![condition("0", 10), condition("500", 20)];
        let window = resolve_claim_window(&QueryState::Success(list), &QueryState::Idle, 100);
        assert!(!window.presale_not_started);
    }

    #[test]
    fn test_unresolved_list_shows_no_banner() {
        let window = resolve_claim_window(&QueryState::Loading, &QueryState::Loading, 100);
        assert_eq!(window, ClaimWindow::default());
    }

    #[test]
    fn test_active_error_with_conditions_is_starting_soon() {
        let list = vec![condition("500", 10)];
        let window = resolve_claim_window(
            &QueryState::Success(list),
            &QueryState::Error("no active phase".into()),
            100,
        );
        assert!(window.presale_starting_soon);
    }

    #[test]
    fn test_active_error_without_conditions_is_not_starting_soon() {
        let window = resolve_claim_window(
            &QueryState::Success(vec![]),
            &QueryState::Error("no active phase".into()),
            100,
        );
        assert!(!window.presale_starting_soon);
    }

    #[test]
    fn test_future_start_is_starting_soon() {
        let active = QueryState::Success(condition("500", 200));
        let window = resolve_claim_window(&QueryState::Loading, &active, 100);
        assert!(window.presale_starting_soon);

        let window = resolve_claim_window(&QueryState::Loading, &active, 200);
        assert!(!window.presale_starting_soon);
    }
}
