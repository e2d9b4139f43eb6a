//! Sold-out detection and claim eligibility

use crate::amount::{parse_optional, AmountError};
use crate::condition::ClaimCondition;
use crate::query::QueryState;
use crate::reason::IneligibilityReason;
use crate::supply::SupplySnapshot;
use primitive_types::U256;

/// How exhaustion is detected beyond `available <= 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoldOutCheck {
    /// Sold out once `claimed >= total` for a known declared total
    DeclaredTotal(Option<U256>),

    /// Sold out when the claimed and total figures render identically.
    /// Never fires while the total is unknown.
    RenderedTotal,
}

impl Default for SoldOutCheck {
    fn default() -> Self {
        SoldOutCheck::DeclaredTotal(None)
    }
}

/// Eligibility flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eligibility {
    /// Nothing left to claim
    pub is_sold_out: bool,

    /// The wallet may claim the current quantity
    pub can_claim: bool,

    /// Active condition pending or contract not ready
    pub is_loading: bool,

    /// Page loading or ineligibility reasons pending
    pub button_loading: bool,
}

/// Whether the active condition reports exhausted supply
///
/// Negative supply counts as exhausted; absent or malformed supply does not.
pub fn supply_exhausted(active: &QueryState<ClaimCondition>) -> bool {
    let Some(condition) = active.data() else {
        return false;
    };

    match parse_optional(condition.available_supply.as_deref()) {
        Ok(available) => available.is_zero(),
        Err(AmountError::Negative(_)) => true,
        Err(_) => false,
    }
}

/// Whether the supply counters indicate exhaustion under `check`
pub fn totals_exhausted(supply: &SupplySnapshot, check: SoldOutCheck) -> bool {
    match check {
        SoldOutCheck::DeclaredTotal(Some(total)) => supply.claimed >= total,
        SoldOutCheck::DeclaredTotal(None) => false,
        SoldOutCheck::RenderedTotal => supply.claimed_text() == supply.total_text(),
    }
}

/// Combine every gate into the eligibility flags
///
/// # Arguments
/// * `active` - Active condition for the wallet
/// * `reasons` - Ineligibility reasons for the current quantity and wallet
/// * `supply` - Derived supply figures
/// * `check` - Secondary sold-out check
/// * `contract_ready` - Whether a contract handle is available
pub fn evaluate_eligibility(
    active: &QueryState<ClaimCondition>,
    reasons: &QueryState<Vec<IneligibilityReason>>,
    supply: &SupplySnapshot,
    check: SoldOutCheck,
    contract_ready: bool,
) -> Eligibility {
    let is_sold_out = supply_exhausted(active) || totals_exhausted(supply, check);

    let can_claim = active.is_success()
        && reasons.data().is_some_and(|list| list.is_empty())
        && !is_sold_out;

    let is_loading = active.is_loading() || !contract_ready;

    Eligibility {
        is_sold_out,
        can_claim,
        is_loading,
        button_loading: is_loading || reasons.is_loading(),
    }
}
