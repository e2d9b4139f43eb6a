//! Dependency pipeline from a chain snapshot to the storefront state
//!
//! Each stage is a pure function of the snapshot and the stages before it:
//!
//! ```text
//! snapshot ─┬─> supply ──────┬─> max_claimable ─> quantity ─┬─> price ──┐
//!           ├─> window ──────┼──────────────────────────────┼───────────┼─> presentation
//!           └─> proof ───────┘          supply ─> eligibility ┘           │
//!                                                                        └─> page state
//! ```

use crate::config::EngineConfig;
use crate::inputs::ChainSnapshot;
use tokendrop_domain::eligibility::evaluate_eligibility;
use tokendrop_domain::max_claimable::resolve_max_claimable;
use tokendrop_domain::presentation::{page_state, present};
use tokendrop_domain::pricing::{quote_price, unit_price};
use tokendrop_domain::quantity::clamp_quantity;
use tokendrop_domain::supply::track_supply;
use tokendrop_domain::window::resolve_claim_window;
use tokendrop_domain::{
    group_thousands, Cap, ClaimStatus, ClaimWindow, Eligibility, OverrideOutcome, PageState, PriceQuote,
    SupplySnapshot,
};

/// Everything the storefront renders, derived from one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimState {
    /// Supply figures
    pub supply: SupplySnapshot,

    /// "{remaining} / {declared total} {symbol}" headline
    pub supply_headline: Option<String>,

    /// Effective claim limit for the wallet
    pub max_claimable: Cap,

    /// How the allowlist override was treated
    pub allowlist_override: OverrideOutcome,

    /// Requested quantity after clamping
    pub quantity: u64,

    /// Total price of `quantity`
    pub price_to_mint: Option<PriceQuote>,

    /// Eligibility flags
    pub eligibility: Eligibility,

    /// Claim window banners
    pub window: ClaimWindow,

    /// Page-level display flags
    pub page: PageState,

    /// Button status
    pub status: ClaimStatus,

    /// Button label
    pub button_text: String,

    /// "{balance} {symbol}" of the connected wallet
    pub balance: Option<String>,

    /// Contract name
    pub contract_name: Option<String>,
}

impl ClaimState {
    /// Shorthand for `eligibility.can_claim`
    pub fn can_claim(&self) -> bool {
        self.eligibility.can_claim
    }

    /// Shorthand for `eligibility.is_sold_out`
    pub fn is_sold_out(&self) -> bool {
        self.eligibility.is_sold_out
    }

    /// Numeric quantity limit
    pub fn max_quantity(&self, ceiling: u64) -> u64 {
        self.max_claimable.limit(ceiling)
    }
}

/// Derive the full storefront state
///
/// # Arguments
/// * `snapshot` - Latest query states
/// * `requested_quantity` - Quantity currently held by the engine, clamped here
/// * `now` - Current time in seconds since the Unix epoch
/// * `config` - Engine configuration
pub fn derive_claim_state(
    snapshot: &ChainSnapshot,
    requested_quantity: u64,
    now: u64,
    config: &EngineConfig,
) -> ClaimState {
    let active = snapshot.active_condition.data();

    // Leaves
    let supply = track_supply(
        active.and_then(|c| c.available_supply.as_deref()),
        snapshot.supply.data().and_then(|s| s.claimed_value.as_deref()),
        config.ceiling,
    );
    let window = resolve_claim_window(&snapshot.conditions, &snapshot.active_condition, now);

    // Caps and quantity
    let max = resolve_max_claimable(active, snapshot.proof(), supply.total_available, config.ceiling);
    let quantity = clamp_quantity(Some(i128::from(requested_quantity)), max.cap, config.ceiling);

    // Gates
    let eligibility = evaluate_eligibility(
        &snapshot.active_condition,
        &snapshot.ineligibility,
        &supply,
        config.sold_out_check(),
        snapshot.contract_ready,
    );

    // Price for the clamped quantity
    let currency = active.map(|c| &c.currency);
    let price_to_mint = quote_price(quantity, currency, config.default_decimals);

    let presentation = present(
        &eligibility,
        snapshot.reasons(),
        unit_price(currency),
        price_to_mint.as_ref(),
        quantity,
    );

    ClaimState {
        supply_headline: supply_headline(&supply, config),
        max_claimable: max.cap,
        allowlist_override: max.allowlist_override,
        quantity,
        price_to_mint,
        page: page_state(&eligibility, &window),
        eligibility,
        window,
        status: presentation.status,
        button_text: presentation.button_text,
        balance: snapshot
            .balance
            .data()
            .map(|b| format!("{} {}", b.display_value, b.symbol).trim().to_string()),
        contract_name: snapshot.metadata.data().map(|m| m.name.clone()),
        supply,
    }
}

fn supply_headline(supply: &SupplySnapshot, config: &EngineConfig) -> Option<String> {
    let remaining = supply.remaining_display.as_ref()?;

    let mut headline = match config.declared_total() {
        Some(total) => format!("{} / {}", remaining, group_thousands(&total)),
        None => remaining.clone(),
    };

    if let Some(symbol) = &config.token_symbol {
        headline.push(' ');
        headline.push_str(symbol);
    }

    Some(headline)
}
