//! Button label and page-level display state

use crate::eligibility::Eligibility;
use crate::pricing::PriceQuote;
use crate::reason::{describe_ineligibility, IneligibilityReason};
use crate::window::ClaimWindow;
use primitive_types::U256;

/// Label shown when the unit price is zero
pub const FREE_LABEL: &str = "Mint (Free)";

/// Prefix of the label shown for a paid claim
pub const TOTAL_COST_PREFIX: &str = "TOTAL COSTS: ";

/// Terminal display status of the claim button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    /// Nothing left to claim
    SoldOut,

    /// The wallet may claim
    Ready {
        /// Unit price is zero
        free: bool,
    },

    /// At least one ineligibility reason applies
    Ineligible,

    /// Data still loading
    Loading,

    /// Nothing to show
    Idle,
}

impl ClaimStatus {
    /// Short status name for logs and output
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::SoldOut => "sold-out",
            ClaimStatus::Ready { free: true } => "ready-free",
            ClaimStatus::Ready { free: false } => "ready",
            ClaimStatus::Ineligible => "ineligible",
            ClaimStatus::Loading => "loading",
            ClaimStatus::Idle => "idle",
        }
    }
}

/// Button status and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Display status
    pub status: ClaimStatus,

    /// Button label; blank for sold out, loading and idle
    pub button_text: String,
}

/// Map eligibility, reasons and price into the button state
///
/// Evaluated in order: sold out, claimable, ineligible, loading, idle.
pub fn present(
    eligibility: &Eligibility,
    reasons: &[IneligibilityReason],
    unit_price: Option<U256>,
    price: Option<&PriceQuote>,
    quantity: u64,
) -> Presentation {
    if eligibility.is_sold_out {
        return Presentation {
            status: ClaimStatus::SoldOut,
            button_text: String::new(),
        };
    }

    if eligibility.can_claim {
        let free = unit_price.is_some_and(|p| p.is_zero());
        let button_text = if free {
            FREE_LABEL.to_string()
        } else {
            // A malformed price leaves the label blank rather than wrong
            price.map(|p| format!("{}{}", TOTAL_COST_PREFIX, p)).unwrap_or_default()
        };

        return Presentation {
            status: ClaimStatus::Ready { free },
            button_text,
        };
    }

    if !reasons.is_empty() {
        return Presentation {
            status: ClaimStatus::Ineligible,
            button_text: describe_ineligibility(reasons, quantity),
        };
    }

    let status = if eligibility.button_loading {
        ClaimStatus::Loading
    } else {
        ClaimStatus::Idle
    };

    Presentation {
        status,
        button_text: String::new(),
    }
}

/// Page-level display flags, independent of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    /// Show a loading placeholder instead of the claim grid
    pub show_loading: bool,

    /// Show the quantity input and claim button
    pub show_claim_grid: bool,

    /// "The presale has not started yet." banner
    pub presale_not_started: bool,

    /// "Presale is starting soon." banner
    pub presale_starting_soon: bool,
}

/// Derive the page flags
pub fn page_state(eligibility: &Eligibility, window: &ClaimWindow) -> PageState {
    PageState {
        show_loading: eligibility.is_loading,
        show_claim_grid: !eligibility.is_loading && !window.presale_not_started,
        presale_not_started: window.presale_not_started,
        presale_starting_soon: window.presale_starting_soon,
    }
}
