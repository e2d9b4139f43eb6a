//! Tokendrop Domain Layer
//!
//! This crate contains the pure derivations behind the token drop storefront.
//! It performs no I/O and keeps no state: every function here turns raw chain
//! snapshots into display-ready values, degrading to documented fallbacks when
//! upstream data is missing or malformed.
//!
//! ## Key Concepts
//!
//! - **Claim condition**: a tier of the distribution (presale, public) with its own caps and price
//! - **Cap**: the maximum purchasable quantity, either bounded or unbounded
//! - **Allowlist proof**: a per-wallet override of the claim limit
//! - **Ineligibility reason**: a coded explanation for why a claim cannot go through
//! - **Ceiling**: the 750,000 upper bound used when a true cap is unknown
//!
//! ## Derivation order
//!
//! Leaves first, matching how the engine recomputes:
//!
//! 1. [`supply::track_supply`]
//! 2. [`window::resolve_claim_window`]
//! 3. [`max_claimable::resolve_max_claimable`]
//! 4. [`quantity::clamp_quantity`]
//! 5. [`eligibility::evaluate_eligibility`]
//! 6. [`pricing::quote_price`]
//! 7. [`presentation::present`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod amount;
pub mod cap;
pub mod condition;
pub mod eligibility;
pub mod max_claimable;
pub mod presentation;
pub mod pricing;
pub mod quantity;
pub mod query;
pub mod reason;
pub mod supply;
pub mod traits;
pub mod window;

/// Upper bound on any purchasable quantity.
///
/// Used as the fallback for caps that are absent or malformed, and as the
/// point at which a cap is considered unbounded.
pub const CEILING: u64 = 750_000;

/// Decimals assumed when a currency does not report its own.
pub const DEFAULT_DECIMALS: u8 = 18;

// Re-exports for convenience
pub use amount::{format_units, group_thousands, parse_amount, AmountError};
pub use cap::Cap;
pub use condition::{ClaimCondition, ClaimerProof, ContractMetadata, CurrencyValue, SupplyInfo, TokenBalance};
pub use eligibility::{Eligibility, SoldOutCheck};
pub use max_claimable::{MaxClaimable, OverrideOutcome};
pub use presentation::{ClaimStatus, PageState, Presentation};
pub use pricing::PriceQuote;
pub use query::QueryState;
pub use reason::IneligibilityReason;
pub use supply::SupplySnapshot;
pub use window::ClaimWindow;

/// 256-bit unsigned integer used for every supply and price value
pub use primitive_types::U256;
