//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the derivations and the chain.
//! Fetching, caching and transaction submission live behind them.

use crate::{ClaimCondition, ClaimerProof, ContractMetadata, IneligibilityReason, QueryState, SupplyInfo, TokenBalance};

/// Source of chain-state snapshots
///
/// Each getter returns the latest known state of one query. A failed query is
/// reported as [`QueryState::Error`], never as a Rust error.
pub trait ChainStateProvider {
    /// Error type for [`ChainStateProvider::poll`]
    type Error;

    /// Give the provider a chance to pick up newer data before a refresh
    fn poll(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether a contract handle is available yet
    fn contract_ready(&self) -> bool;

    /// Connected wallet address, if any
    fn wallet(&self) -> Option<String>;

    /// Contract metadata
    fn contract_metadata(&self) -> QueryState<ContractMetadata>;

    /// Claimed supply counter
    fn token_supply(&self) -> QueryState<SupplyInfo>;

    /// Token balance of `wallet`
    fn token_balance(&self, wallet: &str) -> QueryState<TokenBalance>;

    /// Every claim condition, in order
    fn claim_conditions(&self) -> QueryState<Vec<ClaimCondition>>;

    /// The condition that applies to `wallet`
    fn active_claim_condition(&self, wallet: Option<&str>) -> QueryState<ClaimCondition>;

    /// Allowlist proof for `wallet`; `None` when the wallet has no entry
    fn claimer_proof(&self, wallet: &str) -> QueryState<Option<ClaimerProof>>;

    /// Why `wallet` cannot claim `quantity` right now
    fn ineligibility_reasons(&self, quantity: u64, wallet: Option<&str>) -> QueryState<Vec<IneligibilityReason>>;
}

/// Receipt for a submitted claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Transaction identifier reported by the executor
    pub transaction_id: String,

    /// Quantity that was submitted
    pub quantity: u64,
}

/// Submits claims on behalf of the storefront
///
/// The outcome is opaque to the derivations; they only decide whether and
/// with what quantity a claim may be submitted.
pub trait ClaimExecutor {
    /// Error type for submissions
    type Error;

    /// Submit a claim for `quantity` units
    fn submit_claim(&mut self, quantity: u64) -> Result<ClaimReceipt, Self::Error>;
}
