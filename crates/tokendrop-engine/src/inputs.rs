//! Immutable snapshot of every provider query
//!
//! Updates never mutate a snapshot in place; each one yields a new snapshot
//! that the engine compares against the previous one.

use tokendrop_domain::traits::ChainStateProvider;
use tokendrop_domain::{
    ClaimCondition, ClaimerProof, ContractMetadata, IneligibilityReason, QueryState, SupplyInfo, TokenBalance,
};

/// Latest known state of every query the storefront depends on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainSnapshot {
    /// Whether a contract handle is available
    pub contract_ready: bool,

    /// Connected wallet address
    pub wallet: Option<String>,

    /// Contract metadata
    pub metadata: QueryState<ContractMetadata>,

    /// Claimed supply counter
    pub supply: QueryState<SupplyInfo>,

    /// Wallet token balance
    pub balance: QueryState<TokenBalance>,

    /// Every claim condition on the contract
    pub conditions: QueryState<Vec<ClaimCondition>>,

    /// Condition selected for the wallet
    pub active_condition: QueryState<ClaimCondition>,

    /// Allowlist proof for the wallet
    pub claimer_proof: QueryState<Option<ClaimerProof>>,

    /// Ineligibility reasons for the current quantity
    pub ineligibility: QueryState<Vec<IneligibilityReason>>,
}

/// A single pushed change from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderUpdate {
    /// Contract handle became (un)available
    ContractReady(bool),

    /// Wallet connected, switched or disconnected
    Wallet(Option<String>),

    /// Contract metadata changed
    Metadata(QueryState<ContractMetadata>),

    /// Supply counter changed
    Supply(QueryState<SupplyInfo>),

    /// Wallet balance changed
    Balance(QueryState<TokenBalance>),

    /// Condition list changed
    Conditions(QueryState<Vec<ClaimCondition>>),

    /// Active condition changed
    ActiveCondition(QueryState<ClaimCondition>),

    /// Allowlist proof changed
    ClaimerProof(QueryState<Option<ClaimerProof>>),

    /// Ineligibility reasons changed
    Ineligibility(QueryState<Vec<IneligibilityReason>>),
}

impl ProviderUpdate {
    /// Name of the query this update touches
    pub fn query_name(&self) -> &'static str {
        match self {
            ProviderUpdate::ContractReady(_) => "contract",
            ProviderUpdate::Wallet(_) => "wallet",
            ProviderUpdate::Metadata(_) => "metadata",
            ProviderUpdate::Supply(_) => "supply",
            ProviderUpdate::Balance(_) => "balance",
            ProviderUpdate::Conditions(_) => "conditions",
            ProviderUpdate::ActiveCondition(_) => "active_condition",
            ProviderUpdate::ClaimerProof(_) => "claimer_proof",
            ProviderUpdate::Ineligibility(_) => "ineligibility",
        }
    }
}

impl ChainSnapshot {
    /// New snapshot with `update` applied
    pub fn with_update(&self, update: ProviderUpdate) -> Self {
        let mut next = self.clone();

        match update {
            ProviderUpdate::ContractReady(ready) => next.contract_ready = ready,
            ProviderUpdate::Wallet(wallet) => next.wallet = wallet,
            ProviderUpdate::Metadata(state) => next.metadata = state,
            ProviderUpdate::Supply(state) => next.supply = state,
            ProviderUpdate::Balance(state) => next.balance = state,
            ProviderUpdate::Conditions(state) => next.conditions = state,
            ProviderUpdate::ActiveCondition(state) => next.active_condition = state,
            ProviderUpdate::ClaimerProof(state) => next.claimer_proof = state,
            ProviderUpdate::Ineligibility(state) => next.ineligibility = state,
        }

        next
    }

    /// Read every query from `provider`
    ///
    /// Wallet-scoped queries stay [`QueryState::Idle`] while no wallet is
    /// connected. Ineligibility reasons are requested for `quantity`.
    pub fn fetch<P: ChainStateProvider>(provider: &P, quantity: u64) -> Self {
        let wallet = provider.wallet();
        let wallet_ref = wallet.as_deref();

        Self {
            contract_ready: provider.contract_ready(),
            metadata: provider.contract_metadata(),
            supply: provider.token_supply(),
            balance: wallet_ref.map_or(QueryState::Idle, |w| provider.token_balance(w)),
            conditions: provider.claim_conditions(),
            active_condition: provider.active_claim_condition(wallet_ref),
            claimer_proof: wallet_ref.map_or(QueryState::Idle, |w| provider.claimer_proof(w)),
            ineligibility: provider.ineligibility_reasons(quantity, wallet_ref),
            wallet,
        }
    }

    /// Allowlist proof, when one resolved
    pub fn proof(&self) -> Option<&ClaimerProof> {
        self.claimer_proof.data().and_then(Option::as_ref)
    }

    /// Resolved ineligibility reasons; empty while unresolved
    pub fn reasons(&self) -> &[IneligibilityReason] {
        self.ineligibility.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
