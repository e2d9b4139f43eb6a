//! Core claim state engine

use crate::inputs::{ChainSnapshot, ProviderUpdate};
use crate::pipeline::{derive_claim_state, ClaimState};
use crate::{EngineConfig, EngineError, EngineMetrics};
use std::time::{SystemTime, UNIX_EPOCH};
use tokendrop_domain::quantity::clamp_input;
use tokendrop_domain::traits::{ChainStateProvider, ClaimExecutor, ClaimReceipt};
use tokendrop_domain::{OverrideOutcome, QueryState};
use tokio::sync::watch;

/// Current timestamp in seconds since Unix epoch
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Reactive container for the storefront state
///
/// Holds the latest [`ChainSnapshot`] and the requested quantity. Whenever
/// either changes, the full pipeline reruns and the new [`ClaimState`] is
/// published to subscribers. Updates that leave the snapshot unchanged are
/// dropped without recomputing.
///
/// # Examples
///
/// ```
/// use tokendrop_engine::{ClaimStateEngine, EngineConfig, ProviderUpdate};
/// use tokendrop_domain::{ClaimCondition, QueryState};
///
/// let mut engine = ClaimStateEngine::new(EngineConfig::default());
/// let updates = engine.subscribe();
///
/// engine.apply(ProviderUpdate::ContractReady(true));
/// engine.apply(ProviderUpdate::ActiveCondition(QueryState::Success(ClaimCondition {
///     max_claimable_per_wallet: Some("5".into()),
///     available_supply: Some("100".into()),
///     ..Default::default()
/// })));
///
/// assert_eq!(engine.set_quantity_input("9"), 5);
/// assert!(updates.has_changed().unwrap());
/// ```
pub struct ClaimStateEngine {
    config: EngineConfig,
    snapshot: ChainSnapshot,
    quantity: u64,
    state_tx: watch::Sender<ClaimState>,
    metrics: EngineMetrics,
    clock: fn() -> u64,
}

impl ClaimStateEngine {
    /// Create an engine with an empty snapshot and a quantity of one
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, current_timestamp)
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Create an engine reading time from `clock`
    pub fn with_clock(config: EngineConfig, clock: fn() -> u64) -> Self {
        let snapshot = ChainSnapshot::default();
        let initial = derive_claim_state(&snapshot, 1, clock(), &config);
        let (state_tx, _) = watch::channel(initial.clone());

        Self {
            config,
            snapshot,
            quantity: initial.quantity,
            state_tx,
            metrics: EngineMetrics::new(),
            clock,
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Latest input snapshot
    pub fn snapshot(&self) -> &ChainSnapshot {
        &self.snapshot
    }

    /// Current clamped quantity
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Latest derived state
    pub fn state(&self) -> ClaimState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to derived state changes
    pub fn subscribe(&self) -> watch::Receiver<ClaimState> {
        self.state_tx.subscribe()
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Apply one provider update
    ///
    /// Returns whether the state was recomputed.
    pub fn apply(&mut self, update: ProviderUpdate) -> bool {
        let query = update.query_name();
        let next = self.snapshot.with_update(update);

        if next == self.snapshot {
            tracing::trace!(query, "Update left snapshot unchanged");
            self.metrics.record_unchanged();
            return false;
        }

        self.metrics.record_update(query);
        self.snapshot = next;
        self.recompute();
        true
    }

    /// Replace the whole snapshot
    ///
    /// Returns whether the state was recomputed.
    pub fn replace_snapshot(&mut self, snapshot: ChainSnapshot) -> bool {
        if snapshot == self.snapshot {
            self.metrics.record_unchanged();
            return false;
        }

        self.snapshot = snapshot;
        self.recompute();
        true
    }

    /// Set the quantity from raw user input, returning the clamped value
    pub fn set_quantity_input(&mut self, raw: &str) -> u64 {
        let max = self.state_tx.borrow().max_claimable;
        let quantity = clamp_input(raw, max, self.config.ceiling);
        self.set_quantity(quantity)
    }

    /// Set the quantity, returning the clamped value
    ///
    /// Resolved ineligibility reasons belong to the previous quantity, so a
    /// change marks them loading until the provider answers for the new one.
    pub fn set_quantity(&mut self, quantity: u64) -> u64 {
        if quantity != self.quantity {
            self.quantity = quantity;
            self.mark_reasons_pending();
            self.recompute();
        }
        self.quantity
    }

    /// Pull every query from `provider` and recompute
    ///
    /// Ineligibility reasons are fetched for the current quantity. If the new
    /// snapshot clamps the quantity to a different value, reasons are fetched
    /// again for the clamped quantity.
    pub fn refresh<P: ChainStateProvider>(&mut self, provider: &P) -> bool {
        let requested = self.quantity;
        let mut changed = self.replace_snapshot(ChainSnapshot::fetch(provider, requested));

        if self.quantity != requested {
            tracing::debug!(
                requested,
                clamped = self.quantity,
                "Quantity re-clamped, refreshing ineligibility reasons"
            );
            let wallet = self.snapshot.wallet.clone();
            let reasons = provider.ineligibility_reasons(self.quantity, wallet.as_deref());
            changed |= self.apply(ProviderUpdate::Ineligibility(reasons));
        }

        self.metrics.record_refresh();
        changed
    }

    /// Submit a claim for the current quantity
    ///
    /// Refused with [`EngineError::NotClaimable`] unless the current state
    /// allows claiming. The executor's outcome is passed through untouched.
    pub fn submit_claim<E>(&mut self, executor: &mut E) -> Result<ClaimReceipt, EngineError>
    where
        E: ClaimExecutor,
        E::Error: std::fmt::Display,
    {
        let state = self.state();

        if !state.can_claim() {
            self.metrics.record_rejection();
            let reason = if state.button_text.is_empty() {
                state.status.as_str().to_string()
            } else {
                state.button_text
            };
            tracing::info!(quantity = state.quantity, %reason, "Claim refused");
            return Err(EngineError::NotClaimable(reason));
        }

        tracing::info!(quantity = state.quantity, "Submitting claim");
        self.metrics.record_submission();

        executor.submit_claim(state.quantity).map_err(|e| {
            self.metrics.record_failure();
            tracing::error!("Claim submission failed: {}", e);
            EngineError::Executor(e.to_string())
        })
    }

    /// Rerun the pipeline and publish the result
    fn recompute(&mut self) {
        let mut state = derive_claim_state(&self.snapshot, self.quantity, (self.clock)(), &self.config);
        self.metrics.record_recompute();

        if state.quantity != self.quantity {
            tracing::debug!(from = self.quantity, to = state.quantity, "Quantity re-clamped");
            self.quantity = state.quantity;
            if self.mark_reasons_pending() {
                state = derive_claim_state(&self.snapshot, self.quantity, (self.clock)(), &self.config);
            }
        }

        if let OverrideOutcome::Ignored(e) = &state.allowlist_override {
            tracing::warn!("Ignoring corrupt allowlist override: {}", e);
        }

        if let QueryState::Error(message) = &self.snapshot.active_condition {
            tracing::warn!(%message, "Active claim condition failed to resolve");
        }

        tracing::debug!(
            status = state.status.as_str(),
            max_claimable = %state.max_claimable,
            quantity = state.quantity,
            can_claim = state.can_claim(),
            sold_out = state.is_sold_out(),
            condition = self.snapshot.active_condition.label(),
            reasons = self.snapshot.ineligibility.label(),
            "Claim state recomputed"
        );

        self.state_tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }

    /// Mark resolved ineligibility reasons as loading
    ///
    /// Returns whether the snapshot changed. A disabled query stays idle.
    fn mark_reasons_pending(&mut self) -> bool {
        if matches!(self.snapshot.ineligibility, QueryState::Idle | QueryState::Loading) {
            return false;
        }

        self.snapshot = self
            .snapshot
            .with_update(ProviderUpdate::Ineligibility(QueryState::Loading));
        true
    }
}
