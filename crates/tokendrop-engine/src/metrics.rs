//! Counters for engine activity

use std::collections::HashMap;

/// Metrics collected while the engine runs
///
/// Tracks recomputations, ignored updates, refresh cycles and claim submissions.
#[derive(Debug, Clone, Default)]
pub struct EngineMetrics {
    /// Updates applied per query name
    pub updates: HashMap<&'static str, usize>,

    /// Times the pipeline ran
    pub recomputations: usize,

    /// Updates that left the snapshot unchanged
    pub unchanged_updates: usize,

    /// Completed refresh cycles
    pub refresh_count: usize,

    /// Claims handed to the executor
    pub claims_submitted: usize,

    /// Claims refused because the wallet could not claim
    pub claims_rejected: usize,

    /// Claims the executor failed
    pub claims_failed: usize,
}

impl EngineMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied update for `query`
    pub fn record_update(&mut self, query: &'static str) {
        *self.updates.entry(query).or_insert(0) += 1;
    }

    /// Record a pipeline run
    pub fn record_recompute(&mut self) {
        self.recomputations += 1;
    }

    /// Record an update that changed nothing
    pub fn record_unchanged(&mut self) {
        self.unchanged_updates += 1;
    }

    /// Record a refresh cycle
    pub fn record_refresh(&mut self) {
        self.refresh_count += 1;
    }

    /// Record a claim handed to the executor
    pub fn record_submission(&mut self) {
        self.claims_submitted += 1;
    }

    /// Record a claim refused before submission
    pub fn record_rejection(&mut self) {
        self.claims_rejected += 1;
    }

    /// Record a claim the executor failed
    pub fn record_failure(&mut self) {
        self.claims_failed += 1;
    }

    /// Get total updates across all queries
    pub fn total_updates(&self) -> usize {
        self.updates.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Engine Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Refresh cycles: {}", self.refresh_count),
            format!("Recomputations: {}", self.recomputations),
            format!("Unchanged updates: {}", self.unchanged_updates),
            String::new(),
        ];

        if !self.updates.is_empty() {
            let mut queries: Vec<_> = self.updates.iter().collect();
            queries.sort_by_key(|(name, _)| **name);

            lines.push("Updates by query:".to_string());
            for (name, count) in queries {
                lines.push(format!("  {}: {}", name, count));
            }
            lines.push(format!("  Total: {}", self.total_updates()));
            lines.push(String::new());
        }

        lines.push(format!(
            "Claims: {} submitted, {} rejected, {} failed",
            self.claims_submitted, self.claims_rejected, self.claims_failed
        ));

        lines.join("\n")
    }
}
