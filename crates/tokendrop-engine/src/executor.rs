//! Claim executor that records submissions without touching a chain

use crate::EngineError;
use tokendrop_domain::traits::{ClaimExecutor, ClaimReceipt};

/// Executor that accepts every claim and remembers the quantities
#[derive(Debug, Clone, Default)]
pub struct DryRunExecutor {
    submitted: Vec<u64>,
    failure: Option<String>,
}

impl DryRunExecutor {
    /// Create an executor that accepts every claim
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor that fails every claim with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            submitted: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Quantities accepted so far, in order
    pub fn submitted(&self) -> &[u64] {
        &self.submitted
    }
}

impl ClaimExecutor for DryRunExecutor {
    type Error = EngineError;

    fn submit_claim(&mut self, quantity: u64) -> Result<ClaimReceipt, Self::Error> {
        if let Some(message) = &self.failure {
            return Err(EngineError::Executor(message.clone()));
        }

        self.submitted.push(quantity);
        tracing::debug!(quantity, "Dry-run claim recorded");

        Ok(ClaimReceipt {
            transaction_id: format!("dry-run-{}", self.submitted.len()),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_quantities() {
        let mut executor = DryRunExecutor::new();
        let first = executor.submit_claim(3).unwrap();
        let second = executor.submit_claim(1).unwrap();

        assert_eq!(first.transaction_id, "dry-run-1");
        assert_eq!(second.transaction_id, "dry-run-2");
        assert_eq!(executor.submitted(), &[3, 1]);
    }

    #[test]
    fn test_failing_executor() {
        let mut executor = DryRunExecutor::failing("user rejected");
        let err = executor.submit_claim(1).unwrap_err();

        assert!(err.to_string().contains("user rejected"));
        assert!(executor.submitted().is_empty());
    }
}
