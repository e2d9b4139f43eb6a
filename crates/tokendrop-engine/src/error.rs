//! Error types for engine operations
//!
//! Derivations never fail; these errors only come from the edges (loading
//! configuration or fixtures, submitting claims, the refresh worker).

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur around the claim state engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Fixture could not be read or parsed
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Provider failed to refresh
    #[error("Provider error: {0}")]
    Provider(String),

    /// Claim attempted while the wallet cannot claim
    #[error("Claim not possible: {0}")]
    NotClaimable(String),

    /// Executor rejected or failed the submission
    #[error("Executor error: {0}")]
    Executor(String),

    /// Worker error (tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}
