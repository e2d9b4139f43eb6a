//! Tokendrop Engine
//!
//! Reactive derived-state engine for a token claim storefront.
//!
//! # Overview
//!
//! The engine turns the raw chain queries a storefront depends on into
//! everything the page renders:
//! - **Supply**: remaining, claimed and total figures
//! - **Caps**: the effective per-wallet limit after allowlist overrides
//! - **Quantity**: the requested amount clamped to `[1, limit]`
//! - **Price**: total cost of the clamped quantity
//! - **Eligibility**: sold-out, claimable and loading flags
//! - **Presentation**: button status and label, page banners
//!
//! # Architecture
//!
//! Query results arrive as [`ProviderUpdate`]s or are pulled from a
//! [`ChainStateProvider`](tokendrop_domain::traits::ChainStateProvider).
//! Each change produces a new immutable [`ChainSnapshot`]; the pipeline in
//! [`derive_claim_state`] recomputes every derived value leaves first and
//! the result is published on a `tokio::sync::watch` channel.
//!
//! ```text
//! provider ─> ChainSnapshot ─> derive_claim_state ─> ClaimState ─> subscribers
//!                 ^                                       │
//!                 └──────── quantity (re-clamped) <───────┘
//! ```
//!
//! # Usage
//!
//! ## One-shot evaluation
//!
//! ```
//! use tokendrop_engine::{ClaimStateEngine, EngineConfig, FixtureProvider};
//!
//! let provider = FixtureProvider::from_toml_str(r#"
//!     [active_condition]
//!     status = "success"
//!     data = { max_claimable_per_wallet = "3", available_supply = "40" }
//!
//!     [ineligibility]
//!     status = "success"
//!     data = []
//! "#).unwrap();
//!
//! let mut engine = ClaimStateEngine::new(EngineConfig::default());
//! engine.refresh(&provider);
//! engine.set_quantity_input("10");
//!
//! // Reasons are pending until fetched for the new quantity
//! assert!(engine.state().eligibility.button_loading);
//! engine.refresh(&provider);
//!
//! let state = engine.state();
//! assert_eq!(state.quantity, 3);
//! assert_eq!(state.button_text, "Mint (Free)");
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! use tokendrop_engine::{EngineConfig, FixtureProvider, StorefrontWorker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = FixtureProvider::from_file("chain.toml")?;
//!     let mut worker = StorefrontWorker::new(EngineConfig::default());
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run(provider).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! ceiling = 750000
//! default_decimals = 18
//! sold_out_policy = "declared-total"
//! declared_total_supply = "115000000"
//! token_symbol = "FOIC"
//! refresh_interval_secs = 15
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod executor;
mod fixture;
mod inputs;
mod metrics;
mod pipeline;
mod worker;

pub use config::{ConfigError, EngineConfig, SoldOutPolicy};
pub use engine::ClaimStateEngine;
pub use error::EngineError;
pub use executor::DryRunExecutor;
pub use fixture::FixtureProvider;
pub use inputs::{ChainSnapshot, ProviderUpdate};
pub use metrics::EngineMetrics;
pub use pipeline::{derive_claim_state, ClaimState};
pub use worker::StorefrontWorker;
