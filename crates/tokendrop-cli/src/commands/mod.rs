//! Command implementations.

pub mod claim;
pub mod config;
pub mod quote;
pub mod status;
pub mod watch;

pub use self::claim::execute_claim;
pub use self::config::execute_config;
pub use self::quote::execute_quote;
pub use self::status::execute_status;
pub use self::watch::execute_watch;

use crate::error::Result;
use std::path::Path;
use tokendrop_engine::{ClaimStateEngine, EngineConfig, FixtureProvider};

/// Evaluate a fixture for a raw quantity input.
///
/// The first refresh resolves the cap and the quantity is clamped against it.
/// Editing the quantity leaves the reasons pending, so the second refresh
/// fetches reasons for the edited quantity.
pub fn evaluate_fixture(fixture: &Path, quantity: &str, config: &EngineConfig) -> Result<ClaimStateEngine> {
    let provider = FixtureProvider::from_file(fixture)?;
    let mut engine = ClaimStateEngine::new(config.clone());

    engine.refresh(&provider);
    engine.set_quantity_input(quantity);
    engine.refresh(&provider);

    Ok(engine)
}
