//! Claim command implementation.

use super::evaluate_fixture;
use crate::cli::StatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tokendrop_engine::DryRunExecutor;

/// Execute the claim command.
///
/// Claims go through a dry-run executor; nothing is sent anywhere.
pub async fn execute_claim(args: StatusArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut engine = evaluate_fixture(&args.fixture, &args.quantity, &config.engine)?;
    let mut executor = DryRunExecutor::new();

    let receipt = engine.submit_claim(&mut executor)?;
    println!("{}", formatter.format_receipt(&receipt)?);

    Ok(())
}
