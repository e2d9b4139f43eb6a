//! Quote command implementation.

use super::evaluate_fixture;
use crate::cli::StatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the quote command.
pub async fn execute_quote(args: StatusArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let engine = evaluate_fixture(&args.fixture, &args.quantity, &config.engine)?;
    let state = engine.state();

    if state.price_to_mint.is_none() {
        eprintln!("{}", formatter.warning("No price available for this quantity"));
    }

    println!("{}", formatter.format_quote(&state, config.engine.ceiling)?);

    Ok(())
}
