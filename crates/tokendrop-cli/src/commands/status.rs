//! Status command implementation.

use super::evaluate_fixture;
use crate::cli::StatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the status command.
pub async fn execute_status(args: StatusArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let engine = evaluate_fixture(&args.fixture, &args.quantity, &config.engine)?;

    println!("{}", formatter.format_state(&engine.state(), config.engine.ceiling)?);

    Ok(())
}
