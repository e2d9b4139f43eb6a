//! Watch command implementation.

use crate::cli::WatchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::time::Duration;
use tokendrop_engine::{ClaimStateEngine, FixtureProvider, StorefrontWorker};

/// Execute the watch command.
///
/// Every state change published by the engine is printed as one line.
pub async fn execute_watch(args: WatchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let provider = FixtureProvider::from_file(&args.fixture)?;
    let ceiling = config.engine.ceiling;

    let mut engine = ClaimStateEngine::new(config.engine.clone());
    engine.set_quantity_input(&args.quantity);

    let mut worker = StorefrontWorker::from_engine(engine);
    if let Some(secs) = args.interval {
        if secs == 0 {
            return Err(CliError::InvalidInput(
                "Interval must be at least one second".to_string(),
            ));
        }
        worker = worker.with_interval(Duration::from_secs(secs));
    }

    let mut updates = worker.engine().subscribe();
    let printer = formatter.clone();
    let printer_task = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            match printer.format_state_line(&state, ceiling) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("{}", printer.error(&e.to_string())),
            }
        }
    });

    eprintln!(
        "{}",
        formatter.info(&format!(
            "Watching {} (interval: {:?})",
            args.fixture.display(),
            worker.interval()
        ))
    );

    let result = match args.cycles {
        Some(cycles) => worker.run_cycles(provider, cycles).await,
        None => worker.run(provider).await,
    };

    // Dropping the worker closes the channel and ends the printer
    drop(worker);
    if let Err(e) = printer_task.await {
        tracing::warn!("Printer task failed: {}", e);
    }

    result?;
    Ok(())
}
