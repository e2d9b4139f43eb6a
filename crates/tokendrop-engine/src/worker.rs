//! Background worker that keeps the engine in sync with a provider

use crate::{ClaimStateEngine, EngineConfig, EngineError, EngineMetrics};
use tokendrop_domain::traits::ChainStateProvider;
use tokio::time::{interval, Duration};

/// Background worker that refreshes the engine on a schedule
///
/// Every tick polls the provider, pulls a fresh snapshot into the engine and
/// lets subscribers see the recomputed state.
///
/// # Examples
///
/// ```no_run
/// use tokendrop_engine::{EngineConfig, FixtureProvider, StorefrontWorker};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = FixtureProvider::from_file("chain.toml")?;
///     let mut worker = StorefrontWorker::new(EngineConfig::default());
///
///     let mut updates = worker.engine().subscribe();
///     tokio::spawn(async move {
///         while updates.changed().await.is_ok() {
///             println!("{}", updates.borrow().button_text);
///         }
///     });
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(provider).await?;
///     Ok(())
/// }
/// ```
pub struct StorefrontWorker {
    engine: ClaimStateEngine,
    interval: Duration,
}

impl StorefrontWorker {
    /// Create a new worker with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        let interval = config.refresh_interval();
        Self {
            engine: ClaimStateEngine::new(config),
            interval,
        }
    }

    /// Wrap an existing engine
    pub fn from_engine(engine: ClaimStateEngine) -> Self {
        let interval = engine.config().refresh_interval();
        Self { engine, interval }
    }

    /// Create a worker with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Override the refresh interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Refresh interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Engine driven by this worker
    pub fn engine(&self) -> &ClaimStateEngine {
        &self.engine
    }

    /// Mutable access to the engine, e.g. to set the quantity between ticks
    pub fn engine_mut(&mut self) -> &mut ClaimStateEngine {
        &mut self.engine
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    ///
    /// Poll failures are logged and the tick is skipped; the previous state
    /// stays published.
    pub async fn run<P>(&mut self, mut provider: P) -> Result<(), EngineError>
    where
        P: ChainStateProvider,
        P::Error: std::fmt::Display,
    {
        let mut ticker = interval(self.interval);

        tracing::info!("Storefront worker started (interval: {:?})", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("Starting refresh cycle");

                    match self.tick(&mut provider) {
                        Ok(changed) => {
                            let state = self.engine.state();
                            tracing::info!(
                                changed,
                                status = state.status.as_str(),
                                quantity = state.quantity,
                                "Refresh completed"
                            );
                        }
                        Err(e) => {
                            tracing::warn!("Refresh failed: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received, stopping storefront worker");
                    break;
                }
            }
        }

        tracing::info!("Storefront worker stopped. Final metrics:\n{}", self.engine.metrics().summary());

        Ok(())
    }

    /// Run for a specific number of cycles
    ///
    /// Unlike [`StorefrontWorker::run`], a poll failure stops the worker and
    /// is returned as [`EngineError::Provider`].
    pub async fn run_cycles<P>(&mut self, mut provider: P, cycles: usize) -> Result<(), EngineError>
    where
        P: ChainStateProvider,
        P::Error: std::fmt::Display,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Storefront worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;

            tracing::debug!("Starting refresh cycle {}/{}", cycle + 1, cycles);

            match self.tick(&mut provider) {
                Ok(changed) => {
                    tracing::info!("Refresh {}/{} completed (changed: {})", cycle + 1, cycles, changed);
                }
                Err(e) => {
                    tracing::error!("Refresh {}/{} failed: {}", cycle + 1, cycles, e);
                    return Err(e);
                }
            }
        }

        tracing::info!(
            "Storefront worker finished {} cycles. Final metrics:\n{}",
            cycles,
            self.engine.metrics().summary()
        );

        Ok(())
    }

    /// Get a reference to the engine's metrics
    pub fn metrics(&self) -> &EngineMetrics {
        self.engine.metrics()
    }

    fn tick<P>(&mut self, provider: &mut P) -> Result<bool, EngineError>
    where
        P: ChainStateProvider,
        P::Error: std::fmt::Display,
    {
        provider
            .poll()
            .map_err(|e| EngineError::Provider(e.to_string()))?;

        Ok(self.engine.refresh(provider))
    }
}
