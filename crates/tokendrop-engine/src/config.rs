//! Configuration for the claim state engine
//!
//! Defines the ceiling, currency defaults, sold-out policy and refresh cadence.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokendrop_domain::{parse_amount, SoldOutCheck, U256, CEILING, DEFAULT_DECIMALS};

/// Engine configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Secondary sold-out detection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoldOutPolicy {
    /// Sold out once claimed reaches the configured declared total
    #[default]
    DeclaredTotal,

    /// Sold out when claimed and total render as the same text
    RenderedTotal,
}

/// Configuration for the claim state engine
///
/// # Examples
///
/// ```
/// use tokendrop_engine::{EngineConfig, SoldOutPolicy};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.ceiling, 750_000);
/// assert_eq!(config.sold_out_policy, SoldOutPolicy::DeclaredTotal);
///
/// let config = EngineConfig::legacy();
/// assert_eq!(config.sold_out_policy, SoldOutPolicy::RenderedTotal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on any purchasable quantity
    /// Default: 750,000
    #[serde(default = "default_ceiling")]
    pub ceiling: u64,

    /// Decimals assumed when the currency reports none
    /// Default: 18
    #[serde(default = "default_decimals")]
    pub default_decimals: u8,

    /// How exhaustion is detected beyond `available <= 0`
    #[serde(default)]
    pub sold_out_policy: SoldOutPolicy,

    /// Total supply of the drop as advertised, e.g. "115000000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_total_supply: Option<String>,

    /// Ticker shown next to supply figures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,

    /// How often the worker refreshes from the provider (in seconds)
    /// Default: 15
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_ceiling() -> u64 {
    CEILING
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

fn default_refresh_interval() -> u64 {
    15
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ceiling: CEILING,
            default_decimals: DEFAULT_DECIMALS,
            sold_out_policy: SoldOutPolicy::DeclaredTotal,
            declared_total_supply: None,
            token_symbol: None,
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl EngineConfig {
    /// Configuration reproducing the historical storefront behavior
    ///
    /// Uses the rendered-total sold-out check and no declared total.
    pub fn legacy() -> Self {
        Self {
            sold_out_policy: SoldOutPolicy::RenderedTotal,
            ..Self::default()
        }
    }

    /// Set the advertised total supply and its ticker
    pub fn with_declared_total(mut self, total: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.declared_total_supply = Some(total.into());
        self.token_symbol = Some(symbol.into());
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field holds a usable value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ceiling == 0 {
            return Err(ConfigError::Invalid {
                field: "ceiling",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "refresh_interval_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        if let Some(raw) = &self.declared_total_supply {
            parse_amount(raw).map_err(|e| ConfigError::Invalid {
                field: "declared_total_supply",
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// Parsed declared total; `None` when unset or unparseable
    pub fn declared_total(&self) -> Option<U256> {
        self.declared_total_supply.as_deref().and_then(|raw| parse_amount(raw).ok())
    }

    /// Sold-out check matching the configured policy
    pub fn sold_out_check(&self) -> SoldOutCheck {
        match self.sold_out_policy {
            SoldOutPolicy::DeclaredTotal => SoldOutCheck::DeclaredTotal(self.declared_total()),
            SoldOutPolicy::RenderedTotal => SoldOutCheck::RenderedTotal,
        }
    }

    /// Get refresh interval as Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
