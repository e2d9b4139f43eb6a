//! Raw chain-state records as the provider reports them
//!
//! Numeric fields stay as optional strings here. Parsing and fallbacks are
//! the job of the derivations, so a malformed value never prevents a record
//! from being represented.

/// One tier of a distribution (presale, public, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClaimCondition {
    /// When the tier opens, in seconds since the Unix epoch
    pub start_time: Option<u64>,

    /// Total quantity claimable under this tier
    pub max_claimable_supply: Option<String>,

    /// Quantity claimable by a single wallet
    pub max_claimable_per_wallet: Option<String>,

    /// Quantity still available under this tier
    pub available_supply: Option<String>,

    /// Price of one unit
    pub currency: CurrencyValue,
}

impl ClaimCondition {
    /// Whether the tier has opened at `now`
    ///
    /// A condition without a start time counts as open.
    pub fn has_started(&self, now: u64) -> bool {
        self.start_time.map_or(true, |start| start <= now)
    }
}

/// Unit price and the currency it is denominated in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyValue {
    /// Price in the currency's smallest unit
    pub value: Option<String>,

    /// Decimals of the currency
    pub decimals: Option<u8>,

    /// Currency ticker, e.g. `ETH`
    pub symbol: Option<String>,
}

/// Token supply counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupplyInfo {
    /// Amount claimed so far; non-decreasing over the life of the drop
    pub claimed_value: Option<String>,
}

/// Allowlist entry for a wallet
///
/// An override of `"0"` means unlimited for this wallet, not zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClaimerProof {
    /// Per-wallet override of the claim limit
    pub max_claimable: Option<String>,
}

impl ClaimerProof {
    /// Literal override value meaning "unlimited"
    pub const UNLIMITED: &'static str = "0";

    /// Create a proof with the given override
    pub fn with_override(max_claimable: impl Into<String>) -> Self {
        Self {
            max_claimable: Some(max_claimable.into()),
        }
    }
}

/// Token balance of the connected wallet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenBalance {
    /// Human-readable balance, already scaled by decimals
    pub display_value: String,

    /// Token ticker
    pub symbol: String,
}

/// Descriptive metadata of the drop contract
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractMetadata {
    /// Contract name
    pub name: String,

    /// Optional long-form description
    pub description: Option<String>,
}
