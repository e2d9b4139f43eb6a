//! Chain-state provider backed by a fixture file
//!
//! Fixtures describe every query the storefront reads, either as JSON or as
//! TOML. Each query carries a `status` (`idle`, `loading`, `success`,
//! `error`) and, when resolved, its `data`:
//!
//! ```toml
//! contract_ready = true
//! wallet = "0x9a3f"
//!
//! [active_condition]
//! status = "success"
//!
//! [active_condition.data]
//! start_time = 1700000000
//! max_claimable_per_wallet = "10"
//! available_supply = "1200"
//! currency = { value = "10000000000000000", decimals = 18, symbol = "ETH" }
//!
//! [ineligibility]
//! status = "success"
//! data = ["not-on-allowlist"]
//! ```
//!
//! Numeric fields accept strings or integers. Unknown ineligibility codes
//! map to the `unknown` reason.

use crate::inputs::ChainSnapshot;
use crate::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokendrop_domain::traits::ChainStateProvider;
use tokendrop_domain::{
    ClaimCondition, ClaimerProof, ContractMetadata, CurrencyValue, IneligibilityReason, QueryState, SupplyInfo,
    TokenBalance,
};

/// Query state as written in a fixture
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
enum FixtureQuery<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FixtureQuery<T> {
    fn default() -> Self {
        FixtureQuery::Idle
    }
}

impl<T> FixtureQuery<T> {
    fn into_query<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        let state = match self {
            FixtureQuery::Idle => QueryState::Idle,
            FixtureQuery::Loading => QueryState::Loading,
            FixtureQuery::Success(value) => QueryState::Success(value),
            FixtureQuery::Error(message) => QueryState::Error(message),
        };
        state.map(f)
    }
}

/// Numeric field written either as text or as an integer
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawAmount> for String {
    fn from(raw: RawAmount) -> Self {
        match raw {
            RawAmount::Text(text) => text,
            RawAmount::Unsigned(n) => n.to_string(),
            RawAmount::Signed(n) => n.to_string(),
        }
    }
}

fn text(raw: Option<RawAmount>) -> Option<String> {
    raw.map(String::from)
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FixtureCurrency {
    value: Option<RawAmount>,
    decimals: Option<u8>,
    symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct FixtureCondition {
    start_time: Option<u64>,
    max_claimable_supply: Option<RawAmount>,
    max_claimable_per_wallet: Option<RawAmount>,
    available_supply: Option<RawAmount>,
    #[serde(default)]
    currency: FixtureCurrency,
}

impl From<FixtureCondition> for ClaimCondition {
    fn from(c: FixtureCondition) -> Self {
        ClaimCondition {
            start_time: c.start_time,
            max_claimable_supply: text(c.max_claimable_supply),
            max_claimable_per_wallet: text(c.max_claimable_per_wallet),
            available_supply: text(c.available_supply),
            currency: CurrencyValue {
                value: text(c.currency.value),
                decimals: c.currency.decimals,
                symbol: c.currency.symbol,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FixtureSupply {
    claimed_value: Option<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
struct FixtureBalance {
    display_value: String,
    symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FixtureMetadata {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct FixtureProof {
    max_claimable: Option<RawAmount>,
}

/// Top-level fixture document
#[derive(Debug, Clone, Deserialize)]
struct ChainFixture {
    #[serde(default = "default_contract_ready")]
    contract_ready: bool,
    #[serde(default)]
    wallet: Option<String>,
    #[serde(default)]
    metadata: FixtureQuery<FixtureMetadata>,
    #[serde(default)]
    supply: FixtureQuery<FixtureSupply>,
    #[serde(default)]
    balance: FixtureQuery<FixtureBalance>,
    #[serde(default)]
    conditions: FixtureQuery<Vec<FixtureCondition>>,
    #[serde(default)]
    active_condition: FixtureQuery<FixtureCondition>,
    #[serde(default)]
    claimer_proof: FixtureQuery<Option<FixtureProof>>,
    #[serde(default)]
    ineligibility: FixtureQuery<Vec<String>>,
}

fn default_contract_ready() -> bool {
    true
}

impl From<ChainFixture> for ChainSnapshot {
    fn from(f: ChainFixture) -> Self {
        ChainSnapshot {
            contract_ready: f.contract_ready,
            wallet: f.wallet,
            metadata: f.metadata.into_query(|m| ContractMetadata {
                name: m.name,
                description: m.description,
            }),
            supply: f.supply.into_query(|s| SupplyInfo {
                claimed_value: text(s.claimed_value),
            }),
            balance: f.balance.into_query(|b| TokenBalance {
                display_value: b.display_value,
                symbol: b.symbol,
            }),
            conditions: f
                .conditions
                .into_query(|list| list.into_iter().map(ClaimCondition::from).collect()),
            active_condition: f.active_condition.into_query(ClaimCondition::from),
            claimer_proof: f.claimer_proof.into_query(|proof| {
                proof.map(|p| ClaimerProof {
                    max_claimable: text(p.max_claimable),
                })
            }),
            ineligibility: f.ineligibility.into_query(|codes| {
                codes.iter().map(|code| IneligibilityReason::from_code_lossy(code)).collect()
            }),
        }
    }
}

/// Provider serving a fixed chain state loaded from a fixture
///
/// When loaded from a file, [`ChainStateProvider::poll`] re-reads it so the
/// fixture can be edited while a worker is running.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    snapshot: ChainSnapshot,
    path: Option<PathBuf>,
}

impl FixtureProvider {
    /// Serve `snapshot` as-is
    pub fn new(snapshot: ChainSnapshot) -> Self {
        Self { snapshot, path: None }
    }

    /// Load a fixture file; `.json` files are read as JSON, anything else as TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let snapshot = load(path)?;
        tracing::debug!(path = %path.display(), "Loaded chain fixture");

        Ok(Self {
            snapshot,
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse a JSON fixture
    pub fn from_json_str(contents: &str) -> Result<Self, EngineError> {
        Ok(Self::new(parse_json(contents)?))
    }

    /// Parse a TOML fixture
    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        Ok(Self::new(parse_toml(contents)?))
    }

    /// Snapshot currently served
    pub fn snapshot(&self) -> &ChainSnapshot {
        &self.snapshot
    }

    /// File the fixture was loaded from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn load(path: &Path) -> Result<ChainSnapshot, EngineError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| EngineError::Fixture(format!("{}: {}", path.display(), e)))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&contents)
    } else {
        parse_toml(&contents)
    }
}

fn parse_json(contents: &str) -> Result<ChainSnapshot, EngineError> {
    serde_json::from_str::<ChainFixture>(contents)
        .map(ChainSnapshot::from)
        .map_err(|e| EngineError::Fixture(format!("Invalid JSON fixture: {}", e)))
}

fn parse_toml(contents: &str) -> Result<ChainSnapshot, EngineError> {
    toml::from_str::<ChainFixture>(contents)
        .map(ChainSnapshot::from)
        .map_err(|e| EngineError::Fixture(format!("Invalid TOML fixture: {}", e)))
}

impl ChainStateProvider for FixtureProvider {
    type Error = EngineError;

    fn poll(&mut self) -> Result<(), Self::Error> {
        if let Some(path) = &self.path {
            self.snapshot = load(path)?;
        }
        Ok(())
    }

    fn contract_ready(&self) -> bool {
        self.snapshot.contract_ready
    }

    fn wallet(&self) -> Option<String> {
        self.snapshot.wallet.clone()
    }

    fn contract_metadata(&self) -> QueryState<ContractMetadata> {
        self.snapshot.metadata.clone()
    }

    fn token_supply(&self) -> QueryState<SupplyInfo> {
        self.snapshot.supply.clone()
    }

    fn token_balance(&self, _wallet: &str) -> QueryState<TokenBalance> {
        self.snapshot.balance.clone()
    }

    fn claim_conditions(&self) -> QueryState<Vec<ClaimCondition>> {
        self.snapshot.conditions.clone()
    }

    fn active_claim_condition(&self, _wallet: Option<&str>) -> QueryState<ClaimCondition> {
        self.snapshot.active_condition.clone()
    }

    fn claimer_proof(&self, _wallet: &str) -> QueryState<Option<ClaimerProof>> {
        self.snapshot.claimer_proof.clone()
    }

    fn ineligibility_reasons(&self, _quantity: u64, _wallet: Option<&str>) -> QueryState<Vec<IneligibilityReason>> {
        self.snapshot.ineligibility.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_FIXTURE: &str = r#"
        wallet = "0x9a3f"

        [metadata]
        status = "success"
        data = { name = "Founders Drop" }

        [supply]
        status = "success"
        data = { claimed_value = 300 }

        [active_condition]
        status = "success"

        [active_condition.data]
        start_time = 1700000000
        max_claimable_supply = "1500"
        max_claimable_per_wallet = 10
        available_supply = "1200"
        currency = { value = "10000000000000000", decimals = 18, symbol = "ETH" }

        [claimer_proof]
        status = "loading"

        [ineligibility]
        status = "success"
        data = ["not-on-allowlist", "mystery-code"]
    "#;

    #[test]
    fn test_toml_fixture() {
        let provider = FixtureProvider::from_toml_str(TOML_FIXTURE).unwrap();
        let snapshot = provider.snapshot();

        assert!(snapshot.contract_ready);
        assert_eq!(snapshot.wallet.as_deref(), Some("0x9a3f"));
        assert_eq!(snapshot.metadata.data().map(|m| m.name.as_str()), Some("Founders Drop"));
        assert_eq!(
            snapshot.supply.data().and_then(|s| s.claimed_value.as_deref()),
            Some("300")
        );

        let active = snapshot.active_condition.data().unwrap();
        assert_eq!(active.max_claimable_per_wallet.as_deref(), Some("10"));
        assert_eq!(active.currency.symbol.as_deref(), Some("ETH"));

        assert_eq!(snapshot.claimer_proof, QueryState::Loading);
        assert_eq!(snapshot.conditions, QueryState::Idle);
        assert_eq!(
            snapshot.reasons(),
            &[IneligibilityReason::AddressNotAllowed, IneligibilityReason::Unknown]
        );
    }

    #[test]
    fn test_json_fixture() {
        let provider = FixtureProvider::from_json_str(
            r#"{
                "contract_ready": false,
                "active_condition": { "status": "error", "data": "no active phase" },
                "claimer_proof": { "status": "success", "data": null },
                "supply": { "status": "success", "data": { "claimed_value": -4 } }
            }"#,
        )
        .unwrap();
        let snapshot = provider.snapshot();

        assert!(!snapshot.contract_ready);
        assert_eq!(snapshot.active_condition, QueryState::Error("no active phase".to_string()));
        assert_eq!(snapshot.claimer_proof, QueryState::Success(None));
        assert_eq!(
            snapshot.supply.data().and_then(|s| s.claimed_value.as_deref()),
            Some("-4")
        );
    }

    #[test]
    fn test_invalid_fixture() {
        let err = FixtureProvider::from_toml_str("[active_condition]\nstatus = \"pending\"").unwrap_err();
        assert!(matches!(err, EngineError::Fixture(_)));

        let err = FixtureProvider::from_json_str("{").unwrap_err();
        assert!(err.to_string().contains("Invalid JSON fixture"));
    }

    #[test]
    fn test_poll_rereads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.toml");
        std::fs::write(&path, "contract_ready = false\n").unwrap();

        let mut provider = FixtureProvider::from_file(&path).unwrap();
        assert!(!provider.contract_ready());
        assert_eq!(provider.path(), Some(path.as_path()));

        std::fs::write(&path, "contract_ready = true\n").unwrap();
        provider.poll().unwrap();
        assert!(provider.contract_ready());

        std::fs::remove_file(&path).unwrap();
        assert!(provider.poll().is_err());
    }

    #[test]
    fn test_json_extension_detected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.JSON");
        std::fs::write(&path, r#"{ "wallet": "0x1" }"#).unwrap();

        let provider = FixtureProvider::from_file(&path).unwrap();
        assert_eq!(provider.wallet().as_deref(), Some("0x1"));
    }
}
