//! Integration tests for the claim state engine

use proptest::prelude::*;
use std::time::Duration;
use tokendrop_domain::{Cap, ClaimStatus, ClaimerProof, QueryState, U256};
use tokendrop_engine::{
    ClaimStateEngine, DryRunExecutor, EngineConfig, EngineError, FixtureProvider, ProviderUpdate, StorefrontWorker,
};

const NOW: u64 = 1_700_000_000;

fn fixed_clock() -> u64 {
    NOW
}

/// Helper to build a fixture with a single open tier
fn tier_fixture(max_supply: &str, per_wallet: &str, available: &str, price: &str, reasons: &str) -> String {
    format!(
        r#"
        wallet = "0x9a3f"

        [supply]
        status = "success"
        data = {{ claimed_value = "0" }}

        [conditions]
        status = "success"
        data = [{{ start_time = 1690000000 }}]

        [active_condition]
        status = "success"

        [active_condition.data]
        start_time = 1690000000
        max_claimable_supply = "{max_supply}"
        max_claimable_per_wallet = "{per_wallet}"
        available_supply = "{available}"
        currency = {{ value = "{price}", decimals = 18, symbol = "ETH" }}

        [claimer_proof]
        status = "success"
        data = {{}}

        [ineligibility]
        status = "success"
        data = [{reasons}]
        "#
    )
}

fn engine_for(fixture: &str) -> ClaimStateEngine {
    let provider = FixtureProvider::from_toml_str(fixture).unwrap();
    let mut engine = ClaimStateEngine::with_clock(EngineConfig::default(), fixed_clock);
    engine.refresh(&provider);
    engine
}

/// Edit the quantity, then fetch reasons for it
fn edit_quantity(engine: &mut ClaimStateEngine, fixture: &str, input: &str) -> u64 {
    let quantity = engine.set_quantity_input(input);
    engine.refresh(&FixtureProvider::from_toml_str(fixture).unwrap());
    quantity
}

#[test]
fn test_per_wallet_cap_applies() {
    let engine = engine_for(&tier_fixture("100", "10", "100", "0", ""));
    assert_eq!(engine.state().max_claimable, Cap::Bounded(U256::from(10u64)));
}

#[test]
fn test_unlimited_override_capped_by_available_supply() {
    let mut engine = engine_for(&tier_fixture("100", "10", "100", "0", ""));
    engine.apply(ProviderUpdate::ClaimerProof(QueryState::Success(Some(
        ClaimerProof::with_override(ClaimerProof::UNLIMITED),
    ))));

    assert_eq!(engine.state().max_claimable, Cap::Bounded(U256::from(100u64)));
}

#[test]
fn test_unlimited_override_with_large_supply_is_unbounded() {
    let mut engine = engine_for(&tier_fixture("100", "10", "5000000", "0", ""));
    engine.apply(ProviderUpdate::ClaimerProof(QueryState::Success(Some(
        ClaimerProof::with_override("0"),
    ))));

    let state = engine.state();
    assert_eq!(state.max_claimable, Cap::Unbounded);
    assert_eq!(state.max_quantity(engine.config().ceiling), 750_000);
    assert_eq!(engine.set_quantity_input("999999999"), 750_000);
}

#[test]
fn test_free_mint_label() {
    let fixture = tier_fixture("100", "10", "100", "0", "");
    let mut engine = engine_for(&fixture);
    for input in ["1", "4", "10"] {
        edit_quantity(&mut engine, &fixture, input);
        assert_eq!(engine.state().button_text, "Mint (Free)");
    }
}

#[test]
fn test_paid_label_formats_total() {
    let fixture = tier_fixture("100", "10", "100", "1000000000000000000", "");
    let mut engine = engine_for(&fixture);
    edit_quantity(&mut engine, &fixture, "3");

    let state = engine.state();
    assert_eq!(state.price_to_mint.as_ref().map(ToString::to_string).as_deref(), Some("3.0 ETH"));
    assert_eq!(state.button_text, "TOTAL COSTS: 3.0 ETH");
    assert_eq!(state.status, ClaimStatus::Ready { free: false });
}

#[test]
fn test_empty_condition_list_hides_grid() {
    let fixture = r#"
        [conditions]
        status = "success"
        data = []

        [active_condition]
        status = "error"
        data = "no active claim phase"
    "#;
    let state = engine_for(fixture).state();

    assert!(state.window.presale_not_started);
    assert!(!state.page.show_claim_grid);
}

#[test]
fn test_future_tier_is_starting_soon() {
    let fixture = r#"
        [conditions]
        status = "success"
        data = [{ start_time = 1800000000 }]

        [active_condition]
        status = "error"
        data = "no active claim phase"
    "#;
    let state = engine_for(fixture).state();

    assert!(state.window.presale_starting_soon);
    assert!(!state.window.presale_not_started);
}

#[test]
fn test_reasons_block_claim_and_explain() {
    let fixture = tier_fixture("100", "10", "100", "0", r#""not-on-allowlist""#);
    let mut engine = engine_for(&fixture);
    edit_quantity(&mut engine, &fixture, "4");

    let state = engine.state();
    assert!(!state.can_claim());
    assert_eq!(state.status, ClaimStatus::Ineligible);
    assert_eq!(state.button_text, "You are not eligible to mint 4 tokens.");
}

#[test]
fn test_sold_out_blanks_button() {
    let state = engine_for(&tier_fixture("100", "10", "0", "1000", "")).state();

    assert!(state.is_sold_out());
    assert_eq!(state.status, ClaimStatus::SoldOut);
    assert!(state.button_text.is_empty());
}

#[test]
fn test_negative_supply_caps_quantity_at_zero() {
    let mut engine = engine_for(&tier_fixture("1000000000", "1000000000", "-5", "0", ""));

    let state = engine.state();
    assert!(state.is_sold_out());
    assert_eq!(state.max_claimable, Cap::Bounded(U256::zero()));
    assert_eq!(engine.set_quantity_input("500000"), 0);
}

#[test]
fn test_declared_total_marks_sold_out() {
    let fixture = tier_fixture("100", "10", "100", "0", "").replace(
        r#"data = { claimed_value = "0" }"#,
        r#"data = { claimed_value = "1000" }"#,
    );
    let provider = FixtureProvider::from_toml_str(&fixture).unwrap();

    let mut declared = ClaimStateEngine::with_clock(
        EngineConfig::default().with_declared_total("1000", "TKN"),
        fixed_clock,
    );
    declared.refresh(&provider);
    assert!(declared.state().is_sold_out());

    let mut legacy = ClaimStateEngine::with_clock(EngineConfig::legacy(), fixed_clock);
    legacy.refresh(&provider);
    assert!(!legacy.state().is_sold_out());
}

#[test]
fn test_submit_claim_passes_clamped_quantity() {
    let fixture = tier_fixture("100", "10", "100", "0", "");
    let mut engine = engine_for(&fixture);
    assert_eq!(edit_quantity(&mut engine, &fixture, "25"), 10);

    let mut executor = DryRunExecutor::new();
    let receipt = engine.submit_claim(&mut executor).unwrap();

    assert_eq!(receipt.quantity, 10);
    assert_eq!(executor.submitted(), &[10]);
    assert_eq!(engine.metrics().claims_submitted, 1);
}

#[test]
fn test_submit_claim_refused_when_ineligible() {
    let mut engine = engine_for(&tier_fixture("100", "10", "100", "0", r#""not-enough-tokens""#));
    let mut executor = DryRunExecutor::new();

    let err = engine.submit_claim(&mut executor).unwrap_err();
    assert!(matches!(err, EngineError::NotClaimable(_)));
    assert!(executor.submitted().is_empty());
    assert_eq!(engine.metrics().claims_rejected, 1);
}

#[test]
fn test_edited_quantity_not_claimable_until_reasons_arrive() {
    let mut engine = engine_for(&tier_fixture("100", "10", "100", "0", ""));
    engine.set_quantity_input("6");

    let state = engine.state();
    assert!(!state.can_claim());
    assert_eq!(state.status, ClaimStatus::Loading);
    assert!(state.button_text.is_empty());

    let mut executor = DryRunExecutor::new();
    assert!(matches!(engine.submit_claim(&mut executor), Err(EngineError::NotClaimable(_))));
    assert!(executor.submitted().is_empty());
}

#[test]
fn test_executor_failure_is_reported() {
    let mut engine = engine_for(&tier_fixture("100", "10", "100", "0", ""));
    let mut executor = DryRunExecutor::failing("user rejected transaction");

    let err = engine.submit_claim(&mut executor).unwrap_err();
    assert!(matches!(err, EngineError::Executor(_)));
    assert_eq!(engine.metrics().claims_failed, 1);
}

#[tokio::test]
async fn test_worker_picks_up_fixture_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chain.toml");
    std::fs::write(&path, tier_fixture("100", "10", "100", "0", "")).unwrap();

    let engine = ClaimStateEngine::with_clock(EngineConfig::default(), fixed_clock);
    let mut worker = StorefrontWorker::from_engine(engine).with_interval(Duration::from_millis(5));

    let provider = FixtureProvider::from_file(&path).unwrap();
    worker.run_cycles(provider.clone(), 1).await.unwrap();
    assert!(worker.engine().state().can_claim());

    std::fs::write(&path, tier_fixture("100", "10", "0", "0", "")).unwrap();
    worker.run_cycles(provider, 1).await.unwrap();
    assert!(worker.engine().state().is_sold_out());
    assert_eq!(worker.metrics().refresh_count, 2);
}

proptest! {
    #[test]
    fn prop_quantity_stays_within_cap(
        per_wallet in 1u64..2_000_000,
        available in 1u64..2_000_000,
        inputs in prop::collection::vec(any::<i64>(), 1..8),
    ) {
        let mut engine = engine_for(&tier_fixture(
            "1000000000",
            &per_wallet.to_string(),
            &available.to_string(),
            "0",
            "",
        ));
        let ceiling = engine.config().ceiling;

        for input in inputs {
            let quantity = engine.set_quantity_input(&input.to_string());
            let limit = engine.state().max_quantity(ceiling);

            prop_assert!(limit <= ceiling);
            prop_assert!(quantity >= 1);
            prop_assert!(quantity <= limit);
            prop_assert_eq!(quantity, engine.state().quantity);
        }
    }

    #[test]
    fn prop_quantity_reclamped_on_cap_change(
        first in 1u64..500,
        second in 1u64..500,
        requested in 1u64..500,
    ) {
        let mut engine = engine_for(&tier_fixture("1000", &first.to_string(), "1000", "0", ""));
        engine.set_quantity(requested);

        let provider = FixtureProvider::from_toml_str(
            &tier_fixture("1000", &second.to_string(), "1000", "0", ""),
        ).unwrap();
        engine.refresh(&provider);

        prop_assert!(engine.quantity() >= 1);
        prop_assert!(engine.quantity() <= second);
    }
}
