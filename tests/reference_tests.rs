//! Data-driven matching tests in the shape of the upstream reference-test
//! fixtures: one JSON document configures the gate, another lists URL cases
//! with their expected verdicts.

use std::sync::Arc;

use serde::Deserialize;

use adclick_gate::config::AttributionConfig;
use adclick_gate::eval::AttributionEvaluator;
use adclick_gate::feature::FeatureFlags;
use adclick_gate::store::AttributionStore;

const REFERENCE_CONFIG: &str = include_str!("data/ad_click_attribution_reference.json");
const MATCHING_TESTS: &str = include_str!("data/ad_click_attribution_matching_tests.json");

#[derive(Debug, Deserialize)]
struct ReferenceTest {
    #[serde(rename = "adClickAllowlist")]
    ad_click_allowlist: AllowlistSuite,
}

#[derive(Debug, Deserialize)]
struct AllowlistSuite {
    name: String,
    tests: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    url: String,
    #[serde(rename = "isAllowed")]
    is_allowed: bool,
}

fn reference_evaluator() -> AttributionEvaluator {
    let config = AttributionConfig::from_json(REFERENCE_CONFIG).expect("reference config parses");
    let store = Arc::new(AttributionStore::new());
    let flags = Arc::new(FeatureFlags::new());
    config.install(&store, &flags);
    AttributionEvaluator::new(store, flags)
}

#[test]
fn reference_cases_return_the_expected_result() {
    let suite: ReferenceTest =
        serde_json::from_str(MATCHING_TESTS).expect("matching tests fixture parses");
    let evaluator = reference_evaluator();

    for case in &suite.ad_click_allowlist.tests {
        assert_eq!(
            evaluator.is_allowed(&case.url),
            case.is_allowed,
            "{} — case: {} ({})",
            suite.ad_click_allowlist.name,
            case.name,
            case.url,
        );
    }
}

#[test]
fn reference_config_arms_detections() {
    let evaluator = reference_evaluator();
    assert!(evaluator.detections_active());
}

#[test]
fn reference_cases_are_idempotent() {
    let suite: ReferenceTest = serde_json::from_str(MATCHING_TESTS).unwrap();
    let evaluator = reference_evaluator();

    for case in &suite.ad_click_allowlist.tests {
        let first = evaluator.is_allowed(&case.url);
        assert_eq!(evaluator.is_allowed(&case.url), first, "case: {}", case.name);
    }
}
