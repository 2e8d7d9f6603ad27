//! Integration tests for the footprint engine using the `TestSurvey` harness.
//!
//! These run the engine inside a headless Bevy app with `FootprintPlugin`
//! and check end-to-end results against hand-computed figures.

mod override_tests;

use crate::category::Category;
use crate::test_harness::TestSurvey;
use serde_json::json;

#[test]
fn test_harness_starts_with_default_table() {
    let survey = TestSurvey::new();
    assert_eq!(survey.table().version, 1);
    assert_eq!(survey.ledger().requests_scored, 0);
}

#[test]
fn test_every_request_gets_one_result() {
    let mut survey = TestSurvey::new();
    let a = survey.submit(Default::default());
    let b = survey.submit(Default::default());
    let c = survey.submit(Default::default());
    let results = survey.run();

    let mut ids: Vec<_> = results.iter().map(|r| r.request_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![a, b, c]);
    assert_eq!(survey.ledger().requests_scored, 3);
}

#[test]
fn test_results_do_not_leak_between_updates() {
    let mut survey = TestSurvey::new();
    survey.submit(Default::default());
    assert_eq!(survey.run().len(), 1);
    assert!(survey.run().is_empty());
}

#[test]
fn test_breakdown_keys_follow_request_blocks() {
    let mut survey = TestSurvey::new();
    let result = survey.calculate_json(json!({
        "home": {},
        "travel": {},
        "waste": {}
    }));
    let keys: Vec<_> = result.breakdown.keys().copied().collect();
    assert_eq!(keys, vec![Category::Travel, Category::Home, Category::Waste]);
}
