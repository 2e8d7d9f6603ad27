//! Engine behaviour under a factor-table override loaded at startup.

use serde_json::json;

use crate::category::Category;
use crate::engine::calculate;
use crate::factors::FactorTable;
use crate::survey::SurveyAnswers;
use crate::test_harness::TestSurvey;

#[test]
fn test_override_changes_scores() {
    let table = FactorTable::from_json_str(r#"{"diet": {"meat_meal_kg": 5.0}}"#).unwrap();
    let mut survey = TestSurvey::with_table(table);
    let result = survey.calculate_json(json!({
        "diet": {"mealsWithMeat": 1, "plantBasedFrequency": "never", "packagedSnacks": "never", "foodWaste": "usually_finish"}
    }));
    assert!((result.breakdown[&Category::Diet] - 1.6425).abs() < 1e-9);
}

#[test]
fn test_override_changes_comparison() {
    let table = FactorTable::from_json_str(
        r#"{"references": {"singapore_average_tonnes": 10.0, "global_average_tonnes": 5.0}}"#,
    )
    .unwrap();
    let mut survey = TestSurvey::with_table(table);
    let result = survey.calculate_json(json!({}));
    assert_eq!(result.comparison.singapore_average, 10.0);
    assert_eq!(result.comparison.global_average, 5.0);
}

#[test]
fn test_plugin_keeps_preinserted_table() {
    let table = FactorTable::from_json_str(r#"{"travel": {"hotel_night_kg": 0.0}}"#).unwrap();
    let survey = TestSurvey::with_table(table);
    assert_eq!(survey.table().travel.hotel_night_kg, 0.0);
}

#[test]
fn test_override_cannot_change_unit_conversions() {
    let err = FactorTable::from_json_str(
        r#"{"conversions": {"kg_to_tonnes": 0.5, "days_per_year": 1.0}}"#,
    )
    .unwrap_err();
    assert!(format!("{err}").contains("kg_to_tonnes"), "got: {err}");

    // A valid override still keeps tonnes × 1000 equal to the kg total.
    let table = FactorTable::from_json_str(r#"{"diet": {"meat_meal_kg": 5.0}}"#).unwrap();
    let answers = SurveyAnswers::from_value(json!({
        "diet": {"mealsWithMeat": 3}, "offsetting": {"treesPlanted": 4}
    }))
    .unwrap();
    let calc = calculate(&answers, &table);
    assert!((calc.result.total_footprint * 1000.0 - calc.aggregate.total_kg).abs() < 1e-6);
}
