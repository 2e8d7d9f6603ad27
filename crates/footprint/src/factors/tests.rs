//! Unit tests for the factor table defaults, lookup and override loading.

use super::*;
use crate::category::Category;

// -------------------------------------------------------------------------
// Constants
// -------------------------------------------------------------------------

#[test]
fn test_meat_meal_constant() {
    assert!((MEAT_MEAL_KG - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_conversion_constants() {
    assert!((KG_TO_TONNES - 0.001).abs() < f64::EPSILON);
    assert!((DAYS_PER_YEAR - 365.0).abs() < f64::EPSILON);
    assert!((WEEKS_PER_YEAR - 52.0).abs() < f64::EPSILON);
    assert!((MONTHS_PER_YEAR - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_energy_saving_multiplier_constant() {
    assert!((ENERGY_SAVING_MULTIPLIER - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_reference_averages_are_positive() {
    assert!(SINGAPORE_AVERAGE_TONNES > 0.0);
    assert!(GLOBAL_AVERAGE_TONNES > 0.0);
    assert!(SUSTAINABLE_TARGET_TONNES < GLOBAL_AVERAGE_TONNES);
}

// -------------------------------------------------------------------------
// Lookup
// -------------------------------------------------------------------------

#[test]
fn test_lookup_matches_typed_fields() {
    let table = FactorTable::default();
    assert_eq!(
        table.lookup(Category::Diet, "meat_meal_kg"),
        Some(table.diet.meat_meal_kg)
    );
    assert_eq!(
        table.lookup(Category::Transport, "average_speed_kmh"),
        Some(25.0)
    );
    assert_eq!(
        table.lookup(Category::Home, "energy_saving_multiplier"),
        Some(0.85)
    );
    assert_eq!(
        table.lookup(Category::Offsetting, "tree_kg_per_year"),
        Some(TREE_KG_PER_YEAR)
    );
}

#[test]
fn test_lookup_unknown_key_is_none() {
    let table = FactorTable::default();
    assert_eq!(table.lookup(Category::Transport, "hovercraft_kg_per_km"), None);
    // Right key, wrong domain.
    assert_eq!(table.lookup(Category::Waste, "meat_meal_kg"), None);
}

#[test]
fn test_every_entry_is_reachable_by_lookup() {
    let table = FactorTable::default();
    for entry in table.entries() {
        assert_eq!(
            table.lookup(entry.domain, entry.key),
            Some(entry.value),
            "{}.{} not reachable",
            entry.domain,
            entry.key
        );
    }
}

#[test]
fn test_entry_keys_are_unique_per_domain() {
    let entries = FactorTable::default().entries();
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            assert!(
                !(a.domain == b.domain && a.key == b.key),
                "duplicate key {}.{}",
                a.domain,
                a.key
            );
        }
    }
}

#[test]
fn test_every_scored_category_has_factors() {
    let entries = FactorTable::default().entries();
    for category in Category::ALL {
        assert!(
            entries.iter().any(|e| e.domain == category),
            "no factors for {category}"
        );
    }
}

// -------------------------------------------------------------------------
// Overrides
// -------------------------------------------------------------------------

#[test]
fn test_partial_override_keeps_defaults() {
    let table =
        FactorTable::from_json_str(r#"{"diet":{"meat_meal_kg":3.0}}"#).expect("valid override");
    assert!((table.diet.meat_meal_kg - 3.0).abs() < f64::EPSILON);
    assert!((table.diet.hawker_visit_kg - HAWKER_VISIT_KG).abs() < f64::EPSILON);
    assert_eq!(table.transport, TransportFactors::default());
    assert_eq!(table.version, FACTOR_TABLE_VERSION);
}

#[test]
fn test_empty_override_equals_default() {
    let table = FactorTable::from_json_str("{}").expect("empty override");
    assert_eq!(table, FactorTable::default());
}

#[test]
fn test_negative_factor_rejected() {
    let err = FactorTable::from_json_str(r#"{"travel":{"hotel_night_kg":-1.0}}"#).unwrap_err();
    assert!(matches!(err, FactorTableError::Invalid(_)));
    assert!(format!("{err}").contains("hotel_night_kg"), "got: {err}");
}

#[test]
fn test_zero_reference_average_rejected() {
    let err = FactorTable::from_json_str(r#"{"references":{"singapore_average_tonnes":0.0}}"#)
        .unwrap_err();
    assert!(format!("{err}").contains("singapore_average_tonnes"), "got: {err}");
}

#[test]
fn test_changed_conversion_rejected() {
    let err = FactorTable::from_json_str(
        r#"{"conversions":{"kg_to_tonnes":0.5,"days_per_year":1.0}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, FactorTableError::Invalid(_)));
    assert!(format!("{err}").contains("conversions.kg_to_tonnes"), "got: {err}");
}

#[test]
fn test_each_conversion_is_pinned() {
    for json in [
        r#"{"conversions":{"days_per_year":360.0}}"#,
        r#"{"conversions":{"weeks_per_year":50.0}}"#,
        r#"{"conversions":{"months_per_year":13.0}}"#,
    ] {
        let err = FactorTable::from_json_str(json).unwrap_err();
        assert!(format!("{err}").contains("fixed"), "{json}: {err}");
    }
}

#[test]
fn test_restating_pinned_values_is_accepted() {
    let table = FactorTable::from_json_str(
        r#"{
            "conversions": {"kg_to_tonnes": 0.001, "days_per_year": 365.0,
                            "weeks_per_year": 52.0, "months_per_year": 12.0},
            "transport": {"baseline_weekly_car_km": 50.0, "car_km_saved_per_transit_day": 10.0}
        }"#,
    )
    .expect("unchanged pinned values");
    assert_eq!(table, FactorTable::default());
}

#[test]
fn test_car_km_heuristic_is_pinned() {
    let err = FactorTable::from_json_str(r#"{"transport":{"baseline_weekly_car_km":80.0}}"#)
        .unwrap_err();
    assert!(
        format!("{err}").contains("transport.baseline_weekly_car_km"),
        "got: {err}"
    );
    let err = FactorTable::from_json_str(
        r#"{"transport":{"car_km_saved_per_transit_day":5.0}}"#,
    )
    .unwrap_err();
    assert!(
        format!("{err}").contains("transport.car_km_saved_per_transit_day"),
        "got: {err}"
    );
}

#[test]
fn test_oversized_factor_rejected() {
    let err = FactorTable::from_json_str(r#"{"diet":{"meat_meal_kg":1e300}}"#).unwrap_err();
    assert!(matches!(err, FactorTableError::Invalid(_)));
    assert!(format!("{err}").contains("meat_meal_kg"), "got: {err}");
    let at_bound = format!(r#"{{"travel":{{"long_haul_flight_kg":{MAX_FACTOR_VALUE}}}}}"#);
    assert!(FactorTable::from_json_str(&at_bound).is_ok());
}

#[test]
fn test_default_table_is_valid() {
    assert!(FactorTable::default().validate().is_ok());
}

#[test]
fn test_malformed_override_is_parse_error() {
    let err = FactorTable::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, FactorTableError::Parse(_)));
}

#[test]
fn test_missing_override_file_is_io_error() {
    let err = FactorTable::load(std::path::Path::new("/nonexistent/factors.json")).unwrap_err();
    assert!(matches!(err, FactorTableError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_table_serializes_verbatim() {
    let table = FactorTable::default();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["diet"]["meat_meal_kg"], 2.5);
    assert_eq!(json["references"]["singapore_average_tonnes"], SINGAPORE_AVERAGE_TONNES);
    let back: FactorTable = serde_json::from_value(json).unwrap();
    assert_eq!(back, table);
}
