//! Unit tests for bucket vocabularies, defaults and the two mapping kinds.

use std::fmt::Debug;

use super::*;
use crate::survey::RawAnswer;

// -------------------------------------------------------------------------
// Vocabulary helpers
// -------------------------------------------------------------------------

fn assert_vocabulary<B: Bucket + Debug + PartialEq>() {
    let mut seen: Vec<B> = Vec::new();
    for label in B::LABELS {
        let bucket = B::from_label(label)
            .unwrap_or_else(|| panic!("{}: label {label:?} does not parse", B::FIELD));
        assert!(
            !seen.contains(&bucket),
            "{}: label {label:?} maps to an already used variant",
            B::FIELD
        );
        seen.push(bucket);
    }
    assert_eq!(B::from_label("definitely_not_a_label"), None);
}

fn assert_multipliers_in_range<B: MultiplierBucket + Debug>() {
    for label in B::LABELS {
        let m = B::from_label(label).map(|b| b.multiplier());
        let m = m.unwrap_or_else(|| panic!("{}: {label:?} does not parse", B::FIELD));
        assert!(m.is_in_range(), "{}: {label:?} -> {m:?}", B::FIELD);
    }
}

fn assert_quantities_non_negative<B: QuantityBucket + Debug>() {
    for label in B::LABELS {
        let q = B::from_label(label).map(|b| b.quantity()).unwrap_or(-1.0);
        assert!(q >= 0.0 && q.is_finite(), "{}: {label:?} -> {q}", B::FIELD);
    }
}

#[test]
fn test_multiplier_vocabularies() {
    assert_vocabulary::<PlantBasedFrequency>();
    assert_vocabulary::<SnackFrequency>();
    assert_vocabulary::<FoodWasteHabit>();
    assert_vocabulary::<FlightClass>();
    assert_vocabulary::<SustainableShopping>();
    assert_vocabulary::<ClothingRecycling>();
    assert_vocabulary::<HousingType>();
    assert_vocabulary::<CoolingMethod>();
    assert_vocabulary::<BuyRefurbished>();
    assert_vocabulary::<RecyclingHabit>();

    assert_multipliers_in_range::<PlantBasedFrequency>();
    assert_multipliers_in_range::<SnackFrequency>();
    assert_multipliers_in_range::<FoodWasteHabit>();
    assert_multipliers_in_range::<FlightClass>();
    assert_multipliers_in_range::<SustainableShopping>();
    assert_multipliers_in_range::<ClothingRecycling>();
    assert_multipliers_in_range::<HousingType>();
    assert_multipliers_in_range::<CoolingMethod>();
    assert_multipliers_in_range::<BuyRefurbished>();
    assert_multipliers_in_range::<RecyclingHabit>();
}

#[test]
fn test_quantity_vocabularies() {
    assert_vocabulary::<CommuteDuration>();
    assert_vocabulary::<RideHailFrequency>();
    assert_vocabulary::<CarpoolFrequency>();
    assert_vocabulary::<ShortHaulFlights>();
    assert_vocabulary::<LongHaulFlights>();
    assert_vocabulary::<HotelNights>();
    assert_vocabulary::<ClothingPurchases>();
    assert_vocabulary::<OnlineShopping>();
    assert_vocabulary::<AirconHours>();
    assert_vocabulary::<EntertainmentOutings>();
    assert_vocabulary::<StreamingHours>();
    assert_vocabulary::<PhoneUpgrade>();
    assert_vocabulary::<LaptopUpgrade>();
    assert_vocabulary::<ScreenTime>();
    assert_vocabulary::<TakeawayMeals>();
    assert_vocabulary::<PlasticBags>();
    assert_vocabulary::<TrashBags>();
    assert_vocabulary::<ReusableBagUsage>();
    assert_vocabulary::<ReusableContainerUsage>();

    assert_quantities_non_negative::<CommuteDuration>();
    assert_quantities_non_negative::<RideHailFrequency>();
    assert_quantities_non_negative::<CarpoolFrequency>();
    assert_quantities_non_negative::<ShortHaulFlights>();
    assert_quantities_non_negative::<LongHaulFlights>();
    assert_quantities_non_negative::<HotelNights>();
    assert_quantities_non_negative::<ClothingPurchases>();
    assert_quantities_non_negative::<OnlineShopping>();
    assert_quantities_non_negative::<AirconHours>();
    assert_quantities_non_negative::<EntertainmentOutings>();
    assert_quantities_non_negative::<StreamingHours>();
    assert_quantities_non_negative::<PhoneUpgrade>();
    assert_quantities_non_negative::<LaptopUpgrade>();
    assert_quantities_non_negative::<ScreenTime>();
    assert_quantities_non_negative::<TakeawayMeals>();
    assert_quantities_non_negative::<PlasticBags>();
    assert_quantities_non_negative::<TrashBags>();
    assert_quantities_non_negative::<ReusableBagUsage>();
    assert_quantities_non_negative::<ReusableContainerUsage>();
}

#[test]
fn test_selector_vocabularies() {
    assert_vocabulary::<TransitMode>();
    assert_vocabulary::<CarType>();
    assert_vocabulary::<PetOwnership>();
}

#[test]
fn test_default_label_is_in_vocabulary() {
    // Every documented default must itself be reachable from a label.
    fn check<B: Bucket + Debug + PartialEq>() {
        let default = B::default();
        assert!(
            B::LABELS.iter().any(|l| B::from_label(l) == Some(default)),
            "{}: default {default:?} has no label",
            B::FIELD
        );
    }
    check::<PlantBasedFrequency>();
    check::<CommuteDuration>();
    check::<CarType>();
    check::<HousingType>();
    check::<ReusableContainerUsage>();
    check::<PetOwnership>();
}

// -------------------------------------------------------------------------
// Normalization
// -------------------------------------------------------------------------

#[test]
fn test_plant_based_multipliers() {
    let m = |label: &str| normalize_multiplier::<PlantBasedFrequency>(&label.into()).value();
    assert!((m("never") - 1.0).abs() < f64::EPSILON);
    assert!((m("once_week") - 0.9).abs() < f64::EPSILON);
    assert!((m("2_3_times") - 0.8).abs() < f64::EPSILON);
    assert!((m("almost_daily") - 0.6).abs() < f64::EPSILON);
}

#[test]
fn test_same_label_means_different_things_per_field() {
    // "1_2_times" is 1.5 rides/week for grab and 1.5 parcels/month for
    // shopping, but "more_than_5" differs between outings and takeaway.
    let outings = normalize_quantity::<EntertainmentOutings>(&"more_than_5".into());
    let takeaway = normalize_quantity::<TakeawayMeals>(&"more_than_5".into());
    assert!((outings - 6.0).abs() < f64::EPSILON);
    assert!((takeaway - 7.0).abs() < f64::EPSILON);

    let short_haul = normalize_quantity::<ShortHaulFlights>(&"none".into());
    let long_haul = normalize_quantity::<LongHaulFlights>(&"1".into());
    assert_eq!(short_haul, 0.0);
    assert!((long_haul - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_label_uses_field_default() {
    let snacks = normalize_multiplier::<SnackFrequency>(&"constantly".into());
    assert_eq!(snacks, SnackFrequency::Occasionally.multiplier());

    let commute = normalize_quantity::<CommuteDuration>(&"forever".into());
    assert!((commute - 37.5).abs() < f64::EPSILON);

    assert_eq!(CarType::normalize(&"spaceship".into()), CarType::None);
    assert_eq!(HousingType::normalize(&"castle".into()), HousingType::Hdb4To5);
}

#[test]
fn test_missing_and_non_string_answers_use_default() {
    assert_eq!(FoodWasteHabit::normalize(&RawAnswer::Missing), FoodWasteHabit::UsuallyFinish);
    assert_eq!(FoodWasteHabit::normalize(&RawAnswer::from(3.0)), FoodWasteHabit::UsuallyFinish);
    assert_eq!(TransitMode::normalize(&RawAnswer::from(true)), TransitMode::Mixed);
}

#[test]
fn test_labels_are_trimmed_but_case_sensitive() {
    assert_eq!(CarType::normalize(&" petrol ".into()), CarType::Petrol);
    assert_eq!(CarType::normalize(&"PETROL".into()), CarType::None);
}

#[test]
fn test_count_and_flag_entry_points() {
    assert_eq!(normalize_count(&"4".into()), 4.0);
    assert_eq!(normalize_count(&"four".into()), 0.0);
    assert!(normalize_flag(&"yes".into()));
    assert!(!normalize_flag(&RawAnswer::Missing));
}

#[test]
fn test_multiplier_apply_and_identity() {
    assert!((Multiplier::new(0.85).apply(100.0) - 85.0).abs() < 1e-9);
    assert_eq!(Multiplier::IDENTITY.apply(42.0), 42.0);
    assert!(!Multiplier::new(0.0).is_in_range());
    assert!(!Multiplier::new(2.5).is_in_range());
    assert!(Multiplier::new(2.0).is_in_range());
}
