//! Diet: daily meat meals, adjusted for eating habits, plus weekly eating out.
//!
//! `meals × meat_meal_kg × 365 × plant × snacks × waste
//!  + (hawker × hawker_kg + tea × tea_kg + delivery × delivery_kg) × 52`

use crate::factors::FactorTable;
use crate::normalize::{
    normalize_count, normalize_multiplier, FoodWasteHabit, PlantBasedFrequency, SnackFrequency,
};
use crate::survey::DietAnswers;

use super::subtotal::{annualized, Subtotal};

pub fn diet_subtotal(answers: &DietAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.diet;
    let c = &table.conversions;

    let meat_meals = normalize_count(&answers.meals_with_meat);
    let weekly_eating_out_kg = normalize_count(&answers.hawker_visits) * f.hawker_visit_kg
        + normalize_count(&answers.bubble_tea_cups) * f.bubble_tea_cup_kg
        + normalize_count(&answers.food_delivery) * f.food_delivery_kg;

    Subtotal::new(annualized(meat_meals, f.meat_meal_kg, c.days_per_year))
        .scale(
            "plant_based_frequency",
            normalize_multiplier::<PlantBasedFrequency>(&answers.plant_based_frequency),
        )
        .scale(
            "packaged_snacks",
            normalize_multiplier::<SnackFrequency>(&answers.packaged_snacks),
        )
        .scale(
            "food_waste",
            normalize_multiplier::<FoodWasteHabit>(&answers.food_waste),
        )
        .add(
            "eating_out",
            annualized(weekly_eating_out_kg, 1.0, c.weeks_per_year),
        )
}
