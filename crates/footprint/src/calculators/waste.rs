//! Waste: weekly takeaway packaging, plastic bags and trash, less reuse savings.
//!
//! The reuse savings are reductions, so a diligent reuser with little waste
//! can drive the raw value negative; the category is floored at zero.

use crate::factors::FactorTable;
use crate::normalize::{
    normalize_multiplier, normalize_quantity, PlasticBags, RecyclingHabit,
    ReusableBagUsage, ReusableContainerUsage, TakeawayMeals, TrashBags,
};
use crate::survey::WasteAnswers;

use super::subtotal::{annualized, Subtotal};

pub fn waste_subtotal(answers: &WasteAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.waste;
    let weeks = table.conversions.weeks_per_year;

    let per_takeaway_kg =
        f.takeaway_container_kg + f.cutlery_sets_per_takeaway * f.plastic_cutlery_kg;
    let weekly_kg = normalize_quantity::<TakeawayMeals>(&answers.takeaway_meals) * per_takeaway_kg
        + normalize_quantity::<PlasticBags>(&answers.plastic_bags) * f.plastic_bag_kg
        + normalize_quantity::<TrashBags>(&answers.trash_bags) * f.trash_bag_kg;

    let bag_share = normalize_quantity::<ReusableBagUsage>(&answers.reusable_bags);
    let container_share = normalize_quantity::<ReusableContainerUsage>(&answers.reusable_containers);

    Subtotal::new(annualized(weekly_kg, 1.0, weeks))
        .scale(
            "recycling",
            normalize_multiplier::<RecyclingHabit>(&answers.recycling),
        )
        .reduce(
            "reusable_bags",
            annualized(bag_share, f.reusable_bag_weekly_saving_kg, weeks),
        )
        .reduce(
            "reusable_containers",
            annualized(container_share, f.reusable_container_weekly_saving_kg, weeks),
        )
}
