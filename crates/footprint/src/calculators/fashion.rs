//! Fashion: monthly clothing purchases and online parcels, annualized.

use crate::factors::FactorTable;
use crate::normalize::{
    normalize_multiplier, normalize_quantity, ClothingPurchases, ClothingRecycling,
    OnlineShopping, SustainableShopping,
};
use crate::survey::FashionAnswers;

use super::subtotal::{annualized, Subtotal};

pub fn fashion_subtotal(answers: &FashionAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.fashion;

    let monthly_kg = normalize_quantity::<ClothingPurchases>(&answers.clothing_purchases)
        * f.clothing_item_kg
        + normalize_quantity::<OnlineShopping>(&answers.online_shopping) * f.online_parcel_kg;

    Subtotal::new(annualized(monthly_kg, 1.0, table.conversions.months_per_year))
        .scale(
            "sustainable_shopping",
            normalize_multiplier::<SustainableShopping>(&answers.sustainable_shopping),
        )
        .scale(
            "clothing_recycling",
            normalize_multiplier::<ClothingRecycling>(&answers.clothing_recycling),
        )
}
