//! Electronics: embodied emissions of new devices plus daily device use.

use crate::factors::FactorTable;
use crate::normalize::{
    normalize_count, normalize_multiplier, normalize_quantity, BuyRefurbished, LaptopUpgrade,
    PhoneUpgrade, ScreenTime,
};
use crate::survey::ElectronicsAnswers;

use super::subtotal::{annualized, Subtotal};

pub fn electronics_subtotal(answers: &ElectronicsAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.electronics;

    let purchases_kg = normalize_quantity::<PhoneUpgrade>(&answers.phone_upgrade) * f.phone_kg
        + normalize_quantity::<LaptopUpgrade>(&answers.laptop_upgrade) * f.laptop_kg
        + normalize_count(&answers.other_gadgets) * f.gadget_kg;
    let usage_kg = annualized(
        normalize_quantity::<ScreenTime>(&answers.screen_time) * f.device_kwh_per_hour,
        table.home.grid_kg_per_kwh,
        table.conversions.days_per_year,
    );

    Subtotal::new(purchases_kg)
        .scale(
            "buy_refurbished",
            normalize_multiplier::<BuyRefurbished>(&answers.buy_refurbished),
        )
        .add("device_usage", usage_kg)
}
