//! Home: daily electricity for cooling and hot water, scaled by dwelling.
//!
//! The energy-saving multiplier applies to the whole home subtotal, so it is
//! the last scale in the chain.

use crate::factors::FactorTable;
use crate::normalize::{
    normalize_count, normalize_flag, normalize_multiplier, normalize_quantity, AirconHours,
    CoolingMethod, HousingType, Multiplier,
};
use crate::survey::HomeAnswers;

use super::subtotal::{annualized, Subtotal};

pub fn home_subtotal(answers: &HomeAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.home;

    let daily_kwh = normalize_quantity::<AirconHours>(&answers.aircon_hours)
        * f.aircon_kwh_per_hour
        + normalize_count(&answers.shower_minutes) * f.shower_kwh_per_minute;

    let energy_saving = if normalize_flag(&answers.energy_saving) {
        Multiplier::new(f.energy_saving_multiplier)
    } else {
        Multiplier::IDENTITY
    };

    Subtotal::new(annualized(
        daily_kwh,
        f.grid_kg_per_kwh,
        table.conversions.days_per_year,
    ))
    .scale(
        "cooling_method",
        normalize_multiplier::<CoolingMethod>(&answers.cooling_method),
    )
    .scale(
        "housing_type",
        normalize_multiplier::<HousingType>(&answers.housing_type),
    )
    .scale("energy_saving", energy_saving)
}
