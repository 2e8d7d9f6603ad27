//! Lifestyle: outings, gym, streaming and pets.

use crate::factors::{FactorTable, LifestyleFactors};
use crate::normalize::{
    normalize_count, normalize_quantity, Bucket, EntertainmentOutings, PetOwnership,
    StreamingHours,
};
use crate::survey::LifestyleAnswers;

use super::subtotal::{annualized, Subtotal};

pub fn pet_kg_per_year(pet: PetOwnership, f: &LifestyleFactors) -> f64 {
    match pet {
        PetOwnership::None => 0.0,
        PetOwnership::SmallPet => f.small_pet_kg_per_year,
        PetOwnership::Cat => f.cat_kg_per_year,
        PetOwnership::Dog => f.dog_kg_per_year,
    }
}

pub fn lifestyle_subtotal(answers: &LifestyleAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.lifestyle;
    let c = &table.conversions;

    let weekly_kg = normalize_quantity::<EntertainmentOutings>(&answers.entertainment_outings)
        * f.outing_kg
        + normalize_count(&answers.gym_sessions) * f.gym_session_kg;
    let streaming_kg = annualized(
        normalize_quantity::<StreamingHours>(&answers.streaming_hours),
        f.streaming_kg_per_hour,
        c.days_per_year,
    );
    let pet_kg = pet_kg_per_year(PetOwnership::normalize(&answers.pets), f);

    Subtotal::new(annualized(weekly_kg, 1.0, c.weeks_per_year))
        .add("streaming", streaming_kg)
        .add("pets", pet_kg)
}
