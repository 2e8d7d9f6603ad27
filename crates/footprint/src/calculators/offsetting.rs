//! Offsetting: credits that are subtracted from the grand total.
//!
//! The subtotal starts at zero and only ever goes down. It is never floored
//! on its own; the aggregation engine floors the grand total instead.

use crate::factors::FactorTable;
use crate::normalize::{normalize_count, normalize_flag};
use crate::survey::OffsettingAnswers;

use super::subtotal::Subtotal;

pub fn offsetting_subtotal(answers: &OffsettingAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.offsetting;

    let mut subtotal = Subtotal::new(0.0)
        .reduce(
            "carbon_offsets",
            normalize_count(&answers.carbon_offsets) * f.offset_tonne_kg,
        )
        .reduce(
            "trees_planted",
            normalize_count(&answers.trees_planted) * f.tree_kg_per_year,
        );
    if normalize_flag(&answers.renewable_energy) {
        subtotal = subtotal.reduce("renewable_energy", f.renewable_energy_kg);
    }
    if normalize_flag(&answers.composting) {
        subtotal = subtotal.reduce("composting", f.composting_kg);
    }
    subtotal
}
