//! Category Calculators: one pure function per survey block.
//!
//! Each calculator builds a [`Subtotal`]: an annualized base, then the
//! category's multipliers in order, then any additive terms, then any
//! reductions. [`score_category`] evaluates it and applies the per-category
//! floor policy from [`Category::floors_subtotal`].

pub mod diet;
pub mod electronics;
pub mod fashion;
pub mod home;
pub mod lifestyle;
pub mod offsetting;
pub mod subtotal;
pub mod transport;
pub mod travel;
pub mod waste;

pub use diet::diet_subtotal;
pub use electronics::electronics_subtotal;
pub use fashion::fashion_subtotal;
pub use home::home_subtotal;
pub use lifestyle::lifestyle_subtotal;
pub use offsetting::offsetting_subtotal;
pub use subtotal::{annualized, Adjustment, Subtotal};
pub use transport::transport_subtotal;
pub use travel::travel_subtotal;
pub use waste::waste_subtotal;

use crate::category::Category;
use crate::factors::FactorTable;
use crate::survey::SurveyAnswers;

/// One scored category, in kg CO2e per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub kg: f64,
}

/// Evaluate a subtotal under the category's floor policy.
pub fn score_category(category: Category, subtotal: &Subtotal) -> f64 {
    if category.floors_subtotal() {
        subtotal.floored()
    } else {
        subtotal.evaluate()
    }
}

/// Build the subtotal for one category, or `None` if the block was omitted.
pub fn category_subtotal(
    category: Category,
    answers: &SurveyAnswers,
    table: &FactorTable,
) -> Option<Subtotal> {
    match category {
        Category::Diet => answers.diet.as_ref().map(|a| diet_subtotal(a, table)),
        Category::Transport => answers
            .transport
            .as_ref()
            .map(|a| transport_subtotal(a, table)),
        Category::Travel => answers.travel.as_ref().map(|a| travel_subtotal(a, table)),
        Category::Fashion => answers.fashion.as_ref().map(|a| fashion_subtotal(a, table)),
        Category::Home => answers.home.as_ref().map(|a| home_subtotal(a, table)),
        Category::Lifestyle => answers
            .lifestyle
            .as_ref()
            .map(|a| lifestyle_subtotal(a, table)),
        Category::Electronics => answers
            .electronics
            .as_ref()
            .map(|a| electronics_subtotal(a, table)),
        Category::Waste => answers.waste.as_ref().map(|a| waste_subtotal(a, table)),
        Category::Offsetting => answers
            .offsetting
            .as_ref()
            .map(|a| offsetting_subtotal(a, table)),
    }
}

/// Score every populated block, in [`Category::ALL`] order.
pub fn category_breakdowns(answers: &SurveyAnswers, table: &FactorTable) -> Vec<CategoryBreakdown> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            category_subtotal(category, answers, table).map(|subtotal| CategoryBreakdown {
                category,
                kg: score_category(category, &subtotal),
            })
        })
        .collect()
}
