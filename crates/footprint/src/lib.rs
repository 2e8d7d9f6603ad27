//! Carbon-footprint scoring engine.
//!
//! Survey answers are normalized field by field, scored per category against
//! an immutable [`FactorTable`], aggregated into a floored grand total and
//! compared with reference population averages. [`FootprintPlugin`] hosts the
//! engine inside a Bevy app.

pub mod aggregate;
pub mod calculators;
pub mod category;
pub mod comparison;
pub mod engine;
pub mod factors;
pub mod normalize;
pub mod plugin;
pub mod protocol;
pub mod survey;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use category::Category;
pub use comparison::Comparison;
pub use engine::{calculate, calculate_footprint, FootprintResponse, FootprintResult};
pub use factors::FactorTable;
pub use plugin::{FootprintComputed, FootprintLedger, FootprintPlugin, FootprintRequest};
pub use survey::SurveyAnswers;
