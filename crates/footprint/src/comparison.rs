//! Comparison Engine: position a total against the reference averages.

use serde::{Deserialize, Serialize};

use crate::factors::ReferenceAverages;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub singapore_average: f64,
    pub global_average: f64,
    /// 0 at or above the regional average, 100 at zero.
    pub percentile: f64,
}

/// `clamp((regional − total) / regional × 100, 0, 100)`.
///
/// Not a population percentile; a linear distance below the regional average.
pub fn percentile(total_tonnes: f64, regional_average_tonnes: f64) -> f64 {
    let raw = (regional_average_tonnes - total_tonnes) / regional_average_tonnes * 100.0;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

pub fn compare(total_tonnes: f64, references: &ReferenceAverages) -> Comparison {
    Comparison {
        singapore_average: references.singapore_average_tonnes,
        global_average: references.global_average_tonnes,
        percentile: percentile(total_tonnes, references.singapore_average_tonnes),
    }
}
