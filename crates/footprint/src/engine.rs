//! Engine entry point: survey answers in, [`FootprintResult`] out.
//!
//! Pure and synchronous. The only shared input is the read-only
//! [`FactorTable`], passed by reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, Aggregate};
use crate::calculators::{category_breakdowns, CategoryBreakdown};
use crate::category::Category;
use crate::comparison::{compare, Comparison};
use crate::factors::FactorTable;
use crate::survey::SurveyAnswers;

/// The user-facing result of one calculation. All figures in tonnes except
/// the percentile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub total_footprint: f64,
    pub breakdown: BTreeMap<Category, f64>,
    pub comparison: Comparison,
}

/// `{ success: true, footprint }`, the body returned for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResponse {
    pub success: bool,
    pub footprint: FootprintResult,
}

impl From<FootprintResult> for FootprintResponse {
    fn from(footprint: FootprintResult) -> Self {
        Self {
            success: true,
            footprint,
        }
    }
}

/// A result plus the intermediate values it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub breakdowns: Vec<CategoryBreakdown>,
    pub aggregate: Aggregate,
    pub result: FootprintResult,
}

pub fn calculate(answers: &SurveyAnswers, table: &FactorTable) -> Calculation {
    let breakdowns = category_breakdowns(answers, table);
    let aggregate = aggregate(&breakdowns, &table.conversions);
    let comparison = compare(aggregate.total_tonnes, &table.references);

    let result = FootprintResult {
        total_footprint: aggregate.total_tonnes,
        breakdown: aggregate.breakdown_tonnes.clone(),
        comparison,
    };

    Calculation {
        breakdowns,
        aggregate,
        result,
    }
}

pub fn calculate_footprint(answers: &SurveyAnswers, table: &FactorTable) -> FootprintResult {
    calculate(answers, table).result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn diet_only() -> SurveyAnswers {
        SurveyAnswers::from_value(json!({
            "diet": {
                "mealsWithMeat": "1",
                "plantBasedFrequency": "never",
                "hawkerVisits": "0",
                "bubbleTeaCups": "0",
                "foodDelivery": "0",
                "packagedSnacks": "never",
                "foodWaste": "usually_finish"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_diet_only_result() {
        let result = calculate_footprint(&diet_only(), &FactorTable::default());
        assert!((result.total_footprint - 0.82125).abs() < 1e-9);
        assert_eq!(result.breakdown.len(), 1);
        assert!((result.breakdown[&Category::Diet] - 0.82125).abs() < 1e-9);
    }

    #[test]
    fn test_kg_and_tonnes_agree() {
        let calc = calculate(&diet_only(), &FactorTable::default());
        assert!((calc.result.total_footprint * 1000.0 - calc.aggregate.total_kg).abs() < 1e-6);
    }

    #[test]
    fn test_response_shape() {
        let response = FootprintResponse::from(calculate_footprint(
            &diet_only(),
            &FactorTable::default(),
        ));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["footprint"]["totalFootprint"].is_number());
        assert!(json["footprint"]["breakdown"]["diet"].is_number());
        assert!(json["footprint"]["breakdown"].get("transport").is_none());
        assert_eq!(json["footprint"]["comparison"]["singaporeAverage"], 8.56);
        assert!(json["footprint"]["comparison"]["percentile"].is_number());
    }

    #[test]
    fn test_empty_survey() {
        let result = calculate_footprint(&SurveyAnswers::default(), &FactorTable::default());
        assert_eq!(result.total_footprint, 0.0);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.comparison.percentile, 100.0);
    }

    #[test]
    fn test_result_deserializes_back() {
        let result = calculate_footprint(&diet_only(), &FactorTable::default());
        let text = serde_json::to_string(&result).unwrap();
        let back: FootprintResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
