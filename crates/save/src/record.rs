// ---------------------------------------------------------------------------
// FootprintRecord: one persisted calculation
// ---------------------------------------------------------------------------

use bitcode::{Decode, Encode};

use footprint::protocol::HistoryEntry;
use footprint::{Comparison, FootprintResult};

use crate::record_codec::{category_to_u8, u8_to_category};

#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct SavedCategory {
    pub category: u8,
    pub tonnes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode)]
pub struct SavedComparison {
    pub singapore_average: f64,
    pub global_average: f64,
    pub percentile: f64,
}

/// A calculation result plus the answers it was computed from.
///
/// The answers are kept as their JSON text so the stored copy is exactly what
/// the caller sent, unknown keys included.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct FootprintRecord {
    pub user_id: String,
    /// Unix seconds.
    pub created_at: u64,
    /// Factor-table version the result was computed with.
    pub factor_table_version: u32,
    pub answers_json: String,
    pub total_footprint: f64,
    pub breakdown: Vec<SavedCategory>,
    pub comparison: SavedComparison,
}

impl FootprintRecord {
    pub fn new(
        user_id: &str,
        created_at: u64,
        factor_table_version: u32,
        answers: &serde_json::Value,
        result: &FootprintResult,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            created_at,
            factor_table_version,
            answers_json: answers.to_string(),
            total_footprint: result.total_footprint,
            breakdown: result
                .breakdown
                .iter()
                .map(|(&category, &tonnes)| SavedCategory {
                    category: category_to_u8(category),
                    tonnes,
                })
                .collect(),
            comparison: SavedComparison {
                singapore_average: result.comparison.singapore_average,
                global_average: result.comparison.global_average,
                percentile: result.comparison.percentile,
            },
        }
    }

    /// The stored result. Category codes this build does not know are dropped.
    pub fn footprint(&self) -> FootprintResult {
        FootprintResult {
            total_footprint: self.total_footprint,
            breakdown: self
                .breakdown
                .iter()
                .filter_map(|saved| u8_to_category(saved.category).map(|c| (c, saved.tonnes)))
                .collect(),
            comparison: Comparison {
                singapore_average: self.comparison.singapore_average,
                global_average: self.comparison.global_average,
                percentile: self.comparison.percentile,
            },
        }
    }

    /// The stored answers; `null` if the text no longer parses.
    pub fn answers(&self) -> serde_json::Value {
        serde_json::from_str(&self.answers_json).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_history_entry(&self, record_id: &str) -> HistoryEntry {
        HistoryEntry {
            record_id: record_id.to_string(),
            created_at: self.created_at,
            answers: self.answers(),
            footprint: self.footprint(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bitcode::Error> {
        bitcode::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::{calculate_footprint, Category, FactorTable, SurveyAnswers};
    use serde_json::json;

    fn sample() -> (serde_json::Value, FootprintResult) {
        let answers = json!({
            "diet": {"mealsWithMeat": 1, "plantBasedFrequency": "never", "packagedSnacks": "never"},
            "waste": {},
            "extra": "kept verbatim"
        });
        let survey = SurveyAnswers::from_value(answers.clone()).unwrap();
        let result = calculate_footprint(&survey, &FactorTable::default());
        (answers, result)
    }

    #[test]
    fn test_record_preserves_result() {
        let (answers, result) = sample();
        let record = FootprintRecord::new("alice", 1_700_000_000, 1, &answers, &result);
        assert_eq!(record.footprint(), result);
        assert_eq!(record.answers(), answers);
        assert_eq!(record.breakdown.len(), 2);
    }

    #[test]
    fn test_bitcode_roundtrip() {
        let (answers, result) = sample();
        let record = FootprintRecord::new("alice", 1, 1, &answers, &result);
        let decoded = FootprintRecord::decode(&record.encode()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_unknown_category_code_dropped() {
        let (answers, result) = sample();
        let mut record = FootprintRecord::new("alice", 1, 1, &answers, &result);
        record.breakdown.push(SavedCategory {
            category: 200,
            tonnes: 1.0,
        });
        let footprint = record.footprint();
        assert_eq!(footprint.breakdown.len(), 2);
        assert!(footprint.breakdown.contains_key(&Category::Diet));
    }

    #[test]
    fn test_history_entry() {
        let (answers, result) = sample();
        let record = FootprintRecord::new("bob", 42, 1, &answers, &result);
        let entry = record.to_history_entry("abc-000001");
        assert_eq!(entry.record_id, "abc-000001");
        assert_eq!(entry.created_at, 42);
        assert_eq!(entry.footprint, result);
    }

    #[test]
    fn test_garbage_answers_read_as_null() {
        let (answers, result) = sample();
        let mut record = FootprintRecord::new("bob", 42, 1, &answers, &result);
        record.answers_json = "{not json".to_string();
        assert!(record.answers().is_null());
    }
}
