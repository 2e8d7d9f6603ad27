//! Aggregation Engine: category subtotals to a floored grand total in tonnes.
//!
//! The grand total is summed from the raw subtotals (offsetting included,
//! possibly negative) and floored once. Each breakdown entry is floored on
//! its own, so with large offsets the displayed entries can add up to more
//! than the displayed total. That mismatch is long-standing user-facing
//! behaviour and is kept.

use std::collections::BTreeMap;

use crate::calculators::CategoryBreakdown;
use crate::category::Category;
use crate::factors::Conversions;

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Sum of every subtotal before the floor, kg.
    pub gross_kg: f64,
    /// `max(0, gross_kg)`.
    pub total_kg: f64,
    pub total_tonnes: f64,
    pub breakdown_tonnes: BTreeMap<Category, f64>,
}

pub fn aggregate(breakdowns: &[CategoryBreakdown], conversions: &Conversions) -> Aggregate {
    let gross_kg: f64 = breakdowns.iter().map(|b| b.kg).sum();
    let total_kg = gross_kg.max(0.0);

    let breakdown_tonnes = breakdowns
        .iter()
        .map(|b| (b.category, b.kg.max(0.0) * conversions.kg_to_tonnes))
        .collect();

    Aggregate {
        gross_kg,
        total_kg,
        total_tonnes: total_kg * conversions.kg_to_tonnes,
        breakdown_tonnes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: Category, kg: f64) -> CategoryBreakdown {
        CategoryBreakdown { category, kg }
    }

    #[test]
    fn test_sum_and_convert() {
        let agg = aggregate(
            &[row(Category::Diet, 821.25), row(Category::Home, 178.75)],
            &Conversions::default(),
        );
        assert!((agg.total_kg - 1000.0).abs() < 1e-9);
        assert!((agg.total_tonnes - 1.0).abs() < 1e-12);
        assert!((agg.breakdown_tonnes[&Category::Diet] - 0.82125).abs() < 1e-12);
    }

    #[test]
    fn test_offsets_reduce_total_but_show_as_zero() {
        let agg = aggregate(
            &[row(Category::Diet, 1000.0), row(Category::Offsetting, -400.0)],
            &Conversions::default(),
        );
        assert!((agg.total_tonnes - 0.6).abs() < 1e-12);
        assert_eq!(agg.breakdown_tonnes[&Category::Offsetting], 0.0);
        // Entries add to 1.0 t while the total is 0.6 t.
        let shown: f64 = agg.breakdown_tonnes.values().sum();
        assert!(shown > agg.total_tonnes);
    }

    #[test]
    fn test_negative_gross_floors_to_zero() {
        let agg = aggregate(
            &[row(Category::Offsetting, -5000.0)],
            &Conversions::default(),
        );
        assert!((agg.gross_kg + 5000.0).abs() < 1e-9);
        assert_eq!(agg.total_kg, 0.0);
        assert_eq!(agg.total_tonnes, 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let agg = aggregate(&[], &Conversions::default());
        assert_eq!(agg.total_tonnes, 0.0);
        assert!(agg.breakdown_tonnes.is_empty());
    }
}
