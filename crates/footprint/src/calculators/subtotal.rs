//! Category subtotal: a base value folded through an ordered list of adjustments.

use crate::normalize::Multiplier;

/// One step applied to the running subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Multiply the running value.
    Scale { label: &'static str, by: Multiplier },
    /// Add a contribution that is not subject to the preceding multipliers.
    Add { label: &'static str, kg: f64 },
    /// Subtract a reduction term.
    Reduce { label: &'static str, kg: f64 },
}

impl Adjustment {
    pub fn label(&self) -> &'static str {
        match self {
            Adjustment::Scale { label, .. }
            | Adjustment::Add { label, .. }
            | Adjustment::Reduce { label, .. } => label,
        }
    }

    pub fn apply(&self, kg: f64) -> f64 {
        match self {
            Adjustment::Scale { by, .. } => by.apply(kg),
            Adjustment::Add { kg: add, .. } => kg + add,
            Adjustment::Reduce { kg: reduce, .. } => kg - reduce,
        }
    }
}

/// A category subtotal under construction, in kg CO2e per year.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtotal {
    base_kg: f64,
    steps: Vec<Adjustment>,
}

impl Subtotal {
    pub fn new(base_kg: f64) -> Self {
        Self {
            base_kg,
            steps: Vec::new(),
        }
    }

    pub fn scale(mut self, label: &'static str, by: Multiplier) -> Self {
        self.steps.push(Adjustment::Scale { label, by });
        self
    }

    pub fn add(mut self, label: &'static str, kg: f64) -> Self {
        self.steps.push(Adjustment::Add { label, kg });
        self
    }

    pub fn reduce(mut self, label: &'static str, kg: f64) -> Self {
        self.steps.push(Adjustment::Reduce { label, kg });
        self
    }

    pub fn base_kg(&self) -> f64 {
        self.base_kg
    }

    pub fn steps(&self) -> &[Adjustment] {
        &self.steps
    }

    /// Fold every adjustment over the base, in insertion order.
    pub fn evaluate(&self) -> f64 {
        self.steps
            .iter()
            .fold(self.base_kg, |kg, step| step.apply(kg))
    }

    /// Evaluate, then clamp at zero.
    pub fn floored(&self) -> f64 {
        self.evaluate().max(0.0)
    }
}

/// `quantity × factor × periods`, the shape of every annualized contribution.
pub fn annualized(quantity: f64, factor: f64, periods_per_year: f64) -> f64 {
    quantity * factor * periods_per_year
}
