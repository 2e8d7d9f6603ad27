//! Input Normalizer: survey answers to representative numbers.
//!
//! Every categorical field owns one enum implementing [`Bucket`]. Parsing is
//! an exhaustive `match` over the field's vocabulary with a single fallback to
//! the field's documented `Default`, so an unrecognised label can never slip
//! through as a silent zero.
//!
//! Two mappings exist and are kept apart by type:
//! - [`QuantityBucket`] yields a representative count or duration (`f64`).
//! - [`MultiplierBucket`] yields a behavioural [`Multiplier`] in (0, 2].
//!
//! Selector enums (car type, transit mode, pets) implement only [`Bucket`];
//! the calculator maps them onto a factor-table field.

pub mod diet;
pub mod electronics;
pub mod fashion;
pub mod home;
pub mod lifestyle;
pub mod transport;
pub mod travel;
pub mod waste;

#[cfg(test)]
mod tests;

pub use diet::*;
pub use electronics::*;
pub use fashion::*;
pub use home::*;
pub use lifestyle::*;
pub use transport::*;
pub use travel::*;
pub use waste::*;

use bevy::prelude::*;
use serde::Serialize;

use crate::survey::RawAnswer;

// ---------------------------------------------------------------------------
// Multiplier
// ---------------------------------------------------------------------------

/// A behavioural modifier applied to a running subtotal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Multiplier(f64);

impl Multiplier {
    pub const IDENTITY: Multiplier = Multiplier(1.0);

    /// Smallest and largest multipliers a survey answer may produce.
    pub const MIN_EXCLUSIVE: f64 = 0.0;
    pub const MAX: f64 = 2.0;

    pub const fn new(value: f64) -> Self {
        Multiplier(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_in_range(self) -> bool {
        self.0 > Self::MIN_EXCLUSIVE && self.0 <= Self::MAX
    }

    pub fn apply(self, kg: f64) -> f64 {
        kg * self.0
    }
}

// ---------------------------------------------------------------------------
// Bucket traits
// ---------------------------------------------------------------------------

/// A categorical survey field with a closed vocabulary.
pub trait Bucket: Sized + Copy + Default + 'static {
    /// Wire name of the field, for logs.
    const FIELD: &'static str;

    /// Every label the field accepts.
    const LABELS: &'static [&'static str];

    /// Parse a known label; `None` for anything outside the vocabulary.
    fn from_label(label: &str) -> Option<Self>;

    /// Normalize a raw answer, falling back to the field default.
    fn normalize(answer: &RawAnswer) -> Self {
        match answer.as_label().and_then(Self::from_label) {
            Some(bucket) => bucket,
            None => {
                if !answer.is_missing() {
                    debug!(
                        "unrecognized {} answer {:?}, using default",
                        Self::FIELD,
                        answer
                    );
                }
                Self::default()
            }
        }
    }
}

/// A bucket standing for a representative count, duration or fraction.
pub trait QuantityBucket: Bucket {
    fn quantity(self) -> f64;
}

/// A bucket standing for a behavioural multiplier.
pub trait MultiplierBucket: Bucket {
    fn multiplier(self) -> Multiplier;
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Representative value of a quantity field.
pub fn normalize_quantity<B: QuantityBucket>(answer: &RawAnswer) -> f64 {
    B::normalize(answer).quantity()
}

/// Multiplier of a behavioural-modifier field.
pub fn normalize_multiplier<B: MultiplierBucket>(answer: &RawAnswer) -> Multiplier {
    B::normalize(answer).multiplier()
}

/// Free-numeric field; non-numeric or absent reads as 0.
pub fn normalize_count(answer: &RawAnswer) -> f64 {
    answer.as_count()
}

/// Yes/no field; anything unrecognised reads as "no".
pub fn normalize_flag(answer: &RawAnswer) -> bool {
    answer.as_flag()
}
