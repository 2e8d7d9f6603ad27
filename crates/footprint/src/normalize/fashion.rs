//! Fashion and shopping buckets.

use super::{Bucket, Multiplier, MultiplierBucket, QuantityBucket};

/// `clothingPurchases`: new clothing items per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClothingPurchases {
    None,
    Rarely,
    #[default]
    OneTwoItems,
    ThreeFiveItems,
    MoreThanFive,
}

impl Bucket for ClothingPurchases {
    const FIELD: &'static str = "fashion.clothingPurchases";
    const LABELS: &'static [&'static str] =
        &["none", "rarely", "1_2_items", "3_5_items", "more_than_5"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "rarely" => Some(Self::Rarely),
            "1_2_items" => Some(Self::OneTwoItems),
            "3_5_items" => Some(Self::ThreeFiveItems),
            "more_than_5" => Some(Self::MoreThanFive),
            _ => None,
        }
    }
}

impl QuantityBucket for ClothingPurchases {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Rarely => 0.5,
            Self::OneTwoItems => 1.5,
            Self::ThreeFiveItems => 4.0,
            Self::MoreThanFive => 7.0,
        }
    }
}

/// `onlineShopping`: parcels delivered per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnlineShopping {
    Never,
    #[default]
    OneTwoTimes,
    ThreeFiveTimes,
    MoreThanFive,
}

impl Bucket for OnlineShopping {
    const FIELD: &'static str = "fashion.onlineShopping";
    const LABELS: &'static [&'static str] = &["never", "1_2_times", "3_5_times", "more_than_5"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "1_2_times" => Some(Self::OneTwoTimes),
            "3_5_times" => Some(Self::ThreeFiveTimes),
            "more_than_5" => Some(Self::MoreThanFive),
            _ => None,
        }
    }
}

impl QuantityBucket for OnlineShopping {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::OneTwoTimes => 1.5,
            Self::ThreeFiveTimes => 4.0,
            Self::MoreThanFive => 7.0,
        }
    }
}

/// `sustainableShopping`: preference for second-hand or certified brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SustainableShopping {
    Never,
    #[default]
    Sometimes,
    Often,
    Always,
}

impl Bucket for SustainableShopping {
    const FIELD: &'static str = "fashion.sustainableShopping";
    const LABELS: &'static [&'static str] = &["never", "sometimes", "often", "always"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "sometimes" => Some(Self::Sometimes),
            "often" => Some(Self::Often),
            "always" => Some(Self::Always),
            _ => None,
        }
    }
}

impl MultiplierBucket for SustainableShopping {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Never => Multiplier::new(1.0),
            Self::Sometimes => Multiplier::new(0.9),
            Self::Often => Multiplier::new(0.8),
            Self::Always => Multiplier::new(0.7),
        }
    }
}

/// `clothingRecycling`: donating or recycling old clothes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClothingRecycling {
    Never,
    #[default]
    Sometimes,
    Always,
}

impl Bucket for ClothingRecycling {
    const FIELD: &'static str = "fashion.clothingRecycling";
    const LABELS: &'static [&'static str] = &["never", "sometimes", "always"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "sometimes" => Some(Self::Sometimes),
            "always" => Some(Self::Always),
            _ => None,
        }
    }
}

impl MultiplierBucket for ClothingRecycling {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Never => Multiplier::new(1.0),
            Self::Sometimes => Multiplier::new(0.95),
            Self::Always => Multiplier::new(0.9),
        }
    }
}
