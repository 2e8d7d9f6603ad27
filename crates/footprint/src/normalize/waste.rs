//! Waste buckets. Reusable-item usage normalizes to a fraction in [0, 1].

use super::{Bucket, Multiplier, MultiplierBucket, QuantityBucket};

/// `takeawayMeals`: takeaway meals per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TakeawayMeals {
    Never,
    #[default]
    OneTwoTimes,
    ThreeFiveTimes,
    MoreThanFive,
}

impl Bucket for TakeawayMeals {
    const FIELD: &'static str = "waste.takeawayMeals";
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

impl QuantityBucket for TakeawayMeals {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::OneTwoTimes => 1.5,
            Self::ThreeFiveTimes => 4.0,
            Self::MoreThanFive => 7.0,
        }
    }
}

/// `plasticBags`: single-use plastic bags taken per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlasticBags {
    None,
    #[default]
    OneToFive,
    SixToTen,
    OverTen,
}

impl Bucket for PlasticBags {
    const FIELD: &'static str = "waste.plasticBags";
    const LABELS: &'static [&'static str] = &["none", "1_5", "6_10", "over_10"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "1_5" => Some(Self::OneToFive),
            "6_10" => Some(Self::SixToTen),
            "over_10" => Some(Self::OverTen),
            _ => None,
        }
    }
}

impl QuantityBucket for PlasticBags {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::OneToFive => 3.0,
            Self::SixToTen => 8.0,
            Self::OverTen => 12.0,
        }
    }
}

/// `trashBags`: bags of general waste thrown out per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrashBags {
    None,
    #[default]
    OneTwo,
    ThreeFour,
    FivePlus,
}

impl Bucket for TrashBags {
    const FIELD: &'static str = "waste.trashBags";
    const LABELS: &'static [&'static str] = &["none", "1_2", "3_4", "5_plus"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "1_2" => Some(Self::OneTwo),
            "3_4" => Some(Self::ThreeFour),
            "5_plus" => Some(Self::FivePlus),
            _ => None,
        }
    }
}

impl QuantityBucket for TrashBags {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::OneTwo => 1.5,
            Self::ThreeFour => 3.5,
            Self::FivePlus => 6.0,
        }
    }
}

/// `recycling`: household recycling habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecyclingHabit {
    Never,
    #[default]
    Sometimes,
    Always,
}

impl Bucket for RecyclingHabit {
    const FIELD: &'static str = "waste.recycling";
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

impl MultiplierBucket for RecyclingHabit {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Never => Multiplier::new(1.0),
            Self::Sometimes => Multiplier::new(0.9),
            Self::Always => Multiplier::new(0.75),
        }
    }
}

/// `reusableBags`: how often a reusable shopping bag is brought along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReusableBagUsage {
    Never,
    #[default]
    Sometimes,
    Always,
}

impl Bucket for ReusableBagUsage {
    const FIELD: &'static str = "waste.reusableBags";
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

impl QuantityBucket for ReusableBagUsage {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::Sometimes => 0.5,
            Self::Always => 1.0,
        }
    }
}

/// `reusableContainers`: how often a reusable food container is brought along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReusableContainerUsage {
    #[default]
    Never,
    Sometimes,
    Always,
}

impl Bucket for ReusableContainerUsage {
    const FIELD: &'static str = "waste.reusableContainers";
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

impl QuantityBucket for ReusableContainerUsage {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::Sometimes => 0.5,
            Self::Always => 1.0,
        }
    }
}
