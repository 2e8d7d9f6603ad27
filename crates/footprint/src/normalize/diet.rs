//! Diet buckets. All three are multipliers on the meat-meal base.

use super::{Bucket, Multiplier, MultiplierBucket};

/// `plantBasedFrequency`: how often the respondent eats fully plant-based meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlantBasedFrequency {
    Never,
    /// Default: the most common answer.
    #[default]
    OnceWeek,
    TwoThreeTimes,
    AlmostDaily,
}

impl Bucket for PlantBasedFrequency {
    const FIELD: &'static str = "diet.plantBasedFrequency";
    const LABELS: &'static [&'static str] = &["never", "once_week", "2_3_times", "almost_daily"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "once_week" => Some(Self::OnceWeek),
            "2_3_times" => Some(Self::TwoThreeTimes),
            "almost_daily" => Some(Self::AlmostDaily),
            _ => None,
        }
    }
}

impl MultiplierBucket for PlantBasedFrequency {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Never => Multiplier::new(1.0),
            Self::OnceWeek => Multiplier::new(0.9),
            Self::TwoThreeTimes => Multiplier::new(0.8),
            Self::AlmostDaily => Multiplier::new(0.6),
        }
    }
}

/// `packagedSnacks`: packaged snack and drink consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnackFrequency {
    Never,
    #[default]
    Occasionally,
    FewTimesWeek,
    Daily,
}

impl Bucket for SnackFrequency {
    const FIELD: &'static str = "diet.packagedSnacks";
    const LABELS: &'static [&'static str] = &["never", "occasionally", "few_times_week", "daily"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "occasionally" => Some(Self::Occasionally),
            "few_times_week" => Some(Self::FewTimesWeek),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

impl MultiplierBucket for SnackFrequency {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Never => Multiplier::new(0.9),
            Self::Occasionally => Multiplier::new(1.0),
            Self::FewTimesWeek => Multiplier::new(1.1),
            Self::Daily => Multiplier::new(1.3),
        }
    }
}

/// `foodWaste`: how much of each meal ends up thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodWasteHabit {
    AlwaysFinish,
    #[default]
    UsuallyFinish,
    SometimesLeave,
    OftenLeave,
}

impl Bucket for FoodWasteHabit {
    const FIELD: &'static str = "diet.foodWaste";
    const LABELS: &'static [&'static str] =
        &["always_finish", "usually_finish", "sometimes_leave", "often_leave"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "always_finish" => Some(Self::AlwaysFinish),
            "usually_finish" => Some(Self::UsuallyFinish),
            "sometimes_leave" => Some(Self::SometimesLeave),
            "often_leave" => Some(Self::OftenLeave),
            _ => None,
        }
    }
}

impl MultiplierBucket for FoodWasteHabit {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::AlwaysFinish => Multiplier::new(0.9),
            Self::UsuallyFinish => Multiplier::new(1.0),
            Self::SometimesLeave => Multiplier::new(1.1),
            Self::OftenLeave => Multiplier::new(1.2),
        }
    }
}
