//! Lifestyle buckets.

use super::{Bucket, QuantityBucket};

/// `entertainmentOutings`: mall, cinema and similar outings per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntertainmentOutings {
    Never,
    #[default]
    OneTwoTimes,
    ThreeFiveTimes,
    MoreThanFive,
}

impl Bucket for EntertainmentOutings {
    const FIELD: &'static str = "lifestyle.entertainmentOutings";
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

impl QuantityBucket for EntertainmentOutings {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::OneTwoTimes => 1.5,
            Self::ThreeFiveTimes => 4.0,
            Self::MoreThanFive => 6.0,
        }
    }
}

/// `streamingHours`: video streaming hours per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamingHours {
    None,
    UnderTwo,
    #[default]
    TwoToFour,
    OverFour,
}

impl Bucket for StreamingHours {
    const FIELD: &'static str = "lifestyle.streamingHours";
    const LABELS: &'static [&'static str] = &["none", "under_2", "2_4", "over_4"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "under_2" => Some(Self::UnderTwo),
            "2_4" => Some(Self::TwoToFour),
            "over_4" => Some(Self::OverFour),
            _ => None,
        }
    }
}

impl QuantityBucket for StreamingHours {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::UnderTwo => 1.0,
            Self::TwoToFour => 3.0,
            Self::OverFour => 5.0,
        }
    }
}

/// `pets`: the household pet, priced per year from the factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetOwnership {
    #[default]
    None,
    SmallPet,
    Cat,
    Dog,
}

impl Bucket for PetOwnership {
    const FIELD: &'static str = "lifestyle.pets";
    const LABELS: &'static [&'static str] = &["none", "small_pet", "cat", "dog"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "small_pet" => Some(Self::SmallPet),
            "cat" => Some(Self::Cat),
            "dog" => Some(Self::Dog),
            _ => None,
        }
    }
}
