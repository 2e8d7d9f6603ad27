//! Transport buckets: commute length, modes and ride-hailing frequency.

use super::{Bucket, QuantityBucket};

/// `commuteDuration`: one-way trip length, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommuteDuration {
    Under15,
    From15To30,
    /// Default: the median commute.
    #[default]
    From30To45,
    From45To60,
    Over60,
}

impl Bucket for CommuteDuration {
    const FIELD: &'static str = "transport.commuteDuration";
    const LABELS: &'static [&'static str] = &["under_15", "15_30", "30_45", "45_60", "over_60"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "under_15" => Some(Self::Under15),
            "15_30" => Some(Self::From15To30),
            "30_45" => Some(Self::From30To45),
            "45_60" => Some(Self::From45To60),
            "over_60" => Some(Self::Over60),
            _ => None,
        }
    }
}

impl QuantityBucket for CommuteDuration {
    fn quantity(self) -> f64 {
        match self {
            Self::Under15 => 10.0,
            Self::From15To30 => 22.5,
            Self::From30To45 => 37.5,
            Self::From45To60 => 52.5,
            Self::Over60 => 75.0,
        }
    }
}

/// `transitMode`: which public transport the respondent mostly uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitMode {
    Mrt,
    Bus,
    #[default]
    Mixed,
}

impl Bucket for TransitMode {
    const FIELD: &'static str = "transport.transitMode";
    const LABELS: &'static [&'static str] = &["mrt", "bus", "mixed"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "mrt" => Some(Self::Mrt),
            "bus" => Some(Self::Bus),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// `carType`: the household car, if any.
///
/// An unrecognised car type falls back to `None` (most respondents do not
/// own a car), which prices the incidental car kilometres at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarType {
    #[default]
    None,
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl Bucket for CarType {
    const FIELD: &'static str = "transport.carType";
    const LABELS: &'static [&'static str] = &["none", "petrol", "diesel", "hybrid", "electric"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "petrol" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            "hybrid" => Some(Self::Hybrid),
            "electric" => Some(Self::Electric),
            _ => None,
        }
    }
}

/// `grabRides`: ride-hailing trips per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RideHailFrequency {
    Never,
    #[default]
    OneTwoTimes,
    ThreeFiveTimes,
    MoreThanFive,
}

impl Bucket for RideHailFrequency {
    const FIELD: &'static str = "transport.grabRides";
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

impl QuantityBucket for RideHailFrequency {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::OneTwoTimes => 1.5,
            Self::ThreeFiveTimes => 4.0,
            Self::MoreThanFive => 7.0,
        }
    }
}

/// `carpool`: fraction of car emissions avoided by sharing rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarpoolFrequency {
    #[default]
    Never,
    Sometimes,
    Often,
    Always,
}

impl Bucket for CarpoolFrequency {
    const FIELD: &'static str = "transport.carpool";
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

impl QuantityBucket for CarpoolFrequency {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::Sometimes => 0.15,
            Self::Often => 0.3,
            Self::Always => 0.5,
        }
    }
}
