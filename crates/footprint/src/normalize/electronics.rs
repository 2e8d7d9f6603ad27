//! Electronics buckets. Upgrade cadences normalize to devices per year.

use super::{Bucket, Multiplier, MultiplierBucket, QuantityBucket};

/// `phoneUpgrade`: how often a new phone is bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneUpgrade {
    Never,
    EveryThreeYears,
    #[default]
    EveryTwoYears,
    EveryYear,
}

impl Bucket for PhoneUpgrade {
    const FIELD: &'static str = "electronics.phoneUpgrade";
    const LABELS: &'static [&'static str] =
        &["never", "every_3_years", "every_2_years", "every_year"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "every_3_years" => Some(Self::EveryThreeYears),
            "every_2_years" => Some(Self::EveryTwoYears),
            "every_year" => Some(Self::EveryYear),
            _ => None,
        }
    }
}

impl QuantityBucket for PhoneUpgrade {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::EveryThreeYears => 1.0 / 3.0,
            Self::EveryTwoYears => 0.5,
            Self::EveryYear => 1.0,
        }
    }
}

/// `laptopUpgrade`: how often a new laptop is bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaptopUpgrade {
    Never,
    #[default]
    EveryFiveYears,
    EveryThreeYears,
    EveryTwoYears,
}

impl Bucket for LaptopUpgrade {
    const FIELD: &'static str = "electronics.laptopUpgrade";
    const LABELS: &'static [&'static str] =
        &["never", "every_5_years", "every_3_years", "every_2_years"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "every_5_years" => Some(Self::EveryFiveYears),
            "every_3_years" => Some(Self::EveryThreeYears),
            "every_2_years" => Some(Self::EveryTwoYears),
            _ => None,
        }
    }
}

impl QuantityBucket for LaptopUpgrade {
    fn quantity(self) -> f64 {
        match self {
            Self::Never => 0.0,
            Self::EveryFiveYears => 0.2,
            Self::EveryThreeYears => 1.0 / 3.0,
            Self::EveryTwoYears => 0.5,
        }
    }
}

/// `screenTime`: device hours per day across phone, laptop and TV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenTime {
    None,
    UnderFour,
    #[default]
    FourToEight,
    EightToTwelve,
    OverTwelve,
}

impl Bucket for ScreenTime {
    const FIELD: &'static str = "electronics.screenTime";
    const LABELS: &'static [&'static str] = &["none", "under_4", "4_8", "8_12", "over_12"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "under_4" => Some(Self::UnderFour),
            "4_8" => Some(Self::FourToEight),
            "8_12" => Some(Self::EightToTwelve),
            "over_12" => Some(Self::OverTwelve),
            _ => None,
        }
    }
}

impl QuantityBucket for ScreenTime {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::UnderFour => 2.0,
            Self::FourToEight => 6.0,
            Self::EightToTwelve => 10.0,
            Self::OverTwelve => 14.0,
        }
    }
}

/// `buyRefurbished`: share of devices bought refurbished or second-hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuyRefurbished {
    #[default]
    Never,
    Sometimes,
    Often,
}

impl Bucket for BuyRefurbished {
    const FIELD: &'static str = "electronics.buyRefurbished";
    const LABELS: &'static [&'static str] = &["never", "sometimes", "often"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "never" => Some(Self::Never),
            "sometimes" => Some(Self::Sometimes),
            "often" => Some(Self::Often),
            _ => None,
        }
    }
}

impl MultiplierBucket for BuyRefurbished {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Never => Multiplier::new(1.0),
            Self::Sometimes => Multiplier::new(0.85),
            Self::Often => Multiplier::new(0.7),
        }
    }
}
