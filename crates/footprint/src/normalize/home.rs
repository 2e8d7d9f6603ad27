//! Home and utilities buckets.

use super::{Bucket, Multiplier, MultiplierBucket, QuantityBucket};

/// `housingType`: dwelling size class; larger homes cool more floor area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HousingType {
    Hdb1To3,
    /// Default: the most common dwelling.
    #[default]
    Hdb4To5,
    HdbExecutive,
    Condo,
    Landed,
}

impl Bucket for HousingType {
    const FIELD: &'static str = "home.housingType";
    const LABELS: &'static [&'static str] =
        &["hdb1to3", "hdb4to5", "hdb_executive", "condo", "landed"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "hdb1to3" => Some(Self::Hdb1To3),
            "hdb4to5" => Some(Self::Hdb4To5),
            "hdb_executive" => Some(Self::HdbExecutive),
            "condo" => Some(Self::Condo),
            "landed" => Some(Self::Landed),
            _ => None,
        }
    }
}

impl MultiplierBucket for HousingType {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Hdb1To3 => Multiplier::new(0.8),
            Self::Hdb4To5 => Multiplier::new(1.0),
            Self::HdbExecutive => Multiplier::new(1.1),
            Self::Condo => Multiplier::new(1.2),
            Self::Landed => Multiplier::new(1.5),
        }
    }
}

/// `airconHours`: air-conditioner hours per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AirconHours {
    None,
    #[default]
    OneToFour,
    FiveToEight,
    OverEight,
}

impl Bucket for AirconHours {
    const FIELD: &'static str = "home.airconHours";
    const LABELS: &'static [&'static str] = &["none", "1_4", "5_8", "over_8"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "1_4" => Some(Self::OneToFour),
            "5_8" => Some(Self::FiveToEight),
            "over_8" => Some(Self::OverEight),
            _ => None,
        }
    }
}

impl QuantityBucket for AirconHours {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::OneToFour => 2.5,
            Self::FiveToEight => 6.5,
            Self::OverEight => 10.0,
        }
    }
}

/// `coolingMethod`: how the home is kept cool overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoolingMethod {
    Fan,
    #[default]
    Mixed,
    Aircon,
}

impl Bucket for CoolingMethod {
    const FIELD: &'static str = "home.coolingMethod";
    const LABELS: &'static [&'static str] = &["fan", "mixed", "aircon"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "fan" => Some(Self::Fan),
            "mixed" => Some(Self::Mixed),
            "aircon" => Some(Self::Aircon),
            _ => None,
        }
    }
}

impl MultiplierBucket for CoolingMethod {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Fan => Multiplier::new(0.8),
            Self::Mixed => Multiplier::new(1.0),
            Self::Aircon => Multiplier::new(1.2),
        }
    }
}
