//! Travel buckets. Short- and long-haul flights own separate vocabularies.

use super::{Bucket, Multiplier, MultiplierBucket, QuantityBucket};

/// `shortHaulFlights`: regional return flights per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortHaulFlights {
    None,
    #[default]
    OneTwo,
    ThreeFive,
    MoreThanFive,
}

impl Bucket for ShortHaulFlights {
    const FIELD: &'static str = "travel.shortHaulFlights";
    const LABELS: &'static [&'static str] = &["none", "1_2", "3_5", "more_than_5"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "1_2" => Some(Self::OneTwo),
            "3_5" => Some(Self::ThreeFive),
            "more_than_5" => Some(Self::MoreThanFive),
            _ => None,
        }
    }
}

impl QuantityBucket for ShortHaulFlights {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::OneTwo => 1.5,
            Self::ThreeFive => 4.0,
            Self::MoreThanFive => 7.0,
        }
    }
}

/// `longHaulFlights`: intercontinental return flights per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongHaulFlights {
    #[default]
    None,
    One,
    TwoThree,
    MoreThanThree,
}

impl Bucket for LongHaulFlights {
    const FIELD: &'static str = "travel.longHaulFlights";
    const LABELS: &'static [&'static str] = &["none", "1", "2_3", "more_than_3"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "1" => Some(Self::One),
            "2_3" => Some(Self::TwoThree),
            "more_than_3" => Some(Self::MoreThanThree),
            _ => None,
        }
    }
}

impl QuantityBucket for LongHaulFlights {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::One => 1.0,
            Self::TwoThree => 2.5,
            Self::MoreThanThree => 4.0,
        }
    }
}

/// `flightClass`: cabin class, scaling flight emissions by seat area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightClass {
    #[default]
    Economy,
    PremiumEconomy,
    BusinessFirst,
}

impl Bucket for FlightClass {
    const FIELD: &'static str = "travel.flightClass";
    const LABELS: &'static [&'static str] = &["economy", "premium_economy", "business_first"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "economy" => Some(Self::Economy),
            "premium_economy" => Some(Self::PremiumEconomy),
            "business_first" => Some(Self::BusinessFirst),
            _ => None,
        }
    }
}

impl MultiplierBucket for FlightClass {
    fn multiplier(self) -> Multiplier {
        match self {
            Self::Economy => Multiplier::new(1.0),
            Self::PremiumEconomy => Multiplier::new(1.3),
            Self::BusinessFirst => Multiplier::new(2.0),
        }
    }
}

/// `hotelNights`: nights per year spent in hotels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotelNights {
    None,
    #[default]
    OneToSeven,
    EightToFourteen,
    OverFourteen,
}

impl Bucket for HotelNights {
    const FIELD: &'static str = "travel.hotelNights";
    const LABELS: &'static [&'static str] = &["none", "1_7", "8_14", "over_14"];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(Self::None),
            "1_7" => Some(Self::OneToSeven),
            "8_14" => Some(Self::EightToFourteen),
            "over_14" => Some(Self::OverFourteen),
            _ => None,
        }
    }
}

impl QuantityBucket for HotelNights {
    fn quantity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::OneToSeven => 4.0,
            Self::EightToFourteen => 11.0,
            Self::OverFourteen => 21.0,
        }
    }
}
