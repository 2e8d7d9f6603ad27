//! Raw survey answers as they arrive from the caller.
//!
//! Every field is a [`RawAnswer`] so that deserialization never fails on a
//! badly typed value; the Input Normalizer decides what each one means.
//! Only a non-object request (or a non-object category block) is rejected,
//! and that happens at the boundary before the engine runs.

use serde::de::IgnoredAny;
use serde::Deserialize;

/// Largest value a free-numeric answer can take. Every count the survey asks
/// for (meals a day, sessions a week, gadgets or trees a year) sits far
/// below this, and capping keeps every product of count and factor finite.
pub const MAX_COUNT: f64 = 10_000.0;

/// A single survey answer: a count, a bucket label, a yes/no flag, or junk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    /// Absent field or explicit `null`.
    #[default]
    Missing,
    Number(f64),
    Text(String),
    Flag(bool),
    /// Arrays, objects and anything else the survey never produces.
    Other(IgnoredAny),
}

impl RawAnswer {
    /// The answer as a bucket label, if it is a string.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            RawAnswer::Text(label) => Some(label.trim()),
            _ => None,
        }
    }

    /// Free-numeric reading: numbers and numeric strings, otherwise 0.
    ///
    /// Negative and non-finite values also read as 0; counts are never negative.
    /// Anything above [`MAX_COUNT`] reads as `MAX_COUNT`.
    pub fn as_count(&self) -> f64 {
        let value = match self {
            RawAnswer::Number(n) => *n,
            RawAnswer::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if value.is_finite() && value > 0.0 {
            value.min(MAX_COUNT)
        } else {
            0.0
        }
    }

    /// Yes/no reading. Anything unrecognised is "no".
    pub fn as_flag(&self) -> bool {
        match self {
            RawAnswer::Flag(b) => *b,
            RawAnswer::Number(n) => *n == 1.0,
            RawAnswer::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "yes" | "true" | "1"
            ),
            _ => false,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawAnswer::Missing)
    }
}

impl From<&str> for RawAnswer {
    fn from(s: &str) -> Self {
        RawAnswer::Text(s.to_string())
    }
}

impl From<f64> for RawAnswer {
    fn from(n: f64) -> Self {
        RawAnswer::Number(n)
    }
}

impl From<bool> for RawAnswer {
    fn from(b: bool) -> Self {
        RawAnswer::Flag(b)
    }
}

// ---------------------------------------------------------------------------
// Category blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietAnswers {
    pub meals_with_meat: RawAnswer,
    pub plant_based_frequency: RawAnswer,
    pub packaged_snacks: RawAnswer,
    pub food_waste: RawAnswer,
    pub hawker_visits: RawAnswer,
    pub bubble_tea_cups: RawAnswer,
    pub food_delivery: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportAnswers {
    pub public_transport_days: RawAnswer,
    pub commute_duration: RawAnswer,
    pub transit_mode: RawAnswer,
    pub car_type: RawAnswer,
    pub grab_rides: RawAnswer,
    pub carpool: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelAnswers {
    pub short_haul_flights: RawAnswer,
    pub long_haul_flights: RawAnswer,
    pub flight_class: RawAnswer,
    pub hotel_nights: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FashionAnswers {
    pub clothing_purchases: RawAnswer,
    pub online_shopping: RawAnswer,
    pub sustainable_shopping: RawAnswer,
    pub clothing_recycling: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeAnswers {
    pub housing_type: RawAnswer,
    pub aircon_hours: RawAnswer,
    pub shower_minutes: RawAnswer,
    pub cooling_method: RawAnswer,
    pub energy_saving: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleAnswers {
    pub entertainment_outings: RawAnswer,
    pub gym_sessions: RawAnswer,
    pub streaming_hours: RawAnswer,
    pub pets: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectronicsAnswers {
    pub phone_upgrade: RawAnswer,
    pub laptop_upgrade: RawAnswer,
    pub other_gadgets: RawAnswer,
    pub screen_time: RawAnswer,
    pub buy_refurbished: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WasteAnswers {
    pub takeaway_meals: RawAnswer,
    pub plastic_bags: RawAnswer,
    pub trash_bags: RawAnswer,
    pub recycling: RawAnswer,
    pub reusable_bags: RawAnswer,
    pub reusable_containers: RawAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OffsettingAnswers {
    pub carbon_offsets: RawAnswer,
    pub trees_planted: RawAnswer,
    pub renewable_energy: RawAnswer,
    pub composting: RawAnswer,
}

/// The whole questionnaire. Every block is optional; an omitted block is
/// skipped entirely and does not appear in the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurveyAnswers {
    pub diet: Option<DietAnswers>,
    pub transport: Option<TransportAnswers>,
    pub travel: Option<TravelAnswers>,
    pub fashion: Option<FashionAnswers>,
    pub home: Option<HomeAnswers>,
    pub lifestyle: Option<LifestyleAnswers>,
    pub electronics: Option<ElectronicsAnswers>,
    pub waste: Option<WasteAnswers>,
    pub offsetting: Option<OffsettingAnswers>,
}

impl SurveyAnswers {
    /// Deserialize from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Number of category blocks present in the request.
    pub fn populated_blocks(&self) -> usize {
        [
            self.diet.is_some(),
            self.transport.is_some(),
            self.travel.is_some(),
            self.fashion.is_some(),
            self.home.is_some(),
            self.lifestyle.is_some(),
            self.electronics.is_some(),
            self.waste.is_some(),
            self.offsetting.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
