//! The `FactorTable` resource: every coefficient the calculators read.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::category::Category;

// ---------------------------------------------------------------------------
// Per-domain coefficient groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietFactors {
    pub meat_meal_kg: f64,
    pub hawker_visit_kg: f64,
    pub bubble_tea_cup_kg: f64,
    pub food_delivery_kg: f64,
}

impl Default for DietFactors {
    fn default() -> Self {
        Self {
            meat_meal_kg: MEAT_MEAL_KG,
            hawker_visit_kg: HAWKER_VISIT_KG,
            bubble_tea_cup_kg: BUBBLE_TEA_CUP_KG,
            food_delivery_kg: FOOD_DELIVERY_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportFactors {
    pub average_speed_kmh: f64,
    pub trips_per_transit_day: f64,
    pub mrt_kg_per_km: f64,
    pub bus_kg_per_km: f64,
    pub mixed_transit_kg_per_km: f64,
    pub baseline_weekly_car_km: f64,
    pub car_km_saved_per_transit_day: f64,
    pub petrol_kg_per_km: f64,
    pub diesel_kg_per_km: f64,
    pub hybrid_kg_per_km: f64,
    pub electric_kg_per_km: f64,
    pub ride_hail_trip_km: f64,
    pub ride_hail_kg_per_km: f64,
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            average_speed_kmh: AVERAGE_SPEED_KMH,
            trips_per_transit_day: TRIPS_PER_TRANSIT_DAY,
            mrt_kg_per_km: MRT_KG_PER_KM,
            bus_kg_per_km: BUS_KG_PER_KM,
            mixed_transit_kg_per_km: MIXED_TRANSIT_KG_PER_KM,
            baseline_weekly_car_km: BASELINE_WEEKLY_CAR_KM,
            car_km_saved_per_transit_day: CAR_KM_SAVED_PER_TRANSIT_DAY,
            petrol_kg_per_km: PETROL_KG_PER_KM,
            diesel_kg_per_km: DIESEL_KG_PER_KM,
            hybrid_kg_per_km: HYBRID_KG_PER_KM,
            electric_kg_per_km: ELECTRIC_KG_PER_KM,
            ride_hail_trip_km: RIDE_HAIL_TRIP_KM,
            ride_hail_kg_per_km: RIDE_HAIL_KG_PER_KM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelFactors {
    pub short_haul_flight_kg: f64,
    pub long_haul_flight_kg: f64,
    pub hotel_night_kg: f64,
}

impl Default for TravelFactors {
    fn default() -> Self {
        Self {
            short_haul_flight_kg: SHORT_HAUL_FLIGHT_KG,
            long_haul_flight_kg: LONG_HAUL_FLIGHT_KG,
            hotel_night_kg: HOTEL_NIGHT_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FashionFactors {
    pub clothing_item_kg: f64,
    pub online_parcel_kg: f64,
}

impl Default for FashionFactors {
    fn default() -> Self {
        Self {
            clothing_item_kg: CLOTHING_ITEM_KG,
            online_parcel_kg: ONLINE_PARCEL_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeFactors {
    pub grid_kg_per_kwh: f64,
    pub aircon_kwh_per_hour: f64,
    pub shower_kwh_per_minute: f64,
    pub energy_saving_multiplier: f64,
}

impl Default for HomeFactors {
    fn default() -> Self {
        Self {
            grid_kg_per_kwh: GRID_KG_PER_KWH,
            aircon_kwh_per_hour: AIRCON_KWH_PER_HOUR,
            shower_kwh_per_minute: SHOWER_KWH_PER_MINUTE,
            energy_saving_multiplier: ENERGY_SAVING_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleFactors {
    pub outing_kg: f64,
    pub gym_session_kg: f64,
    pub streaming_kg_per_hour: f64,
    pub small_pet_kg_per_year: f64,
    pub cat_kg_per_year: f64,
    pub dog_kg_per_year: f64,
}

impl Default for LifestyleFactors {
    fn default() -> Self {
        Self {
            outing_kg: OUTING_KG,
            gym_session_kg: GYM_SESSION_KG,
            streaming_kg_per_hour: STREAMING_KG_PER_HOUR,
            small_pet_kg_per_year: SMALL_PET_KG_PER_YEAR,
            cat_kg_per_year: CAT_KG_PER_YEAR,
            dog_kg_per_year: DOG_KG_PER_YEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectronicsFactors {
    pub phone_kg: f64,
    pub laptop_kg: f64,
    pub gadget_kg: f64,
    pub device_kwh_per_hour: f64,
}

impl Default for ElectronicsFactors {
    fn default() -> Self {
        Self {
            phone_kg: PHONE_KG,
            laptop_kg: LAPTOP_KG,
            gadget_kg: GADGET_KG,
            device_kwh_per_hour: DEVICE_KWH_PER_HOUR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteFactors {
    pub takeaway_container_kg: f64,
    pub cutlery_sets_per_takeaway: f64,
    pub plastic_cutlery_kg: f64,
    pub plastic_bag_kg: f64,
    pub trash_bag_kg: f64,
    pub reusable_bag_weekly_saving_kg: f64,
    pub reusable_container_weekly_saving_kg: f64,
}

impl Default for WasteFactors {
    fn default() -> Self {
        Self {
            takeaway_container_kg: TAKEAWAY_CONTAINER_KG,
            cutlery_sets_per_takeaway: CUTLERY_SETS_PER_TAKEAWAY,
            plastic_cutlery_kg: PLASTIC_CUTLERY_KG,
            plastic_bag_kg: PLASTIC_BAG_KG,
            trash_bag_kg: TRASH_BAG_KG,
            reusable_bag_weekly_saving_kg: REUSABLE_BAG_WEEKLY_SAVING_KG,
            reusable_container_weekly_saving_kg: REUSABLE_CONTAINER_WEEKLY_SAVING_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsettingFactors {
    pub offset_tonne_kg: f64,
    pub tree_kg_per_year: f64,
    pub renewable_energy_kg: f64,
    pub composting_kg: f64,
}

impl Default for OffsettingFactors {
    fn default() -> Self {
        Self {
            offset_tonne_kg: OFFSET_TONNE_KG,
            tree_kg_per_year: TREE_KG_PER_YEAR,
            renewable_energy_kg: RENEWABLE_ENERGY_KG,
            composting_kg: COMPOSTING_KG,
        }
    }
}

/// Per-capita reference footprints the result is positioned against (tonnes/year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceAverages {
    pub singapore_average_tonnes: f64,
    pub global_average_tonnes: f64,
    /// Shown to clients next to the averages; not part of the percentile.
    pub sustainable_target_tonnes: f64,
}

impl Default for ReferenceAverages {
    fn default() -> Self {
        Self {
            singapore_average_tonnes: SINGAPORE_AVERAGE_TONNES,
            global_average_tonnes: GLOBAL_AVERAGE_TONNES,
            sustainable_target_tonnes: SUSTAINABLE_TARGET_TONNES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversions {
    pub kg_to_tonnes: f64,
    pub days_per_year: f64,
    pub weeks_per_year: f64,
    pub months_per_year: f64,
}

impl Default for Conversions {
    fn default() -> Self {
        Self {
            kg_to_tonnes: KG_TO_TONNES,
            days_per_year: DAYS_PER_YEAR,
            weeks_per_year: WEEKS_PER_YEAR,
            months_per_year: MONTHS_PER_YEAR,
        }
    }
}

// ---------------------------------------------------------------------------
// FactorTable resource
// ---------------------------------------------------------------------------

/// Immutable emission-factor table, loaded once at process start.
///
/// Calculators receive it by reference. The same instance is serialized
/// verbatim for the read-only `factors` endpoint, so clients always see the
/// numbers the engine actually used.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorTable {
    pub version: u32,
    pub diet: DietFactors,
    pub transport: TransportFactors,
    pub travel: TravelFactors,
    pub fashion: FashionFactors,
    pub home: HomeFactors,
    pub lifestyle: LifestyleFactors,
    pub electronics: ElectronicsFactors,
    pub waste: WasteFactors,
    pub offsetting: OffsettingFactors,
    pub references: ReferenceAverages,
    pub conversions: Conversions,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self {
            version: FACTOR_TABLE_VERSION,
            diet: DietFactors::default(),
            transport: TransportFactors::default(),
            travel: TravelFactors::default(),
            fashion: FashionFactors::default(),
            home: HomeFactors::default(),
            lifestyle: LifestyleFactors::default(),
            electronics: ElectronicsFactors::default(),
            waste: WasteFactors::default(),
            offsetting: OffsettingFactors::default(),
            references: ReferenceAverages::default(),
            conversions: Conversions::default(),
        }
    }
}

/// One row of the flattened table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionFactor {
    pub domain: Category,
    pub key: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

fn factor(domain: Category, key: &'static str, unit: &'static str, value: f64) -> EmissionFactor {
    EmissionFactor {
        domain,
        key,
        unit,
        value,
    }
}

impl FactorTable {
    /// Flattened view of every coefficient, in calculator order.
    pub fn entries(&self) -> Vec<EmissionFactor> {
        use Category::*;
        let d = &self.diet;
        let t = &self.transport;
        let tr = &self.travel;
        let f = &self.fashion;
        let h = &self.home;
        let l = &self.lifestyle;
        let e = &self.electronics;
        let w = &self.waste;
        let o = &self.offsetting;
        vec![
            factor(Diet, "meat_meal_kg", "kg/meal", d.meat_meal_kg),
            factor(Diet, "hawker_visit_kg", "kg/visit", d.hawker_visit_kg),
            factor(Diet, "bubble_tea_cup_kg", "kg/cup", d.bubble_tea_cup_kg),
            factor(Diet, "food_delivery_kg", "kg/order", d.food_delivery_kg),
            factor(Transport, "average_speed_kmh", "km/h", t.average_speed_kmh),
            factor(Transport, "trips_per_transit_day", "trips/day", t.trips_per_transit_day),
            factor(Transport, "mrt_kg_per_km", "kg/km", t.mrt_kg_per_km),
            factor(Transport, "bus_kg_per_km", "kg/km", t.bus_kg_per_km),
            factor(Transport, "mixed_transit_kg_per_km", "kg/km", t.mixed_transit_kg_per_km),
            factor(Transport, "baseline_weekly_car_km", "km/week", t.baseline_weekly_car_km),
            factor(Transport, "car_km_saved_per_transit_day", "km/day", t.car_km_saved_per_transit_day),
            factor(Transport, "petrol_kg_per_km", "kg/km", t.petrol_kg_per_km),
            factor(Transport, "diesel_kg_per_km", "kg/km", t.diesel_kg_per_km),
            factor(Transport, "hybrid_kg_per_km", "kg/km", t.hybrid_kg_per_km),
            factor(Transport, "electric_kg_per_km", "kg/km", t.electric_kg_per_km),
            factor(Transport, "ride_hail_trip_km", "km/ride", t.ride_hail_trip_km),
            factor(Transport, "ride_hail_kg_per_km", "kg/km", t.ride_hail_kg_per_km),
            factor(Travel, "short_haul_flight_kg", "kg/return flight", tr.short_haul_flight_kg),
            factor(Travel, "long_haul_flight_kg", "kg/return flight", tr.long_haul_flight_kg),
            factor(Travel, "hotel_night_kg", "kg/night", tr.hotel_night_kg),
            factor(Fashion, "clothing_item_kg", "kg/item", f.clothing_item_kg),
            factor(Fashion, "online_parcel_kg", "kg/parcel", f.online_parcel_kg),
            factor(Home, "grid_kg_per_kwh", "kg/kWh", h.grid_kg_per_kwh),
            factor(Home, "aircon_kwh_per_hour", "kWh/h", h.aircon_kwh_per_hour),
            factor(Home, "shower_kwh_per_minute", "kWh/min", h.shower_kwh_per_minute),
            factor(Home, "energy_saving_multiplier", "ratio", h.energy_saving_multiplier),
            factor(Lifestyle, "outing_kg", "kg/outing", l.outing_kg),
            factor(Lifestyle, "gym_session_kg", "kg/session", l.gym_session_kg),
            factor(Lifestyle, "streaming_kg_per_hour", "kg/h", l.streaming_kg_per_hour),
            factor(Lifestyle, "small_pet_kg_per_year", "kg/year", l.small_pet_kg_per_year),
            factor(Lifestyle, "cat_kg_per_year", "kg/year", l.cat_kg_per_year),
            factor(Lifestyle, "dog_kg_per_year", "kg/year", l.dog_kg_per_year),
            factor(Electronics, "phone_kg", "kg/device", e.phone_kg),
            factor(Electronics, "laptop_kg", "kg/device", e.laptop_kg),
            factor(Electronics, "gadget_kg", "kg/device", e.gadget_kg),
            factor(Electronics, "device_kwh_per_hour", "kWh/h", e.device_kwh_per_hour),
            factor(Waste, "takeaway_container_kg", "kg/container", w.takeaway_container_kg),
            factor(Waste, "cutlery_sets_per_takeaway", "sets/meal", w.cutlery_sets_per_takeaway),
            factor(Waste, "plastic_cutlery_kg", "kg/set", w.plastic_cutlery_kg),
            factor(Waste, "plastic_bag_kg", "kg/bag", w.plastic_bag_kg),
            factor(Waste, "trash_bag_kg", "kg/bag", w.trash_bag_kg),
            factor(Waste, "reusable_bag_weekly_saving_kg", "kg/week", w.reusable_bag_weekly_saving_kg),
            factor(
                Waste,
                "reusable_container_weekly_saving_kg",
                "kg/week",
                w.reusable_container_weekly_saving_kg,
            ),
            factor(Offsetting, "offset_tonne_kg", "kg/tonne", o.offset_tonne_kg),
            factor(Offsetting, "tree_kg_per_year", "kg/tree", o.tree_kg_per_year),
            factor(Offsetting, "renewable_energy_kg", "kg/year", o.renewable_energy_kg),
            factor(Offsetting, "composting_kg", "kg/year", o.composting_kg),
        ]
    }

    /// Look up a coefficient by domain and key.
    ///
    /// Returns `None` only for keys outside the documented set listed by
    /// [`FactorTable::entries`]; the fallback for such keys is the caller's call.
    pub fn lookup(&self, domain: Category, key: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|entry| entry.domain == domain && entry.key == key)
            .map(|entry| entry.value)
    }

    /// Parse a (possibly partial) JSON override; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, FactorTableError> {
        let table: FactorTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Read a JSON override file.
    pub fn load(path: &Path) -> Result<Self, FactorTableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Values an override may restate but never change: the unit conversions
    /// and the incidental private-car heuristic `max(0, 50 - days * 10)`.
    fn pinned(&self) -> [(&'static str, f64, f64); 6] {
        let c = &self.conversions;
        let t = &self.transport;
        [
            ("conversions.kg_to_tonnes", c.kg_to_tonnes, KG_TO_TONNES),
            ("conversions.days_per_year", c.days_per_year, DAYS_PER_YEAR),
            ("conversions.weeks_per_year", c.weeks_per_year, WEEKS_PER_YEAR),
            ("conversions.months_per_year", c.months_per_year, MONTHS_PER_YEAR),
            (
                "transport.baseline_weekly_car_km",
                t.baseline_weekly_car_km,
                BASELINE_WEEKLY_CAR_KM,
            ),
            (
                "transport.car_km_saved_per_transit_day",
                t.car_km_saved_per_transit_day,
                CAR_KM_SAVED_PER_TRANSIT_DAY,
            ),
        ]
    }

    /// Reject overrides that would break the engine's non-negativity, finiteness
    /// and percentile guarantees, or that change a pinned value.
    pub fn validate(&self) -> Result<(), FactorTableError> {
        for entry in self.entries() {
            if !entry.value.is_finite() || entry.value < 0.0 || entry.value > MAX_FACTOR_VALUE {
                return Err(FactorTableError::Invalid(format!(
                    "{}.{} must be a number in [0, {MAX_FACTOR_VALUE}], got {}",
                    entry.domain, entry.key, entry.value
                )));
            }
        }
        for (name, value, fixed) in self.pinned() {
            if value != fixed {
                return Err(FactorTableError::Invalid(format!(
                    "{name} is fixed at {fixed} and cannot be overridden, got {value}"
                )));
            }
        }
        let multiplier = self.home.energy_saving_multiplier;
        if multiplier <= 0.0 || multiplier > 2.0 {
            return Err(FactorTableError::Invalid(format!(
                "home.energy_saving_multiplier must be in (0, 2], got {multiplier}"
            )));
        }
        let r = &self.references;
        for (name, value) in [
            ("singapore_average_tonnes", r.singapore_average_tonnes),
            ("global_average_tonnes", r.global_average_tonnes),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FactorTableError::Invalid(format!(
                    "references.{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading a factor-table override at startup.
#[derive(Debug)]
pub enum FactorTableError {
    /// The override file could not be read.
    Io(std::io::Error),
    /// The override is not valid JSON for the table shape.
    Parse(serde_json::Error),
    /// A value is out of the range the engine relies on.
    Invalid(String),
}

impl fmt::Display for FactorTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorTableError::Io(e) => write!(f, "I/O error reading factor table: {e}"),
            FactorTableError::Parse(e) => write!(f, "Invalid factor table JSON: {e}"),
            FactorTableError::Invalid(msg) => write!(f, "Invalid factor table: {msg}"),
        }
    }
}

impl std::error::Error for FactorTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactorTableError::Io(e) => Some(e),
            FactorTableError::Parse(e) => Some(e),
            FactorTableError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for FactorTableError {
    fn from(e: std::io::Error) -> Self {
        FactorTableError::Io(e)
    }
}

impl From<serde_json::Error> for FactorTableError {
    fn from(e: serde_json::Error) -> Self {
        FactorTableError::Parse(e)
    }
}
