//! Compiled-in emission coefficients, reference averages and unit conversions.
//!
//! All coefficients are kg CO2e unless the name says otherwise. These are the
//! defaults behind [`super::FactorTable::default`]; a deployment may override
//! any of them once at startup, never afterwards.

/// Bump whenever a default value below changes.
pub const FACTOR_TABLE_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Diet
// ---------------------------------------------------------------------------

/// One meal containing meat.
pub const MEAT_MEAL_KG: f64 = 2.5;
/// One hawker-centre meal.
pub const HAWKER_VISIT_KG: f64 = 1.5;
/// One cup of bubble tea, cup and sealing film included.
pub const BUBBLE_TEA_CUP_KG: f64 = 0.5;
/// One food-delivery order (packaging plus the delivery ride).
pub const FOOD_DELIVERY_KG: f64 = 1.2;

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Average door-to-door speed used to turn commute minutes into kilometres.
pub const AVERAGE_SPEED_KMH: f64 = 25.0;
/// A public-transport day is an outbound and a return trip.
pub const TRIPS_PER_TRANSIT_DAY: f64 = 2.0;
pub const MRT_KG_PER_KM: f64 = 0.035;
pub const BUS_KG_PER_KM: f64 = 0.07;
/// Blend for riders who split between rail and bus.
pub const MIXED_TRANSIT_KG_PER_KM: f64 = 0.05;
/// Weekly private-car kilometres assumed for someone who never takes transit.
pub const BASELINE_WEEKLY_CAR_KM: f64 = 50.0;
/// Car kilometres avoided for each day spent on public transport.
pub const CAR_KM_SAVED_PER_TRANSIT_DAY: f64 = 10.0;
pub const PETROL_KG_PER_KM: f64 = 0.19;
pub const DIESEL_KG_PER_KM: f64 = 0.17;
pub const HYBRID_KG_PER_KM: f64 = 0.11;
pub const ELECTRIC_KG_PER_KM: f64 = 0.06;
pub const RIDE_HAIL_TRIP_KM: f64 = 10.0;
pub const RIDE_HAIL_KG_PER_KM: f64 = 0.19;

// ---------------------------------------------------------------------------
// Travel
// ---------------------------------------------------------------------------

/// Return flight within the region (up to ~4 hours each way).
pub const SHORT_HAUL_FLIGHT_KG: f64 = 250.0;
/// Return intercontinental flight.
pub const LONG_HAUL_FLIGHT_KG: f64 = 1800.0;
pub const HOTEL_NIGHT_KG: f64 = 20.0;

// ---------------------------------------------------------------------------
// Fashion
// ---------------------------------------------------------------------------

pub const CLOTHING_ITEM_KG: f64 = 15.0;
/// Packaging and last-mile delivery of one online parcel.
pub const ONLINE_PARCEL_KG: f64 = 1.5;

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

/// Grid emission factor (kg per kWh).
pub const GRID_KG_PER_KWH: f64 = 0.4168;
pub const AIRCON_KWH_PER_HOUR: f64 = 1.0;
/// Electric water heater draw per shower minute.
pub const SHOWER_KWH_PER_MINUTE: f64 = 0.1;
/// Applied to the whole home subtotal when the household reports energy-saving habits.
pub const ENERGY_SAVING_MULTIPLIER: f64 = 0.85;

// ---------------------------------------------------------------------------
// Lifestyle
// ---------------------------------------------------------------------------

/// One mall, cinema or similar air-conditioned outing.
pub const OUTING_KG: f64 = 3.0;
pub const GYM_SESSION_KG: f64 = 1.0;
pub const STREAMING_KG_PER_HOUR: f64 = 0.036;
pub const SMALL_PET_KG_PER_YEAR: f64 = 50.0;
pub const CAT_KG_PER_YEAR: f64 = 310.0;
pub const DOG_KG_PER_YEAR: f64 = 770.0;

// ---------------------------------------------------------------------------
// Electronics
// ---------------------------------------------------------------------------

/// Embodied emissions of a new smartphone.
pub const PHONE_KG: f64 = 70.0;
pub const LAPTOP_KG: f64 = 300.0;
pub const GADGET_KG: f64 = 50.0;
pub const DEVICE_KWH_PER_HOUR: f64 = 0.05;

// ---------------------------------------------------------------------------
// Waste
// ---------------------------------------------------------------------------

pub const TAKEAWAY_CONTAINER_KG: f64 = 0.1;
/// Plastic cutlery is derived from takeaway meals, one set per meal.
pub const CUTLERY_SETS_PER_TAKEAWAY: f64 = 1.0;
pub const PLASTIC_CUTLERY_KG: f64 = 0.02;
pub const PLASTIC_BAG_KG: f64 = 0.033;
/// One bag of general waste sent to incineration.
pub const TRASH_BAG_KG: f64 = 1.5;
/// Weekly saving for someone who always brings a reusable bag.
pub const REUSABLE_BAG_WEEKLY_SAVING_KG: f64 = 0.25;
/// Weekly saving for someone who always brings a reusable food container.
pub const REUSABLE_CONTAINER_WEEKLY_SAVING_KG: f64 = 0.5;

// ---------------------------------------------------------------------------
// Offsetting (credits, subtracted from the total)
// ---------------------------------------------------------------------------

pub const OFFSET_TONNE_KG: f64 = 1000.0;
/// Annual absorption of one planted tree.
pub const TREE_KG_PER_YEAR: f64 = 22.0;
pub const RENEWABLE_ENERGY_KG: f64 = 400.0;
pub const COMPOSTING_KG: f64 = 50.0;

// ---------------------------------------------------------------------------
// Population reference averages (tonnes per person per year)
// ---------------------------------------------------------------------------

pub const SINGAPORE_AVERAGE_TONNES: f64 = 8.56;
pub const GLOBAL_AVERAGE_TONNES: f64 = 4.7;
pub const SUSTAINABLE_TARGET_TONNES: f64 = 2.0;

// ---------------------------------------------------------------------------
// Unit conversions
// ---------------------------------------------------------------------------

pub const KG_TO_TONNES: f64 = 0.001;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

// ---------------------------------------------------------------------------
// Override bounds
// ---------------------------------------------------------------------------

/// Upper bound on any overridden coefficient. Together with the cap on
/// free-numeric answers it keeps every subtotal finite.
pub const MAX_FACTOR_VALUE: f64 = 1.0e6;
