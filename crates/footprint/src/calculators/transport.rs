//! Transport: public transport, incidental car use and ride-hailing.
//!
//! Trip distance comes from commute minutes at a fixed average speed. Car
//! use is not asked directly; it is estimated as
//! `max(0, 50 − publicTransportDays × 10)` km per week and priced at the
//! household car's factor. Carpooling is a reduction on the car share,
//! subtracted last.

use crate::factors::{FactorTable, TransportFactors};
use crate::normalize::{
    normalize_count, normalize_quantity, Bucket, CarType, CarpoolFrequency, CommuteDuration,
    RideHailFrequency, TransitMode,
};
use crate::survey::TransportAnswers;

use super::subtotal::{annualized, Subtotal};

const DAYS_PER_WEEK: f64 = 7.0;

/// `distance_km = minutes / 60 × average speed`.
pub fn trip_distance_km(minutes: f64, average_speed_kmh: f64) -> f64 {
    minutes / 60.0 * average_speed_kmh
}

/// Weekly private-car kilometres not replaced by public transport.
pub fn estimated_weekly_car_km(public_transport_days: f64, f: &TransportFactors) -> f64 {
    (f.baseline_weekly_car_km - public_transport_days * f.car_km_saved_per_transit_day).max(0.0)
}

pub fn transit_kg_per_km(mode: TransitMode, f: &TransportFactors) -> f64 {
    match mode {
        TransitMode::Mrt => f.mrt_kg_per_km,
        TransitMode::Bus => f.bus_kg_per_km,
        TransitMode::Mixed => f.mixed_transit_kg_per_km,
    }
}

pub fn car_kg_per_km(car: CarType, f: &TransportFactors) -> f64 {
    match car {
        CarType::None => 0.0,
        CarType::Petrol => f.petrol_kg_per_km,
        CarType::Diesel => f.diesel_kg_per_km,
        CarType::Hybrid => f.hybrid_kg_per_km,
        CarType::Electric => f.electric_kg_per_km,
    }
}

pub fn transport_subtotal(answers: &TransportAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.transport;
    let weeks = table.conversions.weeks_per_year;

    let days = normalize_count(&answers.public_transport_days).min(DAYS_PER_WEEK);
    let minutes = normalize_quantity::<CommuteDuration>(&answers.commute_duration);
    let trip_km = trip_distance_km(minutes, f.average_speed_kmh);
    let mode = TransitMode::normalize(&answers.transit_mode);
    let public_kg = annualized(
        days * f.trips_per_transit_day * trip_km,
        transit_kg_per_km(mode, f),
        weeks,
    );

    let car = CarType::normalize(&answers.car_type);
    let car_kg = annualized(
        estimated_weekly_car_km(days, f),
        car_kg_per_km(car, f),
        weeks,
    );

    let rides = normalize_quantity::<RideHailFrequency>(&answers.grab_rides);
    let ride_hail_kg = annualized(rides * f.ride_hail_trip_km, f.ride_hail_kg_per_km, weeks);

    let carpool_share = normalize_quantity::<CarpoolFrequency>(&answers.carpool);

    Subtotal::new(public_kg + car_kg + ride_hail_kg).reduce("carpool", carpool_share * car_kg)
}
