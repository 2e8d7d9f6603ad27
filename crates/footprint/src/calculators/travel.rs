//! Travel: flights scaled by cabin class, plus hotel nights. Already per year.

use crate::factors::FactorTable;
use crate::normalize::{
    normalize_multiplier, normalize_quantity, FlightClass, HotelNights, LongHaulFlights,
    ShortHaulFlights,
};
use crate::survey::TravelAnswers;

use super::subtotal::Subtotal;

pub fn travel_subtotal(answers: &TravelAnswers, table: &FactorTable) -> Subtotal {
    let f = &table.travel;

    let flights_kg = normalize_quantity::<ShortHaulFlights>(&answers.short_haul_flights)
        * f.short_haul_flight_kg
        + normalize_quantity::<LongHaulFlights>(&answers.long_haul_flights)
            * f.long_haul_flight_kg;
    let hotel_kg = normalize_quantity::<HotelNights>(&answers.hotel_nights) * f.hotel_night_kg;

    Subtotal::new(flights_kg)
        .scale(
            "flight_class",
            normalize_multiplier::<FlightClass>(&answers.flight_class),
        )
        .add("hotel_nights", hotel_kg)
}
