//! Factor Table: emission coefficients, reference averages and unit conversions.
//!
//! Pure data. The table is built once (compiled-in defaults, optionally
//! overridden from JSON at startup), inserted as a Bevy resource and only ever
//! read afterwards.

pub mod constants;
pub mod table;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use table::*;
