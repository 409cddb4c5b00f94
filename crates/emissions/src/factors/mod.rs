//! Static factor tables keyed by the material and fuel vocabulary of the
//! pathway calculators.
//!
//! The scenario layer keeps its own coarser table in
//! [`crate::scenario::constants`]; the two are calibrated independently and
//! neither is derived from the other.

pub mod fuel;
pub mod materials;


pub use fuel::{CombustionGases, FuelEmissionFactor, FuelType};
pub use materials::{
    fertilizer_co2e_per_tonne_compost, CombustionParams, FertilizerNutrient, Recyclable,
    WasteFraction, FERTILIZER_NUTRIENTS,
};
