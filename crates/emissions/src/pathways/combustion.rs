//! IPCC fossil-CO2 combustion formula shared by incineration and open burning.

use crate::factors::WasteFraction;
use crate::units::{pct, CO2_PER_C, KG_PER_TONNE};

use super::composition::WasteComposition;

/// kg fossil CO2 from burning `waste_tonnes` of the given composition.
///
/// `CO2 = Σ amount(kg) × DM × TC × FCF × OF × 44/12`, with the oxidation
/// factor `oxidation` given as a fraction.
pub fn fossil_co2_kg(composition: &WasteComposition, waste_tonnes: f64, oxidation: f64) -> f64 {
    composition
        .iter()
        .map(|(key, percent)| {
            let amount_kg = pct(percent) * waste_tonnes * KG_PER_TONNE;
            let params = WasteFraction::combustion_for_key(key);
            amount_kg * params.fossil_carbon_fraction() * oxidation * CO2_PER_C
        })
        .sum()
}
