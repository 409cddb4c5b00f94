//! Uncontrolled open burning. No energy recovery, no credit.

use serde::{Deserialize, Serialize};

use crate::factors::WasteFraction;
use crate::params::EmissionParams;

use super::combustion::fossil_co2_kg;
use super::composition::WasteComposition;
use super::result::{no_throughput, EmissionResult};

/// Oxidation factor of open burning (fraction); combustion is incomplete.
pub const OPEN_BURNING_OXIDATION: f64 = 0.58;

/// kg CH4 per tonne burned.
pub const OPEN_BURNING_CH4_KG_PER_TONNE: f64 = 6.5;

/// kg N2O per tonne burned.
pub const OPEN_BURNING_N2O_KG_PER_TONNE: f64 = 0.1;

/// Annotation attached to every non-zero open-burning result.
pub const OPEN_BURNING_WARNING: &str =
    "Open burning produces extremely high emissions and toxic air pollutants. Strongly discouraged.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenBurningInput {
    /// Tonnes/month.
    pub waste_amount: f64,
    pub composition: WasteComposition,
}

impl Default for OpenBurningInput {
    fn default() -> Self {
        Self {
            waste_amount: 0.0,
            composition: WasteComposition::from_fractions([
                (WasteFraction::FoodWaste, 40.0),
                (WasteFraction::GardenWaste, 10.0),
                (WasteFraction::Plastics, 7.0),
                (WasteFraction::Paper, 6.0),
                (WasteFraction::Textile, 6.0),
                (WasteFraction::Leather, 5.0),
                (WasteFraction::Glass, 5.0),
                (WasteFraction::Metal, 6.0),
                (WasteFraction::Nappies, 2.0),
                (WasteFraction::Hazardous, 3.0),
                (WasteFraction::Others, 3.0),
            ]),
        }
    }
}

/// Emissions per tonne burned.
pub fn calculate_open_burning(input: &OpenBurningInput, params: &EmissionParams) -> EmissionResult {
    let waste = input.waste_amount;
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    let fossil = fossil_co2_kg(&input.composition, waste, OPEN_BURNING_OXIDATION);
    let ch4 = waste * OPEN_BURNING_CH4_KG_PER_TONNE;
    let n2o = waste * OPEN_BURNING_N2O_KG_PER_TONNE;
    let total = params.gwp.co2e(fossil, ch4, n2o);

    EmissionResult::new(fossil / waste, ch4 / waste, n2o / waste, total / waste)
        .with_warning(OPEN_BURNING_WARNING)
}
