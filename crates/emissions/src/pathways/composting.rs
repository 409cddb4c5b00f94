//! Aerobic composting of food and garden waste.

use serde::{Deserialize, Serialize};

use crate::factors::fertilizer_co2e_per_tonne_compost;
use crate::params::EmissionParams;
use crate::units::{pct, G_PER_KG, KG_PER_TONNE};

use super::operational::{operational_co2e, FuelUse};
use super::result::{no_throughput, EmissionResult};

/// g CH4 per kg organic waste (wet basis), IPCC default.
pub const COMPOSTING_CH4_G_PER_KG: f64 = 4.0;

/// g N2O per kg organic waste (wet basis), IPCC default.
pub const COMPOSTING_N2O_G_PER_KG: f64 = 0.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompostingInput {
    /// Tonnes/month.
    pub food_waste: f64,
    /// Tonnes/month.
    pub garden_waste: f64,
    pub fuel_use: Option<FuelUse>,
    /// Tonnes of compost produced per month.
    pub compost_production: f64,
    /// Share of compost applied in agriculture, in percent.
    pub compost_use_percentage: f64,
}

impl Default for CompostingInput {
    fn default() -> Self {
        Self {
            food_waste: 0.0,
            garden_waste: 0.0,
            fuel_use: None,
            compost_production: 0.0,
            compost_use_percentage: 100.0,
        }
    }
}

impl CompostingInput {
    pub fn total_waste(&self) -> f64 {
        self.food_waste + self.garden_waste
    }
}

/// kg CH4 and kg N2O released by biologically treating `tonnes` of organics.
pub(crate) fn biological_treatment_gases(tonnes: f64) -> (f64, f64) {
    let kg = tonnes * KG_PER_TONNE;
    (
        kg * COMPOSTING_CH4_G_PER_KG / G_PER_KG,
        kg * COMPOSTING_N2O_G_PER_KG / G_PER_KG,
    )
}

/// kg CO2e of mineral fertilizer displaced by applying part of the compost.
pub(crate) fn fertilizer_credit_kg(compost_tonnes: f64, use_percentage: f64) -> f64 {
    let compost_used = compost_tonnes * pct(use_percentage);
    if compost_used > 0.0 {
        compost_used * fertilizer_co2e_per_tonne_compost()
    } else {
        0.0
    }
}

/// Net emissions per tonne of organics composted.
pub fn calculate_composting(input: &CompostingInput, params: &EmissionParams) -> EmissionResult {
    let waste = input.total_waste();
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    let (ch4, n2o) = biological_treatment_gases(waste);
    let process = params.gwp.co2e(0.0, ch4, n2o);
    let operational = operational_co2e(input.fuel_use.as_ref(), 0.0, params);

    let direct = (process + operational) / waste;
    let avoided =
        fertilizer_credit_kg(input.compost_production, input.compost_use_percentage) / waste;

    EmissionResult::with_credit(
        operational / waste,
        ch4 / waste,
        n2o / waste,
        direct,
        avoided,
    )
}
