//! Landfill methane via a simplified IPCC first-order-decay estimate.
//!
//! This is a single-period steady-state approximation: each month's deposit
//! is assumed to release its full methane potential, instead of tracking a
//! multi-year decaying waste stock. A full Tier-2 model would need a time
//! series of annual deposits and would replace only this function.

use serde::{Deserialize, Serialize};

use crate::params::EmissionParams;
use crate::units::{pct, CH4_PER_C, KG_PER_GG, MONTHS_PER_YEAR, TONNES_PER_GG};

use super::composition::WasteComposition;
use super::operational::{operational_co2e, FuelUse};
use super::result::{no_throughput, EmissionResult};

/// Fraction of DOC that decomposes (IPCC default).
pub const DOCF: f64 = 0.5;

/// Fraction of CH4 in generated landfill gas (IPCC default).
pub const CH4_FRACTION_F: f64 = 0.5;

/// Default methane correction factor (unmanaged, deep site).
pub const DEFAULT_MCF: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandfillInput {
    /// Tonnes deposited per month.
    pub waste_per_month: f64,
    /// Methane correction factor (0-1).
    pub mcf: f64,
    /// Fraction of methane oxidised in the cover soil (0-1).
    pub oxidation: f64,
    /// Landfill gas recovery efficiency in percent.
    pub gas_recovery: f64,
    pub composition: WasteComposition,
    pub fuel_use: Option<FuelUse>,
}

impl Default for LandfillInput {
    fn default() -> Self {
        Self {
            waste_per_month: 0.0,
            mcf: DEFAULT_MCF,
            oxidation: 0.0,
            gas_recovery: 0.0,
            composition: WasteComposition::default(),
            fuel_use: None,
        }
    }
}

/// kg CH4 generated per month before recovery and oxidation.
pub(crate) fn methane_generated_kg(input: &LandfillInput) -> f64 {
    let waste_gg_per_year = input.waste_per_month * MONTHS_PER_YEAR / TONNES_PER_GG;
    let ddocm = waste_gg_per_year * input.composition.weighted_doc() * DOCF * input.mcf;
    let ch4_gg_per_year = ddocm * CH4_PER_C * CH4_FRACTION_F;
    ch4_gg_per_year * KG_PER_GG / MONTHS_PER_YEAR
}

/// Emissions per tonne deposited. N2O is not modelled for landfill.
pub fn calculate_landfill(input: &LandfillInput, params: &EmissionParams) -> EmissionResult {
    let waste = input.waste_per_month;
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    let emitted = methane_generated_kg(input)
        * (1.0 - pct(input.gas_recovery))
        * (1.0 - input.oxidation);
    let ch4_per_tonne = emitted / waste;
    let operational = operational_co2e(input.fuel_use.as_ref(), 0.0, params) / waste;

    let total = ch4_per_tonne * params.gwp.ch4 + operational;
    EmissionResult::new(operational, ch4_per_tonne, 0.0, total)
}
