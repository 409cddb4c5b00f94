//! Controlled incineration with optional energy recovery.

use serde::{Deserialize, Serialize};

use crate::factors::FuelType;
use crate::params::EmissionParams;
use crate::units::{mj_to_kwh, pct};

use super::combustion::fossil_co2_kg;
use super::composition::WasteComposition;
use super::operational::{operational_co2e, FuelUse};
use super::result::{no_throughput, EmissionResult};

/// Oxidation factor of a controlled incinerator (fraction).
pub const INCINERATION_OXIDATION: f64 = 1.0;

/// kg N2O per tonne incinerated.
pub const INCINERATION_N2O_KG_PER_TONNE: f64 = 0.05;

/// Average waste energy content, MJ per tonne.
pub const WASTE_ENERGY_MJ_PER_TONNE: f64 = 10_000.0;

/// Which energy streams the plant recovers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyRecoveryMode {
    #[default]
    NoEnergy,
    Electricity,
    Heat,
    Both,
}

impl EnergyRecoveryMode {
    fn recovers_electricity(self) -> bool {
        matches!(self, Self::Electricity | Self::Both)
    }

    fn recovers_heat(self) -> bool {
        matches!(self, Self::Heat | Self::Both)
    }
}

/// Conversion efficiencies and the on-site consumed share of each stream.
/// Only the exported share earns an avoided-emission credit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyRecovery {
    /// Percent.
    pub electricity_efficiency: f64,
    /// Percent of generated electricity used on site.
    pub electricity_onsite_percentage: f64,
    /// Percent.
    pub heat_efficiency: f64,
    /// Percent of recovered heat used on site.
    pub heat_onsite_percentage: f64,
    /// Fuel displaced by exported heat.
    pub replaced_fuel_type: FuelType,
}

impl Default for EnergyRecovery {
    fn default() -> Self {
        Self {
            electricity_efficiency: 25.0,
            electricity_onsite_percentage: 10.0,
            heat_efficiency: 60.0,
            heat_onsite_percentage: 20.0,
            replaced_fuel_type: FuelType::Diesel,
        }
    }
}

impl EnergyRecovery {
    /// kg CO2e avoided per tonne incinerated.
    fn avoided_per_tonne(&self, mode: EnergyRecoveryMode, params: &EmissionParams) -> f64 {
        let mut avoided = 0.0;
        if mode.recovers_electricity() {
            let generated = mj_to_kwh(WASTE_ENERGY_MJ_PER_TONNE, pct(self.electricity_efficiency));
            let exported = generated * (1.0 - pct(self.electricity_onsite_percentage));
            avoided += params.electricity_co2e(exported);
        }
        if mode.recovers_heat() {
            let heat = WASTE_ENERGY_MJ_PER_TONNE * pct(self.heat_efficiency);
            let exported = heat * (1.0 - pct(self.heat_onsite_percentage));
            avoided += self.replaced_fuel_type.factor().displaced_co2(exported);
        }
        avoided
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncinerationInput {
    pub incineration_type: EnergyRecoveryMode,
    /// Tonnes/month.
    pub waste_amount: f64,
    pub fuel_use: Option<FuelUse>,
    /// kWh/month.
    pub electricity_use: f64,
    pub composition: WasteComposition,
    pub energy_recovery: EnergyRecovery,
}

/// Net emissions per tonne incinerated.
pub fn calculate_incineration(input: &IncinerationInput, params: &EmissionParams) -> EmissionResult {
    let waste = input.waste_amount;
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    let fossil = fossil_co2_kg(&input.composition, waste, INCINERATION_OXIDATION);
    let n2o = waste * INCINERATION_N2O_KG_PER_TONNE;
    let operational = operational_co2e(input.fuel_use.as_ref(), input.electricity_use, params);

    let direct = (fossil + operational + n2o * params.gwp.n2o) / waste;
    let avoided = input
        .energy_recovery
        .avoided_per_tonne(input.incineration_type, params);

    EmissionResult::with_credit(
        (fossil + operational) / waste,
        0.0,
        n2o / waste,
        direct,
        avoided,
    )
}
