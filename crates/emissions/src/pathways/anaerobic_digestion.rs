//! Anaerobic digestion with biogas recovery.

use serde::{Deserialize, Serialize};

use crate::factors::FuelType;
use crate::params::EmissionParams;
use crate::units::{mj_to_kwh, G_PER_KG, KG_PER_TONNE};

use super::operational::{operational_co2e, FuelUse};
use super::result::{no_throughput, EmissionResult};

/// Unavoidable CH4 leakage, g per kg wet waste.
pub const AD_CH4_LEAKAGE_G_PER_KG: f64 = 0.8;

/// m³ biogas per tonne of organic waste.
pub const BIOGAS_M3_PER_TONNE: f64 = 150.0;

/// Methane share of biogas by volume.
pub const BIOGAS_CH4_CONTENT: f64 = 0.6;

/// MJ per m³ of methane.
pub const CH4_HEATING_VALUE_MJ_PER_M3: f64 = 37.0;

/// Electrical efficiency of biogas gensets.
pub const BIOGAS_ELECTRIC_EFFICIENCY: f64 = 0.35;

/// Share of biogas energy sent to each route under [`BiogasUtilization::Both`].
const COMBINED_SPLIT: f64 = 0.5;

/// How recovered biogas is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiogasUtilization {
    /// Burned for heat, displacing LPG.
    #[default]
    Thermal,
    /// Burned in a genset, displacing grid electricity.
    Electricity,
    /// Half heat, half electricity.
    Both,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnaerobicDigestionInput {
    /// Tonnes/month.
    pub food_waste: f64,
    /// Tonnes/month.
    pub garden_waste: f64,
    pub fuel_use: Option<FuelUse>,
    /// kWh/month.
    pub electricity_use: f64,
    pub biogas_utilization: BiogasUtilization,
}

impl AnaerobicDigestionInput {
    pub fn total_waste(&self) -> f64 {
        self.food_waste + self.garden_waste
    }
}

/// MJ of methane energy in the biogas from `tonnes` of feedstock.
pub fn biogas_energy_mj(tonnes: f64) -> f64 {
    tonnes * BIOGAS_M3_PER_TONNE * BIOGAS_CH4_CONTENT * CH4_HEATING_VALUE_MJ_PER_M3
}

fn avoided_kg(energy_mj: f64, utilization: BiogasUtilization, params: &EmissionParams) -> f64 {
    let lpg = FuelType::Lpg.factor();
    match utilization {
        BiogasUtilization::Thermal => lpg.displaced_co2(energy_mj),
        BiogasUtilization::Electricity => {
            params.electricity_co2e(mj_to_kwh(energy_mj, BIOGAS_ELECTRIC_EFFICIENCY))
        }
        BiogasUtilization::Both => {
            let kwh = mj_to_kwh(energy_mj, BIOGAS_ELECTRIC_EFFICIENCY) * COMBINED_SPLIT;
            params.electricity_co2e(kwh) + lpg.displaced_co2(energy_mj * COMBINED_SPLIT)
        }
    }
}

/// Net emissions per tonne digested.
pub fn calculate_anaerobic_digestion(
    input: &AnaerobicDigestionInput,
    params: &EmissionParams,
) -> EmissionResult {
    let waste = input.total_waste();
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    let leakage = waste * KG_PER_TONNE * AD_CH4_LEAKAGE_G_PER_KG / G_PER_KG;
    let operational = operational_co2e(input.fuel_use.as_ref(), input.electricity_use, params);
    let direct = (leakage * params.gwp.ch4 + operational) / waste;

    let avoided = avoided_kg(biogas_energy_mj(waste), input.biogas_utilization, params) / waste;

    EmissionResult::with_credit(operational / waste, leakage / waste, 0.0, direct, avoided)
}
