//! Material recovery facility.

use serde::{Deserialize, Serialize};

use crate::factors::Recyclable;
use crate::params::EmissionParams;
use crate::units::{pct, KG_PER_TONNE};

use super::composition::RecyclableComposition;
use super::operational::{operational_co2e, FuelUse};
use super::result::{no_throughput, EmissionResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecyclingInput {
    /// Tonnes/month of recyclables collected.
    pub total_recyclables: f64,
    pub composition: RecyclableComposition,
    pub fuel_use: Option<FuelUse>,
    /// kWh/month.
    pub electricity_use: f64,
    /// Share of collected material actually recycled, in percent.
    pub recyclability: f64,
}

impl Default for RecyclingInput {
    fn default() -> Self {
        Self {
            total_recyclables: 0.0,
            composition: RecyclableComposition::default(),
            fuel_use: None,
            electricity_use: 0.0,
            recyclability: 100.0,
        }
    }
}

/// Net emissions per tonne collected. Usually negative.
pub fn calculate_recycling(input: &RecyclingInput, params: &EmissionParams) -> EmissionResult {
    let collected = input.total_recyclables;
    if no_throughput(collected) {
        return EmissionResult::zero();
    }

    let operational = operational_co2e(input.fuel_use.as_ref(), input.electricity_use, params);

    let avoided: f64 = input
        .composition
        .iter()
        .map(|(material, percent)| {
            let recycled_tonnes = pct(percent) * collected * pct(input.recyclability);
            recycled_tonnes * KG_PER_TONNE * Recyclable::avoided_co2e_for_key(material)
        })
        .sum();

    let direct = operational / collected;
    EmissionResult::with_credit(direct, 0.0, 0.0, direct, avoided / collected)
}
