//! Mechanical-biological treatment of mixed waste.
//!
//! Combines mechanical separation energy with composting of the
//! biodegradable fraction, and credits compost use plus optional plastic
//! recovery as refuse-derived fuel or pyrolysis oil.

use serde::{Deserialize, Serialize};

use crate::factors::FuelType;
use crate::params::EmissionParams;
use crate::units::{mj_to_kwh, pct, KG_PER_TONNE};

use super::composting::{biological_treatment_gases, fertilizer_credit_kg};
use super::operational::{operational_co2e, FuelUse};
use super::result::{no_throughput, EmissionResult};

/// MJ per kg of refuse-derived fuel.
pub const RDF_ENERGY_MJ_PER_KG: f64 = 15.0;

/// Electrical efficiency of RDF combustion.
pub const RDF_ELECTRIC_EFFICIENCY: f64 = 0.3;

/// What happens to the separated plastic fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlasticUtilization {
    #[default]
    None,
    /// Burned as refuse-derived fuel for electricity.
    Rdf,
    /// Pyrolysed to oil that displaces diesel.
    CrudeOil,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MbtInput {
    /// Tonnes/month of mixed waste received.
    pub mixed_waste: f64,
    /// Biodegradable share of the mixed waste, in percent.
    pub biodegradable_percentage: f64,
    pub fuel_use: Option<FuelUse>,
    /// kWh/month.
    pub electricity_use: f64,
    /// Tonnes/month.
    pub compost_production: f64,
    pub compost_use_percentage: f64,
    pub plastic_utilization: PlasticUtilization,
    /// Tonnes/month of plastic sent to RDF.
    pub plastic_amount: f64,
    /// L/month of pyrolysis oil.
    pub crude_oil_production: f64,
    /// Share of the oil used as fuel, in percent.
    pub crude_oil_use_percentage: f64,
}

impl Default for MbtInput {
    fn default() -> Self {
        Self {
            mixed_waste: 0.0,
            biodegradable_percentage: 50.0,
            fuel_use: None,
            electricity_use: 0.0,
            compost_production: 0.0,
            compost_use_percentage: 50.0,
            plastic_utilization: PlasticUtilization::None,
            plastic_amount: 0.0,
            crude_oil_production: 0.0,
            crude_oil_use_percentage: 0.0,
        }
    }
}

fn plastic_credit_kg(input: &MbtInput, params: &EmissionParams) -> f64 {
    match input.plastic_utilization {
        PlasticUtilization::Rdf if input.plastic_amount > 0.0 => {
            let energy = input.plastic_amount * KG_PER_TONNE * RDF_ENERGY_MJ_PER_KG;
            params.electricity_co2e(mj_to_kwh(energy, RDF_ELECTRIC_EFFICIENCY))
        }
        PlasticUtilization::CrudeOil if input.crude_oil_production > 0.0 => {
            let diesel = FuelType::Diesel.factor();
            let oil_used = input.crude_oil_production * pct(input.crude_oil_use_percentage);
            diesel.displaced_co2(diesel.energy_mj(oil_used))
        }
        _ => 0.0,
    }
}

/// Net emissions per tonne of mixed waste treated.
pub fn calculate_mbt(input: &MbtInput, params: &EmissionParams) -> EmissionResult {
    let waste = input.mixed_waste;
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    let mechanical = operational_co2e(input.fuel_use.as_ref(), input.electricity_use, params);

    let biodegradable = waste * pct(input.biodegradable_percentage);
    let (ch4, n2o) = biological_treatment_gases(biodegradable);
    let biological = params.gwp.co2e(0.0, ch4, n2o);

    let direct = (mechanical + biological) / waste;
    let avoided = (fertilizer_credit_kg(input.compost_production, input.compost_use_percentage)
        + plastic_credit_kg(input, params))
        / waste;

    EmissionResult::with_credit(mechanical / waste, ch4 / waste, n2o / waste, direct, avoided)
}
