//! Auxiliary operational energy shared by the treatment pathways.

use serde::{Deserialize, Serialize};

use crate::factors::FuelType;
use crate::params::EmissionParams;

/// Fuel burned on site (loaders, shredders, turners) per month.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelUse {
    #[serde(rename = "type")]
    pub fuel: FuelType,
    /// L/month (kg/month for natural gas).
    pub amount: f64,
}

impl FuelUse {
    pub fn new(fuel: FuelType, amount: f64) -> Self {
        Self { fuel, amount }
    }

    /// kg CO2e released by this month's fuel.
    pub fn co2e(&self, params: &EmissionParams) -> f64 {
        self.fuel.factor().combustion_co2e(self.amount, &params.gwp)
    }
}

/// Absolute kg CO2e of on-site fuel plus grid electricity.
pub fn operational_co2e(
    fuel_use: Option<&FuelUse>,
    electricity_kwh: f64,
    params: &EmissionParams,
) -> f64 {
    let fuel = fuel_use.map_or(0.0, |f| f.co2e(params));
    fuel + params.electricity_co2e(electricity_kwh)
}
