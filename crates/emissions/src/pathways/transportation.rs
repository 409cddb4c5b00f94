//! Waste collection and haulage.

use serde::{Deserialize, Serialize};

use crate::factors::FuelType;
use crate::params::EmissionParams;

use super::result::{no_throughput, EmissionResult};

/// Fuel used by a collection fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleFuel {
    Combustion(FuelType),
    /// Battery-electric trucks: grid electricity only, no tailpipe gases.
    Electric,
}

impl Default for VehicleFuel {
    fn default() -> Self {
        VehicleFuel::Combustion(FuelType::Diesel)
    }
}

impl VehicleFuel {
    pub fn from_key(key: &str) -> VehicleFuel {
        if key.trim().eq_ignore_ascii_case("electric") {
            VehicleFuel::Electric
        } else {
            VehicleFuel::Combustion(FuelType::from_key(key))
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            VehicleFuel::Combustion(fuel) => fuel.key(),
            VehicleFuel::Electric => "electric",
        }
    }

    pub fn is_electric(self) -> bool {
        matches!(self, VehicleFuel::Electric)
    }
}

impl From<String> for VehicleFuel {
    fn from(key: String) -> Self {
        VehicleFuel::from_key(&key)
    }
}

impl From<VehicleFuel> for String {
    fn from(fuel: VehicleFuel) -> Self {
        fuel.key().to_string()
    }
}

/// Monthly collection activity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportationInput {
    /// km per trip.
    pub distance: f64,
    pub trips_per_month: f64,
    /// L/km. When distance, trips and this rate are all set, total fuel is
    /// derived from them and `total_fuel` is ignored.
    pub fuel_consumption: f64,
    pub fuel_type: VehicleFuel,
    /// L/month (kg/month for natural gas).
    pub total_fuel: f64,
    /// Tonnes of waste hauled per month.
    pub waste_transported: f64,
    /// kWh/month for electric trucks.
    pub electricity: f64,
}

impl TransportationInput {
    /// Fuel burned this month, derived from distance when possible.
    pub fn fuel_burned(&self) -> f64 {
        if self.distance > 0.0 && self.trips_per_month > 0.0 && self.fuel_consumption > 0.0 {
            self.distance * self.trips_per_month * self.fuel_consumption
        } else {
            self.total_fuel
        }
    }

    /// Total km driven this month.
    pub fn monthly_distance(&self) -> f64 {
        self.distance * self.trips_per_month
    }
}

/// Emissions per tonne of waste hauled.
pub fn calculate_transportation(
    input: &TransportationInput,
    params: &EmissionParams,
) -> EmissionResult {
    let waste = input.waste_transported;
    if no_throughput(waste) {
        return EmissionResult::zero();
    }

    match input.fuel_type {
        VehicleFuel::Electric => {
            let per_tonne = params.electricity_co2e(input.electricity) / waste;
            EmissionResult::new(per_tonne, 0.0, 0.0, per_tonne)
        }
        VehicleFuel::Combustion(fuel) => {
            // Natural gas goes through the same multiplier even though its
            // amount is metered in kg; see the note on its factor.
            let gases = fuel.factor().combustion(input.fuel_burned());
            let total = gases.co2e(&params.gwp);
            EmissionResult::new(
                gases.co2 / waste,
                gases.ch4 / waste,
                gases.n2o / waste,
                total / waste,
            )
        }
    }
}
