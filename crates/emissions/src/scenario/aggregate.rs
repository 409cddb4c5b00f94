//! Whole-scenario emission aggregation.

use crate::factors::FuelType;
use crate::params::EmissionParams;
use crate::units::pct;

use super::constants::{scenario_emission_factor, ELECTRIC_TRUCK_KWH_PER_KM};
use super::types::{
    Category, Fleet, ScenarioComposition, ScenarioEmissions, ScenarioMaterial, TreatmentAllocation,
};

/// Absolute kg CO2e per month from running the collection fleet.
///
/// Diesel trucks count CO2 only; electric trucks are charged at the grid
/// factor.
pub fn fleet_transport_kg(fleet: &Fleet, params: &EmissionParams) -> f64 {
    let (diesel_km, electric_km) = fleet.distance_split();
    let litres = diesel_km * fleet.fuel_efficiency;
    let diesel = FuelType::Diesel.factor().combustion(litres).co2;
    let electric = params.electricity_co2e(electric_km * ELECTRIC_TRUCK_KWH_PER_KM);
    diesel + electric
}

/// kg CO2e per tonne of scenario waste attributable to one treatment.
pub fn treatment_intensity(
    composition: &ScenarioComposition,
    allocation_percent: f64,
    treatment: Category,
) -> f64 {
    ScenarioMaterial::ALL
        .iter()
        .map(|m| {
            pct(composition.get(*m))
                * pct(allocation_percent)
                * scenario_emission_factor(treatment, *m)
        })
        .sum()
}

/// Absolute kg CO2e per category for a scenario.
///
/// Treatment categories scale with `total_waste_tonnes`; transportation is
/// already absolute and does not.
pub fn aggregate(
    composition: &ScenarioComposition,
    allocation: &TreatmentAllocation,
    fleet: &Fleet,
    total_waste_tonnes: f64,
    params: &EmissionParams,
) -> ScenarioEmissions {
    let emissions = ScenarioEmissions::from_fn(|category| match category {
        Category::Transportation => fleet_transport_kg(fleet, params),
        treatment => {
            treatment_intensity(composition, allocation.get(treatment), treatment)
                * total_waste_tonnes
        }
    });
    tracing::debug!(
        total = emissions.total,
        transportation = emissions.transportation,
        recycling = emissions.recycling,
        total_waste_tonnes,
        "aggregated scenario emissions"
    );
    emissions
}
