//! Whole-strategy scenarios.
//!
//! A scenario describes a waste-management strategy as a seven-bucket
//! composition, a split of that waste across seven treatments and a
//! collection fleet. Aggregation uses the coarse per-(treatment, material)
//! table in [`constants`], not the pathway calculators; the two are
//! calibrated independently.
//!
//! Emission figures here are absolute kg CO2e per month. Treatment
//! categories scale with the scenario's total waste; transportation comes
//! from the fleet alone.

pub mod adapter;
pub mod aggregate;
pub mod compare;
pub mod constants;
pub mod ids;
pub mod types;

#[cfg(test)]
mod tests_adapter;

pub use adapter::{fold_composition, scenario_seed_from_module, ScenarioSeed};
pub use aggregate::{aggregate, fleet_transport_kg, treatment_intensity};
pub use compare::{
    compare_scenarios, generate_insights, select_comparison_pair, KeyReduction,
    ScenarioComparison, ScenarioInsights, KEY_REDUCTION_COUNT, RECOMMEND_FLEET,
    RECOMMEND_LANDFILL, RECOMMEND_OPEN_BURNING, RECOMMEND_RECYCLING,
};
pub use constants::*;
pub use ids::{Clock, FixedClock, IdGenerator, SeededIds, SequentialIds, SystemClock};
pub use types::{
    Category, Fleet, Scenario, ScenarioComposition, ScenarioEmissions, ScenarioMaterial,
    TreatmentAllocation,
};
