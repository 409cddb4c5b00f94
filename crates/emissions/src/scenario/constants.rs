//! Constants for whole-scenario aggregation.
//!
//! The factor table is a coarse stand-in for the pathway calculators: one
//! number per (treatment, material) pair instead of the full formulas.

use super::types::{Category, ScenarioMaterial};

/// Tonnes of waste per month assumed when a scenario gives none.
pub const DEFAULT_TOTAL_WASTE_TONNES: f64 = 1000.0;

/// Electricity drawn by a battery-electric collection truck, kWh per km.
pub const ELECTRIC_TRUCK_KWH_PER_KM: f64 = 1.2;

/// kg CO2e per tonne of each material routed to each treatment.
///
/// Rows follow [`Category::TREATMENTS`], columns follow
/// [`ScenarioMaterial::ALL`]. Recycling entries are negative: the avoided
/// virgin production outweighs the process.
pub const SCENARIO_EMISSION_FACTORS: [[f64; 7]; 7] = [
    // food, paper, plastic, metal, glass, textile, others
    [250.0, 180.0, 10.0, 5.0, 5.0, 120.0, 80.0],             // landfill
    [25.0, 20.0, 0.0, 0.0, 0.0, 15.0, 10.0],                 // composting
    [15.0, 12.0, 0.0, 0.0, 0.0, 10.0, 8.0],                  // anaerobic digestion
    [80.0, 60.0, 40.0, 20.0, 15.0, 50.0, 35.0],              // mbt
    [0.0, -850.0, -1800.0, -5000.0, -300.0, -900.0, -100.0], // recycling
    [30.0, 40.0, 2500.0, 10.0, 5.0, 150.0, 100.0],           // incineration
    [150.0, 200.0, 3500.0, 50.0, 20.0, 250.0, 180.0],        // open burning
];

/// Factor for one material under one treatment. Transportation has no
/// per-material factor and yields zero.
pub fn scenario_emission_factor(treatment: Category, material: ScenarioMaterial) -> f64 {
    treatment
        .treatment_index()
        .map_or(0.0, |row| SCENARIO_EMISSION_FACTORS[row][material.index()])
}
