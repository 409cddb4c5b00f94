//! Turn a single pathway calculation into a scenario seed.
//!
//! Seeds are skewed towards the pathway they came from (all waste to that
//! treatment, a fleet sized for it). The emission result itself is only
//! recorded in the notes; it does not shape the seed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::factors::WasteFraction;
use crate::pathways::{EmissionResult, EnergyRecoveryMode, PathwayInput, WasteComposition};

use super::constants::DEFAULT_TOTAL_WASTE_TONNES;
use super::ids::{Clock, IdGenerator};
use super::types::{
    Category, Fleet, Scenario, ScenarioComposition, ScenarioMaterial, TreatmentAllocation,
};

/// km of monthly driving one collection truck covers.
pub const KM_PER_TRUCK: f64 = 500.0;

/// Tonnes per month one truck serves at a landfill.
pub const TONNES_PER_LANDFILL_TRUCK: f64 = 100.0;

/// L/km assumed when the transport form gives no consumption rate.
pub const DEFAULT_FUEL_EFFICIENCY: f64 = 0.25;

/// Partial scenario: everything but identity and timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSeed {
    pub name: String,
    pub description: String,
    pub is_baseline: bool,
    pub waste_composition: ScenarioComposition,
    pub treatment_allocation: TreatmentAllocation,
    pub fleet: Fleet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ScenarioSeed {
    /// Give the seed an id and creation time.
    pub fn into_scenario(self, ids: &mut impl IdGenerator, clock: &impl Clock) -> Scenario {
        let now = clock.now();
        Scenario {
            id: ids.next_id(),
            name: self.name,
            description: self.description,
            is_baseline: self.is_baseline,
            created_at: now,
            updated_at: now,
            waste_composition: self.waste_composition,
            treatment_allocation: self.treatment_allocation,
            fleet: self.fleet,
            emissions: None,
            tags: Vec::new(),
            notes: self.notes,
        }
    }
}

/// Scenario bucket that a pathway-level waste fraction lands in.
fn scenario_material(fraction: WasteFraction) -> ScenarioMaterial {
    match fraction {
        WasteFraction::FoodWaste | WasteFraction::GardenWaste => ScenarioMaterial::Food,
        WasteFraction::Paper | WasteFraction::Cardboard => ScenarioMaterial::Paper,
        WasteFraction::Plastics => ScenarioMaterial::Plastic,
        WasteFraction::Metal => ScenarioMaterial::Metal,
        WasteFraction::Glass => ScenarioMaterial::Glass,
        WasteFraction::Textile => ScenarioMaterial::Textile,
        WasteFraction::Wood
        | WasteFraction::Nappies
        | WasteFraction::Rubber
        | WasteFraction::Leather
        | WasteFraction::Hazardous
        | WasteFraction::Others => ScenarioMaterial::Others,
    }
}

/// Fold a pathway-level composition into the seven scenario buckets,
/// normalized to sum to 100. Unknown keys count as `others`.
pub fn fold_composition(composition: &WasteComposition) -> ScenarioComposition {
    let mut buckets = [0.0; 7];
    for (key, percent) in composition.iter() {
        let material =
            WasteFraction::lookup(key).map_or(ScenarioMaterial::Others, scenario_material);
        buckets[material.index()] += percent;
    }
    let total: f64 = buckets.iter().sum();
    for b in &mut buckets {
        *b = if total > 0.0 { *b / total * 100.0 } else { 0.0 };
    }
    ScenarioComposition::from_percentages(buckets)
}

fn trucks_for(load: f64, per_truck: f64) -> u32 {
    // `as` saturates; NaN becomes 0 and is lifted to 1.
    ((load / per_truck).ceil() as u32).max(1)
}

fn focused(
    treatment: Category,
    composition: [f64; 7],
    fleet: Fleet,
) -> (ScenarioComposition, TreatmentAllocation, Fleet) {
    (
        ScenarioComposition::from_percentages(composition),
        TreatmentAllocation::only(treatment),
        fleet,
    )
}

/// Build a scenario seed from one pathway's input and result.
///
/// `name` overrides the generated `"<Pathway> Scenario - <date>"` name.
pub fn scenario_seed_from_module(
    input: &PathwayInput,
    result: &EmissionResult,
    name: Option<&str>,
    today: NaiveDate,
) -> ScenarioSeed {
    let pathway = input.pathway();

    let (description, (waste_composition, treatment_allocation, fleet)) = match input {
        PathwayInput::Transportation(t) => {
            let total_distance = t.monthly_distance();
            let trucks = trucks_for(total_distance, KM_PER_TRUCK);
            let (diesel, electric) = if t.fuel_type.is_electric() {
                (0, trucks)
            } else {
                (trucks, 0)
            };
            let efficiency = if t.fuel_consumption > 0.0 {
                t.fuel_consumption
            } else {
                DEFAULT_FUEL_EFFICIENCY
            };
            (
                format!(
                    "Based on {} transport: {} km × {} trips/month",
                    t.fuel_type.key(),
                    t.distance,
                    t.trips_per_month
                ),
                (
                    ScenarioComposition::typical(),
                    TreatmentAllocation::typical(),
                    Fleet::new(diesel, electric, total_distance, efficiency),
                ),
            )
        }
        PathwayInput::Landfill(l) => {
            let tonnes = if l.waste_per_month > 0.0 {
                l.waste_per_month
            } else {
                DEFAULT_TOTAL_WASTE_TONNES
            };
            (
                format!(
                    "Based on {} tonnes/month with {}% gas recovery",
                    l.waste_per_month, l.gas_recovery
                ),
                (
                    fold_composition(&l.composition),
                    TreatmentAllocation::only(Category::Landfill),
                    Fleet::new(
                        trucks_for(tonnes, TONNES_PER_LANDFILL_TRUCK),
                        0,
                        KM_PER_TRUCK,
                        DEFAULT_FUEL_EFFICIENCY,
                    ),
                ),
            )
        }
        PathwayInput::Composting(c) => (
            format!("Based on {} tonnes composting", c.total_waste()),
            focused(
                Category::Composting,
                [50.0, 20.0, 0.0, 0.0, 0.0, 10.0, 20.0],
                Fleet::new(5, 0, 300.0, 0.22),
            ),
        ),
        PathwayInput::AnaerobicDigestion(a) => (
            format!("Based on {} tonnes anaerobic digestion", a.total_waste()),
            focused(
                Category::AnaerobicDigestion,
                [60.0, 15.0, 0.0, 0.0, 0.0, 5.0, 20.0],
                Fleet::new(5, 0, 300.0, 0.22),
            ),
        ),
        PathwayInput::Recycling(_) => (
            "Based on recycling operations".to_string(),
            focused(
                Category::Recycling,
                [0.0, 30.0, 25.0, 20.0, 15.0, 5.0, 5.0],
                Fleet::new(8, 2, 400.0, 0.23),
            ),
        ),
        PathwayInput::Incineration(i) => (
            if i.incineration_type == EnergyRecoveryMode::NoEnergy {
                "Based on incineration without energy recovery".to_string()
            } else {
                "Based on incineration with energy recovery".to_string()
            },
            focused(
                Category::Incineration,
                [20.0, 25.0, 30.0, 5.0, 5.0, 10.0, 5.0],
                Fleet::new(6, 0, 350.0, 0.24),
            ),
        ),
        PathwayInput::Mbt(_) => (
            "Based on Mechanical Biological Treatment".to_string(),
            focused(
                Category::Mbt,
                [30.0, 20.0, 20.0, 10.0, 5.0, 10.0, 5.0],
                Fleet::new(7, 0, 400.0, 0.25),
            ),
        ),
        PathwayInput::OpenBurning(_) => (
            "Current open burning practice (high emissions)".to_string(),
            focused(
                Category::OpenBurning,
                [25.0, 25.0, 25.0, 5.0, 5.0, 10.0, 5.0],
                Fleet::new(3, 0, 200.0, 0.25),
            ),
        ),
    };

    let name = match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => format!("{} Scenario - {}", pathway.label(), today.format("%Y-%m-%d")),
    };

    ScenarioSeed {
        name,
        description,
        is_baseline: false,
        waste_composition,
        treatment_allocation,
        fleet,
        notes: Some(format!("{} module result: {result}", pathway.label())),
    }
}
