//! Stock scenarios served when nothing has been stored yet.

use chrono::{DateTime, Utc};

use emissions::scenario::{Fleet, Scenario, ScenarioComposition, TreatmentAllocation};

pub const BASELINE_ID: &str = "baseline";
pub const ENHANCED_RECYCLING_ID: &str = "intervention-1";
pub const ZERO_WASTE_ID: &str = "intervention-2";

fn stock(
    id: &str,
    name: &str,
    description: &str,
    is_baseline: bool,
    allocation: [f64; 7],
    fleet: Fleet,
    now: DateTime<Utc>,
) -> Scenario {
    Scenario {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        is_baseline,
        created_at: now,
        updated_at: now,
        waste_composition: ScenarioComposition::typical(),
        treatment_allocation: TreatmentAllocation::from_percentages(allocation),
        fleet,
        emissions: None,
        tags: Vec::new(),
        notes: None,
    }
}

/// Baseline plus two interventions, all stamped `now`.
pub fn default_scenarios(now: DateTime<Utc>) -> Vec<Scenario> {
    vec![
        stock(
            BASELINE_ID,
            "Baseline Scenario",
            "Current waste management practices",
            true,
            [60.0, 10.0, 0.0, 0.0, 15.0, 10.0, 5.0],
            Fleet::new(10, 0, 500.0, 0.25),
            now,
        ),
        stock(
            ENHANCED_RECYCLING_ID,
            "Intervention A - Enhanced Recycling",
            "Increased recycling and composting, reduced landfill",
            false,
            [40.0, 20.0, 10.0, 0.0, 25.0, 5.0, 0.0],
            Fleet::new(8, 2, 450.0, 0.22),
            now,
        ),
        stock(
            ZERO_WASTE_ID,
            "Intervention B - Zero Waste Target",
            "Maximum recycling and energy recovery, minimal landfill",
            false,
            [20.0, 25.0, 20.0, 10.0, 20.0, 5.0, 0.0],
            Fleet::new(5, 5, 400.0, 0.20),
            now,
        ),
    ]
}
