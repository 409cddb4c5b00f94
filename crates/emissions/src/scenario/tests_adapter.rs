//! Tests for the module-to-scenario adapter and the injected id/clock
//! services.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use super::*;

use crate::factors::FuelType;
use crate::params::EmissionParams;
use crate::pathways::{
    EmissionResult, LandfillInput, OpenBurningInput, PathwayInput, RecyclingInput,
    TransportationInput, VehicleFuel, WasteComposition,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap()
}

fn seed(input: PathwayInput) -> ScenarioSeed {
    let result = input.calculate(&EmissionParams::default());
    scenario_seed_from_module(&input, &result, None, today())
}

// -------------------------------------------------------------------------
// Transportation
// -------------------------------------------------------------------------

#[test]
fn test_transport_seed_sizes_fleet() {
    let s = seed(PathwayInput::Transportation(TransportationInput {
        distance: 60.0,
        trips_per_month: 20.0,
        fuel_consumption: 0.3,
        waste_transported: 100.0,
        ..Default::default()
    }));
    // 1200 km / 500 km per truck
    assert_eq!(s.fleet, Fleet::new(3, 0, 1200.0, 0.3));
    assert_eq!(s.waste_composition, ScenarioComposition::typical());
    assert_eq!(s.treatment_allocation, TreatmentAllocation::typical());
    assert_eq!(s.name, "Transportation Scenario - 2024-03-09");
    assert_eq!(s.description, "Based on diesel transport: 60 km × 20 trips/month");
    assert!(!s.is_baseline);
}

#[test]
fn test_electric_transport_seed_uses_electric_trucks() {
    let s = seed(PathwayInput::Transportation(TransportationInput {
        fuel_type: VehicleFuel::Electric,
        electricity: 900.0,
        waste_transported: 50.0,
        ..Default::default()
    }));
    // No distance: at least one truck, default consumption rate.
    assert_eq!(s.fleet, Fleet::new(0, 1, 0.0, 0.25));
}

#[test]
fn test_custom_name_wins() {
    let input = PathwayInput::Transportation(TransportationInput::default());
    let r = EmissionResult::zero();
    let s = scenario_seed_from_module(&input, &r, Some("Depot A"), today());
    assert_eq!(s.name, "Depot A");
    let blank = scenario_seed_from_module(&input, &r, Some("  "), today());
    assert!(blank.name.starts_with("Transportation Scenario"));
}

// -------------------------------------------------------------------------
// Landfill
// -------------------------------------------------------------------------

#[test]
fn test_landfill_seed_folds_composition() {
    let s = seed(PathwayInput::Landfill(LandfillInput {
        waste_per_month: 250.0,
        ..Default::default()
    }));
    let c = s.waste_composition;
    // Default mix: food 40 + garden 10; others = leather, wood, nappies,
    // hazardous and others.
    assert!((c.food - 50.0).abs() < 1e-9);
    assert!((c.plastic - 7.0).abs() < 1e-9);
    assert!((c.others - 20.0).abs() < 1e-9);
    assert!((c.total_percent() - 100.0).abs() < 1e-9);
    assert_eq!(s.treatment_allocation, TreatmentAllocation::only(Category::Landfill));
    assert_eq!(s.fleet, Fleet::new(3, 0, 500.0, 0.25));
    assert_eq!(s.description, "Based on 250 tonnes/month with 0% gas recovery");
}

#[test]
fn test_fold_normalizes_partial_composition() {
    let c = fold_composition(
        &WasteComposition::empty()
            .with("foodWaste", 20.0)
            .with("paper", 20.0)
            .with("mystery", 10.0),
    );
    assert!((c.food - 40.0).abs() < 1e-9);
    assert!((c.paper - 40.0).abs() < 1e-9);
    assert!((c.others - 20.0).abs() < 1e-9);
}

#[test]
fn test_fold_empty_composition_is_all_zero() {
    let c = fold_composition(&WasteComposition::empty());
    assert_eq!(c, ScenarioComposition::default());
}

#[test]
fn test_landfill_without_quantity_assumes_default_fleet() {
    let s = seed(PathwayInput::Landfill(LandfillInput::default()));
    assert_eq!(s.fleet.diesel_trucks, 10);
}

// -------------------------------------------------------------------------
// Treatment-focused seeds
// -------------------------------------------------------------------------

#[test]
fn test_recycling_seed() {
    let s = seed(PathwayInput::Recycling(RecyclingInput {
        total_recyclables: 30.0,
        ..Default::default()
    }));
    assert_eq!(s.waste_composition.food, 0.0);
    assert_eq!(s.treatment_allocation.recycling, 100.0);
    assert_eq!(s.fleet, Fleet::new(8, 2, 400.0, 0.23));
}

#[test]
fn test_open_burning_seed() {
    let s = seed(PathwayInput::OpenBurning(OpenBurningInput {
        waste_amount: 10.0,
        ..Default::default()
    }));
    assert_eq!(s.description, "Current open burning practice (high emissions)");
    assert_eq!(s.treatment_allocation.open_burning, 100.0);
    assert_eq!(s.fleet, Fleet::new(3, 0, 200.0, 0.25));
    assert!(s.notes.unwrap().contains("kg CO2-eq/tonne"));
}

#[test]
fn test_every_seed_sums_to_100() {
    for pathway in crate::pathways::Pathway::ALL {
        let input = match pathway {
            crate::pathways::Pathway::Transportation => {
                PathwayInput::Transportation(Default::default())
            }
            crate::pathways::Pathway::Landfill => PathwayInput::Landfill(Default::default()),
            crate::pathways::Pathway::Composting => PathwayInput::Composting(Default::default()),
            crate::pathways::Pathway::AnaerobicDigestion => {
                PathwayInput::AnaerobicDigestion(Default::default())
            }
            crate::pathways::Pathway::Mbt => PathwayInput::Mbt(Default::default()),
            crate::pathways::Pathway::Recycling => PathwayInput::Recycling(Default::default()),
            crate::pathways::Pathway::Incineration => {
                PathwayInput::Incineration(Default::default())
            }
            crate::pathways::Pathway::OpenBurning => {
                PathwayInput::OpenBurning(Default::default())
            }
        };
        let s = seed(input);
        assert!(
            (s.waste_composition.total_percent() - 100.0).abs() < 1e-9,
            "{pathway}"
        );
        assert!(
            (s.treatment_allocation.total_percent() - 100.0).abs() < 1e-9,
            "{pathway}"
        );
    }
}

// -------------------------------------------------------------------------
// Ids, clocks and materialization
// -------------------------------------------------------------------------

#[test]
fn test_sequential_ids() {
    let mut ids = SequentialIds::default();
    assert_eq!(ids.next_id(), "scenario-1");
    assert_eq!(ids.next_id(), "scenario-2");
    let mut resumed = SequentialIds::new("s").starting_after(41);
    assert_eq!(resumed.next_id(), "s-42");
}

#[test]
fn test_seeded_ids_are_reproducible() {
    let mut a = SeededIds::from_seed_u64(7);
    let mut b = SeededIds::from_seed_u64(7);
    let first: Vec<String> = (0..4).map(|_| a.next_id()).collect();
    let second: Vec<String> = (0..4).map(|_| b.next_id()).collect();
    assert_eq!(first, second);
    assert_ne!(first[0], first[1]);
    assert!(first[0].starts_with("scenario-"));
    assert_eq!(first[0].len(), "scenario-".len() + 16);
}

#[test]
fn test_fixed_clock_advances() {
    let mut clock = FixedClock(noon());
    clock.advance(Duration::hours(2));
    assert_eq!(clock.now(), noon() + Duration::hours(2));
}

#[test]
fn test_into_scenario_stamps_identity() {
    let input = PathwayInput::Landfill(LandfillInput {
        waste_per_month: 100.0,
        fuel_use: Some(crate::pathways::FuelUse::new(FuelType::Diesel, 10.0)),
        ..Default::default()
    });
    let result = input.calculate(&EmissionParams::default());
    let seed = scenario_seed_from_module(&input, &result, None, today());
    let mut ids = SequentialIds::default();
    let scenario = seed.clone().into_scenario(&mut ids, &FixedClock(noon()));
    assert_eq!(scenario.id, "scenario-1");
    assert_eq!(scenario.created_at, noon());
    assert_eq!(scenario.updated_at, noon());
    assert_eq!(scenario.name, seed.name);
    assert!(scenario.emissions.is_none());
    assert!(!scenario.is_baseline);
}

#[test]
fn test_scenario_json_shape() {
    let scenario = seed(PathwayInput::Recycling(RecyclingInput::default()))
        .into_scenario(&mut SequentialIds::default(), &FixedClock(noon()));
    let json = serde_json::to_value(&scenario).unwrap();
    assert_eq!(json["isBaseline"], false);
    assert_eq!(json["createdAt"], "2024-03-09T12:00:00Z");
    assert_eq!(json["fleet"]["dieselTrucks"], 8);
    assert!(json.get("emissions").is_none());
    assert!(json.get("tags").is_none());

    let back: Scenario = serde_json::from_value(json).unwrap();
    assert_eq!(back, scenario);
}

#[test]
fn test_touch_moves_updated_only() {
    let mut scenario = seed(PathwayInput::Mbt(Default::default()))
        .into_scenario(&mut SequentialIds::default(), &FixedClock(noon()));
    let later = noon() + Duration::days(1);
    scenario.touch(later);
    assert_eq!(scenario.created_at, noon());
    assert_eq!(scenario.updated_at, later);
}
