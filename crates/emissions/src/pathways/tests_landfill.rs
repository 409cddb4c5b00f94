//! Tests for the landfill methane calculator.

use super::landfill::{methane_generated_kg, DEFAULT_MCF};
use super::*;

use crate::factors::{FuelType, WasteFraction};
use crate::params::EmissionParams;

fn landfill(tonnes: f64) -> LandfillInput {
    LandfillInput {
        waste_per_month: tonnes,
        ..Default::default()
    }
}

// -------------------------------------------------------------------------
// Methane generation
// -------------------------------------------------------------------------

#[test]
fn test_default_composition_weighted_doc() {
    let doc = WasteComposition::default().weighted_doc();
    assert!((doc - 0.1764).abs() < 1e-12, "doc {doc}");
}

#[test]
fn test_default_composition_methane() {
    let r = calculate_landfill(&landfill(100.0), &EmissionParams::default());
    assert!((r.ch4 - 47.04).abs() < 1e-9, "ch4 {}", r.ch4);
    assert!((r.total_emission - 1176.0).abs() < 1e-6);
    assert_eq!(r.n2o, 0.0);
    assert_eq!(r.co2, 0.0);
}

#[test]
fn test_methane_is_linear_in_waste() {
    let small = methane_generated_kg(&landfill(10.0));
    let large = methane_generated_kg(&landfill(40.0));
    assert!((large - 4.0 * small).abs() < 1e-6);
}

#[test]
fn test_per_tonne_independent_of_quantity() {
    let params = EmissionParams::default();
    let a = calculate_landfill(&landfill(10.0), &params);
    let b = calculate_landfill(&landfill(2500.0), &params);
    assert!((a.total_emission - b.total_emission).abs() < 1e-9);
}

#[test]
fn test_recovery_and_oxidation_reduce_methane() {
    let input = LandfillInput {
        gas_recovery: 50.0,
        oxidation: 0.1,
        ..landfill(100.0)
    };
    let r = calculate_landfill(&input, &EmissionParams::default());
    // 47.04 * 0.5 * 0.9 * 25
    assert!((r.total_emission - 529.2).abs() < 1e-6);
}

#[test]
fn test_full_recovery_leaves_only_operational() {
    let input = LandfillInput {
        gas_recovery: 100.0,
        fuel_use: Some(FuelUse::new(FuelType::Diesel, 500.0)),
        ..landfill(100.0)
    };
    let r = calculate_landfill(&input, &EmissionParams::default());
    assert!(r.ch4.abs() < 1e-12);
    assert!((r.total_emission - 13.531_350_6).abs() < 1e-6);
}

#[test]
fn test_explicit_zero_mcf_is_honoured() {
    let input: LandfillInput =
        serde_json::from_str(r#"{"wastePerMonth": 100, "mcf": 0}"#).unwrap();
    let r = calculate_landfill(&input, &EmissionParams::default());
    assert_eq!(r.ch4, 0.0);
}

#[test]
fn test_omitted_mcf_uses_default() {
    let input: LandfillInput = serde_json::from_str(r#"{"wastePerMonth": 100}"#).unwrap();
    assert!((input.mcf - DEFAULT_MCF).abs() < 1e-12);
}

// -------------------------------------------------------------------------
// Composition handling
// -------------------------------------------------------------------------

#[test]
fn test_inert_only_composition_generates_nothing() {
    let input = LandfillInput {
        composition: WasteComposition::from_fractions([
            (WasteFraction::Glass, 50.0),
            (WasteFraction::Metal, 50.0),
        ]),
        ..landfill(100.0)
    };
    let r = calculate_landfill(&input, &EmissionParams::default());
    assert!(r.is_zero());
}

#[test]
fn test_unknown_fraction_carries_no_doc() {
    let base = WasteComposition::empty().with("paper", 50.0);
    let with_stray = base.clone().with("styrofoam", 50.0);
    assert!((base.weighted_doc() - with_stray.weighted_doc()).abs() < 1e-12);
}

#[test]
fn test_food_alias_matches_food_waste() {
    let a = WasteComposition::empty().with("food", 100.0);
    let b = WasteComposition::empty().with("foodWaste", 100.0);
    assert!((a.weighted_doc() - b.weighted_doc()).abs() < 1e-12);
}

#[test]
fn test_gwp_override_scales_methane_term() {
    let mut params = EmissionParams::default();
    params.gwp.ch4 = 28.0;
    let r = calculate_landfill(&landfill(100.0), &params);
    assert!((r.total_emission - 47.04 * 28.0).abs() < 1e-6);
}

#[test]
fn test_zero_waste_is_zero_result() {
    let r = calculate_landfill(&landfill(0.0), &EmissionParams::default());
    assert!(r.is_zero());
}
