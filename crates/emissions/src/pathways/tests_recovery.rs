//! Tests for recycling, incineration and open burning.

use super::*;

use crate::factors::{FuelType, Recyclable, WasteFraction};
use crate::params::EmissionParams;

// -------------------------------------------------------------------------
// Recycling
// -------------------------------------------------------------------------

fn recycling(tonnes: f64) -> RecyclingInput {
    RecyclingInput {
        total_recyclables: tonnes,
        ..Default::default()
    }
}

#[test]
fn test_recycling_default_mix_credit() {
    let r = calculate_recycling(&recycling(30.0), &EmissionParams::default());
    // 0.3*1740 + 0.2*1745 + 0.05*590 + 0.1*1530 + 0.35*353
    assert!((r.avoided() - 1177.05).abs() < 1e-6);
    assert_eq!(r.direct(), 0.0);
    assert!((r.total_emission + 1177.05).abs() < 1e-6);
}

#[test]
fn test_recycling_recyclability_scales_credit() {
    let input = RecyclingInput {
        recyclability: 80.0,
        ..recycling(30.0)
    };
    let r = calculate_recycling(&input, &EmissionParams::default());
    assert!((r.avoided() - 941.64).abs() < 1e-6);
}

#[test]
fn test_recycling_operational_offsets_credit() {
    let input = RecyclingInput {
        composition: RecyclableComposition::from_materials([(Recyclable::Glass, 100.0)]),
        electricity_use: 10_000.0,
        ..recycling(10.0)
    };
    let r = calculate_recycling(&input, &EmissionParams::default());
    assert!((r.direct() - 855.0).abs() < 1e-9);
    assert!((r.avoided() - 353.0).abs() < 1e-9);
    assert!(r.total_emission > 0.0);
}

#[test]
fn test_recycling_unknown_material_earns_nothing() {
    let input = RecyclingInput {
        composition: RecyclableComposition::empty().with("tetrapak", 100.0),
        ..recycling(10.0)
    };
    let r = calculate_recycling(&input, &EmissionParams::default());
    assert_eq!(r.avoided(), 0.0);
}

#[test]
fn test_recycling_aluminum_alias() {
    let params = EmissionParams::default();
    let a = RecyclingInput {
        composition: RecyclableComposition::empty().with("aluminum", 100.0),
        ..recycling(1.0)
    };
    let r = calculate_recycling(&a, &params);
    assert!((r.avoided() - 590.0).abs() < 1e-9);
}

#[test]
fn test_recycling_zero() {
    assert!(calculate_recycling(&recycling(0.0), &EmissionParams::default()).is_zero());
}

// -------------------------------------------------------------------------
// Incineration
// -------------------------------------------------------------------------

fn incineration(mode: EnergyRecoveryMode) -> IncinerationInput {
    IncinerationInput {
        incineration_type: mode,
        waste_amount: 100.0,
        ..Default::default()
    }
}

#[test]
fn test_incineration_fossil_co2_default_mix() {
    let r = calculate_incineration(
        &incineration(EnergyRecoveryMode::NoEnergy),
        &EmissionParams::default(),
    );
    assert!((r.co2 - 261.420_133).abs() < 1e-5, "co2 {}", r.co2);
    assert!((r.n2o - 0.05).abs() < 1e-12);
    assert!((r.direct() - (261.420_133 + 14.9)).abs() < 1e-5);
    assert_eq!(r.avoided(), 0.0);
}

#[test]
fn test_incineration_glass_and_metal_are_inert() {
    let input = IncinerationInput {
        composition: WasteComposition::from_fractions([
            (WasteFraction::Glass, 60.0),
            (WasteFraction::Metal, 40.0),
        ]),
        ..incineration(EnergyRecoveryMode::NoEnergy)
    };
    let r = calculate_incineration(&input, &EmissionParams::default());
    assert_eq!(r.co2, 0.0);
}

#[test]
fn test_incineration_electricity_recovery() {
    let r = calculate_incineration(
        &incineration(EnergyRecoveryMode::Electricity),
        &EmissionParams::default(),
    );
    // 10000 MJ / 3.6 * 25% * 90% exported * 0.855
    assert!((r.avoided() - 534.375).abs() < 1e-6);
}

#[test]
fn test_incineration_heat_recovery() {
    let r = calculate_incineration(
        &incineration(EnergyRecoveryMode::Heat),
        &EmissionParams::default(),
    );
    // 10000 MJ * 60% * 80% exported * 0.0741 (diesel)
    assert!((r.avoided() - 355.68).abs() < 1e-6);
}

#[test]
fn test_incineration_both_is_sum_of_streams() {
    let r = calculate_incineration(
        &incineration(EnergyRecoveryMode::Both),
        &EmissionParams::default(),
    );
    assert!((r.avoided() - (534.375 + 355.68)).abs() < 1e-6);
    let tol = 1e-6 * r.direct().abs().max(r.avoided().abs());
    assert!((r.total_emission - (r.direct() - r.avoided())).abs() < tol);
}

#[test]
fn test_incineration_all_onsite_earns_nothing() {
    let input = IncinerationInput {
        energy_recovery: EnergyRecovery {
            electricity_onsite_percentage: 100.0,
            heat_onsite_percentage: 100.0,
            ..Default::default()
        },
        ..incineration(EnergyRecoveryMode::Both)
    };
    let r = calculate_incineration(&input, &EmissionParams::default());
    assert!(r.avoided().abs() < 1e-9);
}

#[test]
fn test_incineration_replaced_fuel_changes_heat_credit() {
    let input = IncinerationInput {
        energy_recovery: EnergyRecovery {
            replaced_fuel_type: FuelType::Lpg,
            ..Default::default()
        },
        ..incineration(EnergyRecoveryMode::Heat)
    };
    let r = calculate_incineration(&input, &EmissionParams::default());
    assert!((r.avoided() - 4800.0 * 0.0631).abs() < 1e-6);
}

#[test]
fn test_incineration_gwp_consistency() {
    let params = EmissionParams::default();
    let input = IncinerationInput {
        fuel_use: Some(FuelUse::new(FuelType::Diesel, 200.0)),
        electricity_use: 500.0,
        ..incineration(EnergyRecoveryMode::NoEnergy)
    };
    let r = calculate_incineration(&input, &params);
    let w = input.waste_amount;
    let rebuilt = r.co2 * w + r.ch4 * w * 25.0 + r.n2o * w * 298.0;
    assert!((rebuilt - r.direct() * w).abs() < 1e-6);
}

#[test]
fn test_incineration_mode_json_names() {
    let input: IncinerationInput =
        serde_json::from_str(r#"{"incinerationType": "no-energy", "wasteAmount": 5}"#).unwrap();
    assert_eq!(input.incineration_type, EnergyRecoveryMode::NoEnergy);
    assert_eq!(input.energy_recovery, EnergyRecovery::default());
}

// -------------------------------------------------------------------------
// Open burning
// -------------------------------------------------------------------------

#[test]
fn test_open_burning_default_mix() {
    let input = OpenBurningInput {
        waste_amount: 100.0,
        ..Default::default()
    };
    let r = calculate_open_burning(&input, &EmissionParams::default());
    // Wood has no fossil carbon, so dropping it leaves the incineration
    // fossil term, scaled by 0.58.
    assert!((r.co2 - 151.623_677).abs() < 1e-5, "co2 {}", r.co2);
    assert!((r.ch4 - 6.5).abs() < 1e-12);
    assert!((r.n2o - 0.1).abs() < 1e-12);
    assert!((r.total_emission - (r.co2 + 162.5 + 29.8)).abs() < 1e-9);
    assert_eq!(r.warning.as_deref(), Some(OPEN_BURNING_WARNING));
    assert!(r.direct_emissions.is_none());
    assert!(r.avoided_emissions.is_none());
}

#[test]
fn test_open_burning_is_58_percent_of_incineration_fossil() {
    let params = EmissionParams::default();
    let composition = WasteComposition::default().with("rubber", 4.0);
    for tonnes in [1.0, 37.5, 1200.0] {
        let burned = calculate_open_burning(
            &OpenBurningInput {
                waste_amount: tonnes,
                composition: composition.clone(),
            },
            &params,
        );
        let incinerated = calculate_incineration(
            &IncinerationInput {
                waste_amount: tonnes,
                composition: composition.clone(),
                ..Default::default()
            },
            &params,
        );
        assert!((burned.co2 - incinerated.co2 * 58.0 / 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_open_burning_unknown_fraction_uses_others() {
    let params = EmissionParams::default();
    let stray = OpenBurningInput {
        waste_amount: 10.0,
        composition: WasteComposition::empty().with("mystery", 100.0),
    };
    let others = OpenBurningInput {
        waste_amount: 10.0,
        composition: WasteComposition::empty().with("others", 100.0),
    };
    let a = calculate_open_burning(&stray, &params);
    let b = calculate_open_burning(&others, &params);
    assert!((a.co2 - b.co2).abs() < 1e-12);
    assert!(a.co2 > 0.0);
}

#[test]
fn test_singular_plastic_key_burns_like_others() {
    let params = EmissionParams::default();
    let singular = IncinerationInput {
        waste_amount: 10.0,
        composition: WasteComposition::empty().with("plastic", 100.0),
        ..Default::default()
    };
    let others = IncinerationInput {
        composition: WasteComposition::empty().with("others", 100.0),
        ..singular.clone()
    };
    let plastics = IncinerationInput {
        composition: WasteComposition::empty().with("plastics", 100.0),
        ..singular.clone()
    };
    let a = calculate_incineration(&singular, &params);
    assert!((a.co2 - calculate_incineration(&others, &params).co2).abs() < 1e-12);
    assert!(calculate_incineration(&plastics, &params).co2 > 10.0 * a.co2);
}

#[test]
fn test_58_percent_ratio_holds_under_gwp_overrides() {
    let params = EmissionParams::from_json(r#"{"gwp": {"ch4": 28.0, "n2o": 265.0}}"#).unwrap();
    let composition = WasteComposition::empty().with("plastics", 100.0);
    let burned = calculate_open_burning(
        &OpenBurningInput {
            waste_amount: 10.0,
            composition: composition.clone(),
        },
        &params,
    );
    let incinerated = calculate_incineration(
        &IncinerationInput {
            waste_amount: 10.0,
            composition,
            ..Default::default()
        },
        &params,
    );
    assert!((burned.co2 - incinerated.co2 * 0.58).abs() < 1e-9);
    let rebuilt = burned.co2 + burned.ch4 * 28.0 + burned.n2o * 265.0;
    assert!((burned.total_emission - rebuilt).abs() < 1e-9);
}

#[test]
fn test_open_burning_zero_has_no_warning() {
    let r = calculate_open_burning(&OpenBurningInput::default(), &EmissionParams::default());
    assert!(r.is_zero());
    assert!(r.warning.is_none());
}
