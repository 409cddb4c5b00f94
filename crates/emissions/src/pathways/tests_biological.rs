//! Tests for composting, anaerobic digestion and MBT.

use super::anaerobic_digestion::biogas_energy_mj;
use super::*;

use crate::factors::{fertilizer_co2e_per_tonne_compost, FuelType};
use crate::params::EmissionParams;

fn assert_nets_out(r: &EmissionResult) {
    let direct = r.direct_emissions.unwrap();
    let avoided = r.avoided_emissions.unwrap();
    let tol = 1e-6 * direct.abs().max(avoided.abs()).max(1.0);
    assert!((r.total_emission - (direct - avoided)).abs() < tol);
}

// -------------------------------------------------------------------------
// Composting
// -------------------------------------------------------------------------

fn composting(food: f64, compost: f64) -> CompostingInput {
    CompostingInput {
        food_waste: food,
        compost_production: compost,
        ..Default::default()
    }
}

#[test]
fn test_composting_direct_and_credit() {
    let r = calculate_composting(&composting(50.0, 15.0), &EmissionParams::default());
    // 4 g CH4 * 25 + 0.3 g N2O * 298 per kg = 189.4 kg/t
    assert!((r.direct() - 189.4).abs() < 1e-9);
    assert!((r.avoided() - 6.389_22).abs() < 1e-9);
    assert!((r.total_emission - 183.010_78).abs() < 1e-9);
    assert!((r.ch4 - 4.0).abs() < 1e-12);
    assert!((r.n2o - 0.3).abs() < 1e-12);
    assert_nets_out(&r);
}

#[test]
fn test_composting_garden_counts_toward_throughput() {
    let params = EmissionParams::default();
    let food_only = calculate_composting(&composting(50.0, 0.0), &params);
    let mixed = CompostingInput {
        food_waste: 30.0,
        garden_waste: 20.0,
        ..Default::default()
    };
    let r = calculate_composting(&mixed, &params);
    assert!((r.total_emission - food_only.total_emission).abs() < 1e-9);
}

#[test]
fn test_composting_use_percentage_scales_credit() {
    let params = EmissionParams::default();
    let input = CompostingInput {
        compost_use_percentage: 40.0,
        ..composting(10.0, 10.0)
    };
    let r = calculate_composting(&input, &params);
    let expected = 10.0 * 0.4 * fertilizer_co2e_per_tonne_compost() / 10.0;
    assert!((r.avoided() - expected).abs() < 1e-9);
}

#[test]
fn test_composting_explicit_zero_use_earns_no_credit() {
    let input = CompostingInput {
        compost_use_percentage: 0.0,
        ..composting(10.0, 10.0)
    };
    let r = calculate_composting(&input, &EmissionParams::default());
    assert_eq!(r.avoided(), 0.0);
}

#[test]
fn test_composting_operational_fuel_lands_in_co2() {
    let input = CompostingInput {
        fuel_use: Some(FuelUse::new(FuelType::Diesel, 500.0)),
        ..composting(100.0, 0.0)
    };
    let r = calculate_composting(&input, &EmissionParams::default());
    assert!((r.co2 - 13.531_350_6).abs() < 1e-6);
    let w = 100.0;
    let rebuilt = r.co2 * w + r.ch4 * w * 25.0 + r.n2o * w * 298.0;
    assert!((rebuilt - r.direct() * w).abs() < 1e-6);
}

#[test]
fn test_composting_zero_waste() {
    let r = calculate_composting(&composting(0.0, 15.0), &EmissionParams::default());
    assert!(r.is_zero());
}

// -------------------------------------------------------------------------
// Anaerobic digestion
// -------------------------------------------------------------------------

fn digestion(utilization: BiogasUtilization) -> AnaerobicDigestionInput {
    AnaerobicDigestionInput {
        food_waste: 100.0,
        biogas_utilization: utilization,
        ..Default::default()
    }
}

#[test]
fn test_biogas_energy_per_tonne() {
    assert!((biogas_energy_mj(1.0) - 3330.0).abs() < 1e-9);
}

#[test]
fn test_ad_thermal_displaces_lpg() {
    let r = calculate_anaerobic_digestion(
        &digestion(BiogasUtilization::Thermal),
        &EmissionParams::default(),
    );
    assert!((r.ch4 - 0.8).abs() < 1e-12);
    assert!((r.direct() - 20.0).abs() < 1e-9);
    assert!((r.avoided() - 210.123).abs() < 1e-9);
    assert!(r.total_emission < 0.0);
    assert_nets_out(&r);
}

#[test]
fn test_ad_electricity_displaces_grid() {
    let r = calculate_anaerobic_digestion(
        &digestion(BiogasUtilization::Electricity),
        &EmissionParams::default(),
    );
    assert!((r.avoided() - 276.806_25).abs() < 1e-6);
}

#[test]
fn test_ad_both_splits_evenly() {
    let params = EmissionParams::default();
    let thermal = calculate_anaerobic_digestion(&digestion(BiogasUtilization::Thermal), &params);
    let electric =
        calculate_anaerobic_digestion(&digestion(BiogasUtilization::Electricity), &params);
    let both = calculate_anaerobic_digestion(&digestion(BiogasUtilization::Both), &params);
    let expected = 0.5 * (thermal.avoided() + electric.avoided());
    assert!((both.avoided() - expected).abs() < 1e-9);
}

#[test]
fn test_ad_operational_adds_to_direct() {
    let params = EmissionParams::default();
    let input = AnaerobicDigestionInput {
        electricity_use: 1000.0,
        ..digestion(BiogasUtilization::Thermal)
    };
    let r = calculate_anaerobic_digestion(&input, &params);
    assert!((r.co2 - 8.55).abs() < 1e-9);
    assert!((r.direct() - 28.55).abs() < 1e-9);
}

#[test]
fn test_ad_utilization_json_names() {
    let input: AnaerobicDigestionInput =
        serde_json::from_str(r#"{"foodWaste": 10, "biogasUtilization": "electricity"}"#).unwrap();
    assert_eq!(input.biogas_utilization, BiogasUtilization::Electricity);
}

#[test]
fn test_ad_zero_waste() {
    let r = calculate_anaerobic_digestion(
        &AnaerobicDigestionInput::default(),
        &EmissionParams::default(),
    );
    assert!(r.is_zero());
}

// -------------------------------------------------------------------------
// MBT
// -------------------------------------------------------------------------

fn mbt(mixed: f64) -> MbtInput {
    MbtInput {
        mixed_waste: mixed,
        ..Default::default()
    }
}

#[test]
fn test_mbt_biological_share_defaults_to_half() {
    let r = calculate_mbt(&mbt(100.0), &EmissionParams::default());
    // Half of 100 t composted: 189.4 kg/t * 0.5
    assert!((r.direct() - 94.7).abs() < 1e-9);
    assert!((r.ch4 - 2.0).abs() < 1e-12);
    assert_eq!(r.avoided(), 0.0);
}

#[test]
fn test_mbt_explicit_zero_biodegradable() {
    let input = MbtInput {
        biodegradable_percentage: 0.0,
        electricity_use: 1000.0,
        ..mbt(100.0)
    };
    let r = calculate_mbt(&input, &EmissionParams::default());
    assert_eq!(r.ch4, 0.0);
    assert!((r.direct() - 8.55).abs() < 1e-9);
}

#[test]
fn test_mbt_compost_credit_defaults_to_half_used() {
    let input = MbtInput {
        compost_production: 10.0,
        ..mbt(100.0)
    };
    let r = calculate_mbt(&input, &EmissionParams::default());
    assert!((r.avoided() - 1.064_87).abs() < 1e-9);
    assert_nets_out(&r);
}

#[test]
fn test_mbt_rdf_credit() {
    let input = MbtInput {
        plastic_utilization: PlasticUtilization::Rdf,
        plastic_amount: 10.0,
        ..mbt(100.0)
    };
    let r = calculate_mbt(&input, &EmissionParams::default());
    // 10 t * 15 MJ/kg / 3.6 * 0.3 * 0.855 = 10687.5 kg
    assert!((r.avoided() - 106.875).abs() < 1e-6);
}

#[test]
fn test_mbt_crude_oil_credit_needs_use_share() {
    let params = EmissionParams::default();
    let unused = MbtInput {
        plastic_utilization: PlasticUtilization::CrudeOil,
        crude_oil_production: 1000.0,
        ..mbt(100.0)
    };
    assert_eq!(calculate_mbt(&unused, &params).avoided(), 0.0);

    let used = MbtInput {
        crude_oil_use_percentage: 50.0,
        ..unused
    };
    let r = calculate_mbt(&used, &params);
    assert!((r.avoided() - 13.485_162_6).abs() < 1e-6);
}

#[test]
fn test_mbt_plastic_amount_ignored_without_mode() {
    let input = MbtInput {
        plastic_amount: 10.0,
        ..mbt(100.0)
    };
    let r = calculate_mbt(&input, &EmissionParams::default());
    assert_eq!(r.avoided(), 0.0);
}

#[test]
fn test_mbt_zero_waste() {
    let r = calculate_mbt(&mbt(0.0), &EmissionParams::default());
    assert!(r.is_zero());
}
