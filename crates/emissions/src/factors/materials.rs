//! Per-material factors: landfill degradable organic carbon, combustion
//! carbon content, recycling credits and fertilizer substitution.

use serde::{Deserialize, Serialize};

use crate::units::pct;

// =============================================================================
// WasteFraction
// =============================================================================

/// Waste fractions understood by the landfill, incineration and open-burning
/// calculators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WasteFraction {
    FoodWaste,
    GardenWaste,
    Paper,
    Cardboard,
    Textile,
    Wood,
    Nappies,
    Rubber,
    Leather,
    Plastics,
    Glass,
    Metal,
    Hazardous,
    Others,
}

/// IPCC 2006 combustion parameters for a waste fraction, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombustionParams {
    /// Dry matter content (% of wet weight).
    pub dry_matter: f64,
    /// Total carbon content (% of dry weight).
    pub total_carbon: f64,
    /// Fossil carbon fraction (% of total carbon).
    pub fossil_carbon: f64,
}

impl CombustionParams {
    const fn new(dry_matter: f64, total_carbon: f64, fossil_carbon: f64) -> Self {
        Self {
            dry_matter,
            total_carbon,
            fossil_carbon,
        }
    }

    /// kg of fossil carbon per kg of wet waste.
    pub fn fossil_carbon_fraction(&self) -> f64 {
        pct(self.dry_matter) * pct(self.total_carbon) * pct(self.fossil_carbon)
    }
}

impl WasteFraction {
    /// Resolve a composition key, including the aliases used by older input
    /// forms. Returns `None` for anything else.
    pub fn lookup(key: &str) -> Option<WasteFraction> {
        let fraction = match key {
            "foodWaste" | "food" => WasteFraction::FoodWaste,
            "gardenWaste" | "garden" => WasteFraction::GardenWaste,
            "paper" => WasteFraction::Paper,
            "cardboard" => WasteFraction::Cardboard,
            "textile" => WasteFraction::Textile,
            "wood" => WasteFraction::Wood,
            "nappies" | "disposableNappies" => WasteFraction::Nappies,
            "rubber" => WasteFraction::Rubber,
            "leather" => WasteFraction::Leather,
            "plastics" => WasteFraction::Plastics,
            "glass" => WasteFraction::Glass,
            "metal" => WasteFraction::Metal,
            "hazardous" => WasteFraction::Hazardous,
            "others" => WasteFraction::Others,
            _ => return None,
        };
        Some(fraction)
    }

    pub fn key(self) -> &'static str {
        match self {
            WasteFraction::FoodWaste => "foodWaste",
            WasteFraction::GardenWaste => "gardenWaste",
            WasteFraction::Paper => "paper",
            WasteFraction::Cardboard => "cardboard",
            WasteFraction::Textile => "textile",
            WasteFraction::Wood => "wood",
            WasteFraction::Nappies => "nappies",
            WasteFraction::Rubber => "rubber",
            WasteFraction::Leather => "leather",
            WasteFraction::Plastics => "plastics",
            WasteFraction::Glass => "glass",
            WasteFraction::Metal => "metal",
            WasteFraction::Hazardous => "hazardous",
            WasteFraction::Others => "others",
        }
    }

    /// Degradable organic carbon (fraction of wet weight, IPCC 2006).
    /// Inert and fossil fractions carry none.
    pub fn doc(self) -> f64 {
        match self {
            WasteFraction::FoodWaste => 0.15,
            WasteFraction::GardenWaste => 0.20,
            WasteFraction::Paper => 0.41,
            WasteFraction::Wood => 0.43,
            WasteFraction::Textile => 0.24,
            WasteFraction::Nappies => 0.24,
            WasteFraction::Rubber => 0.45,
            WasteFraction::Leather => 0.45,
            WasteFraction::Cardboard
            | WasteFraction::Plastics
            | WasteFraction::Glass
            | WasteFraction::Metal
            | WasteFraction::Hazardous
            | WasteFraction::Others => 0.0,
        }
    }

    pub fn combustion(self) -> CombustionParams {
        match self {
            WasteFraction::FoodWaste => CombustionParams::new(40.0, 38.0, 0.0),
            WasteFraction::GardenWaste => CombustionParams::new(40.0, 49.0, 0.0),
            WasteFraction::Paper | WasteFraction::Cardboard => CombustionParams::new(90.0, 46.0, 1.0),
            WasteFraction::Textile => CombustionParams::new(80.0, 50.0, 20.0),
            WasteFraction::Wood => CombustionParams::new(85.0, 50.0, 0.0),
            WasteFraction::Nappies => CombustionParams::new(40.0, 70.0, 10.0),
            WasteFraction::Rubber | WasteFraction::Leather => CombustionParams::new(84.0, 67.0, 20.0),
            WasteFraction::Plastics => CombustionParams::new(100.0, 75.0, 100.0),
            WasteFraction::Glass | WasteFraction::Metal => CombustionParams::new(100.0, 0.0, 0.0),
            WasteFraction::Hazardous => CombustionParams::new(90.0, 50.0, 50.0),
            WasteFraction::Others => CombustionParams::new(90.0, 3.0, 100.0),
        }
    }

    /// DOC for an arbitrary composition key; unknown keys carry none.
    pub fn doc_for_key(key: &str) -> f64 {
        Self::lookup(key).map_or(0.0, Self::doc)
    }

    /// Combustion parameters for an arbitrary composition key; unknown keys
    /// use the `others` parameters.
    pub fn combustion_for_key(key: &str) -> CombustionParams {
        Self::lookup(key)
            .unwrap_or(WasteFraction::Others)
            .combustion()
    }
}

// =============================================================================
// Recyclable
// =============================================================================

/// Materials recovered by the recycling pathway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recyclable {
    Paper,
    Plastic,
    Aluminium,
    Steel,
    Glass,
}

impl Recyclable {
    pub const ALL: [Recyclable; 5] = [
        Recyclable::Paper,
        Recyclable::Plastic,
        Recyclable::Aluminium,
        Recyclable::Steel,
        Recyclable::Glass,
    ];

    pub fn lookup(key: &str) -> Option<Recyclable> {
        match key {
            "paper" => Some(Recyclable::Paper),
            "plastic" | "plastics" => Some(Recyclable::Plastic),
            "aluminium" | "aluminum" => Some(Recyclable::Aluminium),
            "steel" => Some(Recyclable::Steel),
            "glass" => Some(Recyclable::Glass),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Recyclable::Paper => "paper",
            Recyclable::Plastic => "plastic",
            Recyclable::Aluminium => "aluminium",
            Recyclable::Steel => "steel",
            Recyclable::Glass => "glass",
        }
    }

    /// kg CO2e avoided per kg of material recycled instead of produced from
    /// virgin feedstock.
    pub fn avoided_co2e_per_kg(self) -> f64 {
        match self {
            Recyclable::Paper => 1.74,
            Recyclable::Plastic => 1.745,
            Recyclable::Aluminium => 0.59,
            Recyclable::Steel => 1.53,
            Recyclable::Glass => 0.353,
        }
    }

    /// Avoided-emission factor for an arbitrary key; unknown keys earn no
    /// credit.
    pub fn avoided_co2e_for_key(key: &str) -> f64 {
        Self::lookup(key).map_or(0.0, Self::avoided_co2e_per_kg)
    }
}

// =============================================================================
// Fertilizer substitution
// =============================================================================

/// One mineral fertilizer nutrient displaced by applying compost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FertilizerNutrient {
    pub name: &'static str,
    /// kg nutrient replaced per tonne of compost applied.
    pub replacement_kg_per_tonne: f64,
    /// kg CO2e per kg of nutrient manufactured.
    pub co2e_per_kg: f64,
}

/// N, P2O5 and K2O replacement by compost.
pub const FERTILIZER_NUTRIENTS: [FertilizerNutrient; 3] = [
    FertilizerNutrient {
        name: "N",
        replacement_kg_per_tonne: 7.1,
        co2e_per_kg: 2.404,
    },
    FertilizerNutrient {
        name: "P2O5",
        replacement_kg_per_tonne: 4.1,
        co2e_per_kg: 0.448,
    },
    FertilizerNutrient {
        name: "K2O",
        replacement_kg_per_tonne: 5.4,
        co2e_per_kg: 0.443,
    },
];

/// kg CO2e of fertilizer manufacture avoided per tonne of compost applied.
pub fn fertilizer_co2e_per_tonne_compost() -> f64 {
    FERTILIZER_NUTRIENTS
        .iter()
        .map(|n| n.replacement_kg_per_tonne * n.co2e_per_kg)
        .sum()
}
