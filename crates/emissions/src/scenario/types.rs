//! Scenario data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pathways::Pathway;

// =============================================================================
// ScenarioMaterial
// =============================================================================

/// The seven coarse material buckets of a scenario composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioMaterial {
    Food,
    Paper,
    Plastic,
    Metal,
    Glass,
    Textile,
    Others,
}

impl ScenarioMaterial {
    pub const ALL: [ScenarioMaterial; 7] = [
        ScenarioMaterial::Food,
        ScenarioMaterial::Paper,
        ScenarioMaterial::Plastic,
        ScenarioMaterial::Metal,
        ScenarioMaterial::Glass,
        ScenarioMaterial::Textile,
        ScenarioMaterial::Others,
    ];

    /// Column in the scenario factor table.
    pub fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// Category
// =============================================================================

/// One of the eight emission categories reported for a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Transportation,
    Landfill,
    Composting,
    AnaerobicDigestion,
    Mbt,
    Recycling,
    Incineration,
    OpenBurning,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Transportation,
        Category::Landfill,
        Category::Composting,
        Category::AnaerobicDigestion,
        Category::Mbt,
        Category::Recycling,
        Category::Incineration,
        Category::OpenBurning,
    ];

    /// Categories that receive a share of the scenario's waste.
    pub const TREATMENTS: [Category; 7] = [
        Category::Landfill,
        Category::Composting,
        Category::AnaerobicDigestion,
        Category::Mbt,
        Category::Recycling,
        Category::Incineration,
        Category::OpenBurning,
    ];

    /// Row in the scenario factor table; `None` for transportation.
    pub fn treatment_index(self) -> Option<usize> {
        Self::TREATMENTS.iter().position(|c| *c == self)
    }

    pub fn label(self) -> &'static str {
        self.pathway().label()
    }

    pub fn pathway(self) -> Pathway {
        match self {
            Category::Transportation => Pathway::Transportation,
            Category::Landfill => Pathway::Landfill,
            Category::Composting => Pathway::Composting,
            Category::AnaerobicDigestion => Pathway::AnaerobicDigestion,
            Category::Mbt => Pathway::Mbt,
            Category::Recycling => Pathway::Recycling,
            Category::Incineration => Pathway::Incineration,
            Category::OpenBurning => Pathway::OpenBurning,
        }
    }
}

impl From<Pathway> for Category {
    fn from(pathway: Pathway) -> Self {
        match pathway {
            Pathway::Transportation => Category::Transportation,
            Pathway::Landfill => Category::Landfill,
            Pathway::Composting => Category::Composting,
            Pathway::AnaerobicDigestion => Category::AnaerobicDigestion,
            Pathway::Mbt => Category::Mbt,
            Pathway::Recycling => Category::Recycling,
            Pathway::Incineration => Category::Incineration,
            Pathway::OpenBurning => Category::OpenBurning,
        }
    }
}

// =============================================================================
// ScenarioComposition
// =============================================================================

/// Percent of scenario waste mass per material bucket.
///
/// Deliberately a different type from the pathway-level
/// [`crate::pathways::WasteComposition`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioComposition {
    pub food: f64,
    pub paper: f64,
    pub plastic: f64,
    pub metal: f64,
    pub glass: f64,
    pub textile: f64,
    pub others: f64,
}

impl ScenarioComposition {
    /// Mix shared by the stock scenarios.
    pub fn typical() -> Self {
        Self::from_percentages([35.0, 20.0, 15.0, 10.0, 5.0, 5.0, 10.0])
    }

    /// Build from percentages in [`ScenarioMaterial::ALL`] order.
    pub fn from_percentages(p: [f64; 7]) -> Self {
        Self {
            food: p[0],
            paper: p[1],
            plastic: p[2],
            metal: p[3],
            glass: p[4],
            textile: p[5],
            others: p[6],
        }
    }

    pub fn get(&self, material: ScenarioMaterial) -> f64 {
        match material {
            ScenarioMaterial::Food => self.food,
            ScenarioMaterial::Paper => self.paper,
            ScenarioMaterial::Plastic => self.plastic,
            ScenarioMaterial::Metal => self.metal,
            ScenarioMaterial::Glass => self.glass,
            ScenarioMaterial::Textile => self.textile,
            ScenarioMaterial::Others => self.others,
        }
    }

    pub fn total_percent(&self) -> f64 {
        ScenarioMaterial::ALL.iter().map(|m| self.get(*m)).sum()
    }
}

// =============================================================================
// TreatmentAllocation
// =============================================================================

/// Percent of scenario waste routed to each treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreatmentAllocation {
    pub landfill: f64,
    pub composting: f64,
    pub anaerobic_digestion: f64,
    pub mbt: f64,
    pub recycling: f64,
    pub incineration: f64,
    pub open_burning: f64,
}

impl TreatmentAllocation {
    /// Build from percentages in [`Category::TREATMENTS`] order.
    pub fn from_percentages(p: [f64; 7]) -> Self {
        Self {
            landfill: p[0],
            composting: p[1],
            anaerobic_digestion: p[2],
            mbt: p[3],
            recycling: p[4],
            incineration: p[5],
            open_burning: p[6],
        }
    }

    /// Current-practice split of the stock baseline scenario.
    pub fn typical() -> Self {
        Self::from_percentages([60.0, 10.0, 0.0, 0.0, 15.0, 10.0, 5.0])
    }

    /// Everything to one treatment. Transportation yields an empty split.
    pub fn only(treatment: Category) -> Self {
        let mut allocation = Self::default();
        allocation.set(treatment, 100.0);
        allocation
    }

    /// Share for `category`; transportation is never allocated waste.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => 0.0,
            Category::Landfill => self.landfill,
            Category::Composting => self.composting,
            Category::AnaerobicDigestion => self.anaerobic_digestion,
            Category::Mbt => self.mbt,
            Category::Recycling => self.recycling,
            Category::Incineration => self.incineration,
            Category::OpenBurning => self.open_burning,
        }
    }

    pub fn set(&mut self, category: Category, percent: f64) {
        let slot = match category {
            Category::Transportation => return,
            Category::Landfill => &mut self.landfill,
            Category::Composting => &mut self.composting,
            Category::AnaerobicDigestion => &mut self.anaerobic_digestion,
            Category::Mbt => &mut self.mbt,
            Category::Recycling => &mut self.recycling,
            Category::Incineration => &mut self.incineration,
            Category::OpenBurning => &mut self.open_burning,
        };
        *slot = percent;
    }

    pub fn total_percent(&self) -> f64 {
        Category::TREATMENTS.iter().map(|c| self.get(*c)).sum()
    }
}

// =============================================================================
// Fleet
// =============================================================================

/// Collection fleet. Distance is split between the diesel and electric
/// trucks in proportion to their counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fleet {
    pub diesel_trucks: u32,
    pub electric_trucks: u32,
    /// km per month, whole fleet.
    pub total_distance: f64,
    /// L of diesel per km.
    pub fuel_efficiency: f64,
}

impl Fleet {
    pub fn new(
        diesel_trucks: u32,
        electric_trucks: u32,
        total_distance: f64,
        fuel_efficiency: f64,
    ) -> Self {
        Self {
            diesel_trucks,
            electric_trucks,
            total_distance,
            fuel_efficiency,
        }
    }

    /// km driven by (diesel, electric) trucks. An empty fleet drives nothing.
    pub fn distance_split(&self) -> (f64, f64) {
        let trucks = self.diesel_trucks.saturating_add(self.electric_trucks);
        let divisor = f64::from(trucks.max(1));
        (
            f64::from(self.diesel_trucks) / divisor * self.total_distance,
            f64::from(self.electric_trucks) / divisor * self.total_distance,
        )
    }
}

// =============================================================================
// ScenarioEmissions
// =============================================================================

/// Absolute kg CO2e per category for one scenario, plus their sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioEmissions {
    pub transportation: f64,
    pub landfill: f64,
    pub composting: f64,
    pub anaerobic_digestion: f64,
    pub mbt: f64,
    pub recycling: f64,
    pub incineration: f64,
    pub open_burning: f64,
    pub total: f64,
}

impl ScenarioEmissions {
    /// Build from per-category values; `total` is their sum.
    pub fn from_fn(mut value: impl FnMut(Category) -> f64) -> Self {
        let mut emissions = Self::default();
        for category in Category::ALL {
            let v = value(category);
            *emissions.slot(category) = v;
            emissions.total += v;
        }
        emissions
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Landfill => self.landfill,
            Category::Composting => self.composting,
            Category::AnaerobicDigestion => self.anaerobic_digestion,
            Category::Mbt => self.mbt,
            Category::Recycling => self.recycling,
            Category::Incineration => self.incineration,
            Category::OpenBurning => self.open_burning,
        }
    }

    fn slot(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Transportation => &mut self.transportation,
            Category::Landfill => &mut self.landfill,
            Category::Composting => &mut self.composting,
            Category::AnaerobicDigestion => &mut self.anaerobic_digestion,
            Category::Mbt => &mut self.mbt,
            Category::Recycling => &mut self.recycling,
            Category::Incineration => &mut self.incineration,
            Category::OpenBurning => &mut self.open_burning,
        }
    }

    /// `self - other` per category (and total).
    pub fn difference(&self, other: &ScenarioEmissions) -> ScenarioEmissions {
        let mut delta = ScenarioEmissions::from_fn(|c| self.get(c) - other.get(c));
        delta.total = self.total - other.total;
        delta
    }
}

// =============================================================================
// Scenario
// =============================================================================

/// A complete waste-management strategy.
///
/// `is_baseline` is a convention only: zero or several flagged scenarios are
/// valid and handled by [`super::select_comparison_pair`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_baseline: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub waste_composition: ScenarioComposition,
    #[serde(default)]
    pub treatment_allocation: TreatmentAllocation,
    #[serde(default)]
    pub fleet: Fleet,
    /// Cached result of the last [`Scenario::recompute`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<ScenarioEmissions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Scenario {
    /// Refresh the cached emissions from the current inputs.
    pub fn recompute(
        &mut self,
        params: &crate::params::EmissionParams,
        total_waste_tonnes: f64,
    ) -> &ScenarioEmissions {
        let emissions = super::aggregate(
            &self.waste_composition,
            &self.treatment_allocation,
            &self.fleet,
            total_waste_tonnes,
            params,
        );
        self.emissions.insert(emissions)
    }

    /// Cached emissions, or a fresh aggregation when none are cached.
    pub fn emissions_or_compute(
        &self,
        params: &crate::params::EmissionParams,
        total_waste_tonnes: f64,
    ) -> ScenarioEmissions {
        self.emissions.unwrap_or_else(|| {
            super::aggregate(
                &self.waste_composition,
                &self.treatment_allocation,
                &self.fleet,
                total_waste_tonnes,
                params,
            )
        })
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
