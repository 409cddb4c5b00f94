//! Pathway identifiers and the tagged input record that dispatches to the
//! matching calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::EmissionParams;

use super::anaerobic_digestion::{calculate_anaerobic_digestion, AnaerobicDigestionInput};
use super::composting::{calculate_composting, CompostingInput};
use super::incineration::{calculate_incineration, IncinerationInput};
use super::landfill::{calculate_landfill, LandfillInput};
use super::mbt::{calculate_mbt, MbtInput};
use super::open_burning::{calculate_open_burning, OpenBurningInput};
use super::recycling::{calculate_recycling, RecyclingInput};
use super::result::EmissionResult;
use super::transportation::{calculate_transportation, TransportationInput};

// =============================================================================
// Pathway
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pathway {
    Transportation,
    Landfill,
    Composting,
    AnaerobicDigestion,
    Mbt,
    Recycling,
    Incineration,
    OpenBurning,
}

impl Pathway {
    pub const ALL: [Pathway; 8] = [
        Pathway::Transportation,
        Pathway::Landfill,
        Pathway::Composting,
        Pathway::AnaerobicDigestion,
        Pathway::Mbt,
        Pathway::Recycling,
        Pathway::Incineration,
        Pathway::OpenBurning,
    ];

    /// Module identifier used in routes and serialized inputs.
    pub fn key(self) -> &'static str {
        match self {
            Pathway::Transportation => "transportation",
            Pathway::Landfill => "landfill",
            Pathway::Composting => "composting",
            Pathway::AnaerobicDigestion => "anaerobic-digestion",
            Pathway::Mbt => "mbt",
            Pathway::Recycling => "recycling",
            Pathway::Incineration => "incineration",
            Pathway::OpenBurning => "open-burning",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Pathway::Transportation => "Transportation",
            Pathway::Landfill => "Landfill",
            Pathway::Composting => "Composting",
            Pathway::AnaerobicDigestion => "Anaerobic Digestion",
            Pathway::Mbt => "MBT",
            Pathway::Recycling => "Recycling",
            Pathway::Incineration => "Incineration",
            Pathway::OpenBurning => "Open Burning",
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a module identifier names no known pathway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePathwayError {
    pub input: String,
}

impl fmt::Display for ParsePathwayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pathway '{}'", self.input)
    }
}

impl std::error::Error for ParsePathwayError {}

impl FromStr for Pathway {
    type Err = ParsePathwayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Pathway::ALL
            .into_iter()
            .find(|p| p.key() == normalized)
            .or(match normalized.as_str() {
                "anaerobicdigestion" | "ad" => Some(Pathway::AnaerobicDigestion),
                "openburning" => Some(Pathway::OpenBurning),
                _ => None,
            })
            .ok_or_else(|| ParsePathwayError {
                input: s.to_string(),
            })
    }
}

// =============================================================================
// PathwayInput
// =============================================================================

/// Input record for any one pathway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pathway", content = "input", rename_all = "kebab-case")]
pub enum PathwayInput {
    Transportation(TransportationInput),
    Landfill(LandfillInput),
    Composting(CompostingInput),
    AnaerobicDigestion(AnaerobicDigestionInput),
    Mbt(MbtInput),
    Recycling(RecyclingInput),
    Incineration(IncinerationInput),
    OpenBurning(OpenBurningInput),
}

impl PathwayInput {
    pub fn pathway(&self) -> Pathway {
        match self {
            PathwayInput::Transportation(_) => Pathway::Transportation,
            PathwayInput::Landfill(_) => Pathway::Landfill,
            PathwayInput::Composting(_) => Pathway::Composting,
            PathwayInput::AnaerobicDigestion(_) => Pathway::AnaerobicDigestion,
            PathwayInput::Mbt(_) => Pathway::Mbt,
            PathwayInput::Recycling(_) => Pathway::Recycling,
            PathwayInput::Incineration(_) => Pathway::Incineration,
            PathwayInput::OpenBurning(_) => Pathway::OpenBurning,
        }
    }

    /// Tonnes/month the result is normalized by.
    pub fn primary_quantity(&self) -> f64 {
        match self {
            PathwayInput::Transportation(i) => i.waste_transported,
            PathwayInput::Landfill(i) => i.waste_per_month,
            PathwayInput::Composting(i) => i.total_waste(),
            PathwayInput::AnaerobicDigestion(i) => i.total_waste(),
            PathwayInput::Mbt(i) => i.mixed_waste,
            PathwayInput::Recycling(i) => i.total_recyclables,
            PathwayInput::Incineration(i) => i.waste_amount,
            PathwayInput::OpenBurning(i) => i.waste_amount,
        }
    }

    pub fn calculate(&self, params: &EmissionParams) -> EmissionResult {
        match self {
            PathwayInput::Transportation(i) => calculate_transportation(i, params),
            PathwayInput::Landfill(i) => calculate_landfill(i, params),
            PathwayInput::Composting(i) => calculate_composting(i, params),
            PathwayInput::AnaerobicDigestion(i) => calculate_anaerobic_digestion(i, params),
            PathwayInput::Mbt(i) => calculate_mbt(i, params),
            PathwayInput::Recycling(i) => calculate_recycling(i, params),
            PathwayInput::Incineration(i) => calculate_incineration(i, params),
            PathwayInput::OpenBurning(i) => calculate_open_burning(i, params),
        }
    }
}
