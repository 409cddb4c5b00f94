//! Pathway-level composition maps.
//!
//! These are keyed by free-form material names so that a stray key from an
//! input form degrades to a default factor instead of failing. They are
//! distinct from the seven-bucket [`crate::scenario::ScenarioComposition`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::factors::{Recyclable, WasteFraction};
use crate::units::pct;

// =============================================================================
// WasteComposition
// =============================================================================

/// Percentage of total waste mass per waste fraction.
///
/// Percentages are not required to sum to 100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WasteComposition(BTreeMap<String, f64>);

impl Default for WasteComposition {
    /// Typical mixed municipal waste used by the landfill and incineration
    /// forms.
    fn default() -> Self {
        Self::from_fractions([
            (WasteFraction::FoodWaste, 40.0),
            (WasteFraction::GardenWaste, 10.0),
            (WasteFraction::Plastics, 7.0),
            (WasteFraction::Paper, 6.0),
            (WasteFraction::Textile, 6.0),
            (WasteFraction::Leather, 5.0),
            (WasteFraction::Glass, 5.0),
            (WasteFraction::Metal, 6.0),
            (WasteFraction::Wood, 7.0),
            (WasteFraction::Nappies, 2.0),
            (WasteFraction::Hazardous, 3.0),
            (WasteFraction::Others, 3.0),
        ])
    }
}

impl WasteComposition {
    /// Composition with no entries.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn from_fractions(entries: impl IntoIterator<Item = (WasteFraction, f64)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(fraction, percent)| (fraction.key().to_string(), percent))
                .collect(),
        )
    }

    /// Builder-style insert keyed by any material name.
    pub fn with(mut self, key: impl Into<String>, percent: f64) -> Self {
        self.set(key, percent);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, percent: f64) {
        self.0.insert(key.into(), percent);
    }

    /// Percentage for `key`, zero when absent.
    pub fn percent(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn total_percent(&self) -> f64 {
        self.0.values().sum()
    }

    /// Composition-weighted degradable organic carbon fraction.
    pub fn weighted_doc(&self) -> f64 {
        self.iter()
            .map(|(key, percent)| pct(percent) * WasteFraction::doc_for_key(key))
            .sum()
    }
}

// =============================================================================
// RecyclableComposition
// =============================================================================

/// Percentage of collected recyclables per material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecyclableComposition(BTreeMap<String, f64>);

impl Default for RecyclableComposition {
    fn default() -> Self {
        Self::from_materials([
            (Recyclable::Paper, 30.0),
            (Recyclable::Plastic, 20.0),
            (Recyclable::Aluminium, 5.0),
            (Recyclable::Steel, 10.0),
            (Recyclable::Glass, 35.0),
        ])
    }
}

impl RecyclableComposition {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn from_materials(entries: impl IntoIterator<Item = (Recyclable, f64)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(material, percent)| (material.key().to_string(), percent))
                .collect(),
        )
    }

    pub fn with(mut self, key: impl Into<String>, percent: f64) -> Self {
        self.0.insert(key.into(), percent);
        self
    }

    pub fn percent(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn total_percent(&self) -> f64 {
        self.0.values().sum()
    }
}
