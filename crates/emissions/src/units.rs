//! Unit conversion constants shared by the calculators.

use serde::{Deserialize, Serialize};

/// Kilograms per tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Grams per kilogram.
pub const G_PER_KG: f64 = 1000.0;

/// Tonnes per gigagram.
pub const TONNES_PER_GG: f64 = 1000.0;

/// Kilograms per gigagram.
pub const KG_PER_GG: f64 = 1_000_000.0;

/// Megajoules per kilowatt-hour.
pub const MJ_PER_KWH: f64 = 3.6;

/// Months per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Molecular weight ratio CO2 / C.
pub const CO2_PER_C: f64 = 44.0 / 12.0;

/// Molecular weight ratio CH4 / C.
pub const CH4_PER_C: f64 = 16.0 / 12.0;

/// Percentage (0-100) to fraction (0-1).
pub fn pct(value: f64) -> f64 {
    value / 100.0
}

/// Thermal energy in MJ to electrical energy in kWh at the given efficiency.
pub fn mj_to_kwh(mj: f64, efficiency: f64) -> f64 {
    mj / MJ_PER_KWH * efficiency
}

/// Mass units accepted by [`MassUnit::convert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    Tonne,
}

impl MassUnit {
    fn grams(self) -> f64 {
        match self {
            MassUnit::Gram => 1.0,
            MassUnit::Kilogram => G_PER_KG,
            MassUnit::Tonne => G_PER_KG * KG_PER_TONNE,
        }
    }

    /// Convert `value` expressed in `from` into `to`.
    pub fn convert(value: f64, from: MassUnit, to: MassUnit) -> f64 {
        if from == to {
            return value;
        }
        value * from.grams() / to.grams()
    }
}
