//! Normalized calculator output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::KG_PER_TONNE;

/// Unit label carried by every pathway result.
pub const PER_TONNE_UNIT: &str = "kg CO2-eq/tonne";

/// Emissions of one pathway, per tonne of waste processed.
///
/// `total_emission` may be negative when avoided emissions exceed direct
/// emissions. When both `direct_emissions` and `avoided_emissions` are set,
/// `total_emission == direct_emissions - avoided_emissions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    /// kg CO2 (or CO2e for electricity-derived terms) per tonne.
    pub co2: f64,
    /// kg CH4 per tonne.
    pub ch4: f64,
    /// kg N2O per tonne.
    pub n2o: f64,
    /// Net kg CO2e per tonne.
    pub total_emission: f64,
    /// Net tonnes CO2e per tonne (`total_emission / 1000`).
    #[serde(rename = "totalCO2e")]
    pub total_co2e: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_emissions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoided_emissions: Option<f64>,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Default for EmissionResult {
    fn default() -> Self {
        Self::zero()
    }
}

impl EmissionResult {
    /// Result for a pathway that processed no waste.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Result with a net total and no direct/avoided split.
    pub fn new(co2: f64, ch4: f64, n2o: f64, total_emission: f64) -> Self {
        Self {
            co2,
            ch4,
            n2o,
            total_emission,
            total_co2e: total_emission / KG_PER_TONNE,
            direct_emissions: None,
            avoided_emissions: None,
            unit: PER_TONNE_UNIT.to_string(),
            warning: None,
        }
    }

    /// Result whose net total is `direct - avoided`.
    pub fn with_credit(co2: f64, ch4: f64, n2o: f64, direct: f64, avoided: f64) -> Self {
        let mut result = Self::new(co2, ch4, n2o, direct - avoided);
        result.direct_emissions = Some(direct);
        result.avoided_emissions = Some(avoided);
        result
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Gross emitted kg CO2e per tonne; the net total when no split exists.
    pub fn direct(&self) -> f64 {
        self.direct_emissions.unwrap_or(self.total_emission)
    }

    /// Gross offset kg CO2e per tonne; zero when no split exists.
    pub fn avoided(&self) -> f64 {
        self.avoided_emissions.unwrap_or(0.0)
    }

    /// Net kg CO2e for `tonnes` of waste.
    pub fn absolute_kg(&self, tonnes: f64) -> f64 {
        self.total_emission * tonnes
    }

    /// True when every numeric field is zero.
    pub fn is_zero(&self) -> bool {
        self.co2 == 0.0
            && self.ch4 == 0.0
            && self.n2o == 0.0
            && self.total_emission == 0.0
            && self.total_co2e == 0.0
            && self.direct() == 0.0
            && self.avoided() == 0.0
    }
}

impl fmt::Display for EmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.total_emission, self.unit)
    }
}

/// True when `tonnes` cannot be used as a per-tonne divisor.
pub(crate) fn no_throughput(tonnes: f64) -> bool {
    tonnes.is_nan() || tonnes <= 0.0
}
