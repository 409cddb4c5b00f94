//! Engine-wide tunables.
//!
//! Collects the global warming potentials and the grid electricity factor into
//! a single [`EmissionParams`] value so calculators never read them from
//! literals. Partial JSON overrides are supported: any field left out keeps
//! its default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IPCC AR4 100-year GWP for CH4.
pub const GWP_CH4_AR4: f64 = 25.0;

/// IPCC AR4 100-year GWP for N2O.
pub const GWP_N2O_AR4: f64 = 298.0;

/// Default grid electricity emission factor in kg CO2e per kWh.
pub const DEFAULT_GRID_ELECTRICITY_FACTOR: f64 = 0.855;

// ---------------------------------------------------------------------------
// Gwp
// ---------------------------------------------------------------------------

/// Global warming potentials used to fold gas masses into CO2-equivalent.
///
/// CO2 is the reference gas and always weighs 1, so only CH4 and N2O are
/// tunable. A `co2` key in an override document is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gwp {
    pub ch4: f64,
    pub n2o: f64,
}

impl Default for Gwp {
    fn default() -> Self {
        Self {
            ch4: GWP_CH4_AR4,
            n2o: GWP_N2O_AR4,
        }
    }
}

impl Gwp {
    /// CO2-equivalent of the given gas masses (same unit in, same unit out).
    pub fn co2e(&self, co2: f64, ch4: f64, n2o: f64) -> f64 {
        co2 + ch4 * self.ch4 + n2o * self.n2o
    }
}

// ---------------------------------------------------------------------------
// EmissionParams
// ---------------------------------------------------------------------------

/// Tunables shared by every pathway calculator and the scenario aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionParams {
    /// Global warming potentials.
    pub gwp: Gwp,
    /// Grid electricity emission factor in kg CO2e per kWh. Single region,
    /// not time- or mix-varying.
    pub grid_electricity_factor: f64,
}

impl Default for EmissionParams {
    fn default() -> Self {
        Self {
            gwp: Gwp::default(),
            grid_electricity_factor: DEFAULT_GRID_ELECTRICITY_FACTOR,
        }
    }
}

impl EmissionParams {
    /// Parse parameters from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Same parameters with a different grid electricity factor.
    pub fn with_grid_factor(mut self, kg_co2e_per_kwh: f64) -> Self {
        self.grid_electricity_factor = kg_co2e_per_kwh;
        self
    }

    /// kg CO2e for the given electricity consumption in kWh.
    pub fn electricity_co2e(&self, kwh: f64) -> f64 {
        kwh * self.grid_electricity_factor
    }

    fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("gwp.ch4", self.gwp.ch4),
            ("gwp.n2o", self.gwp.n2o),
            ("grid_electricity_factor", self.grid_electricity_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::OutOfRange {
                    field: name,
                    value,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ParamsError
// ---------------------------------------------------------------------------

/// Errors raised while loading [`EmissionParams`] overrides.
#[derive(Debug)]
pub enum ParamsError {
    /// The override document is not valid JSON for this shape.
    Json(serde_json::Error),
    /// A factor is negative or not finite.
    OutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Json(e) => write!(f, "Invalid emission parameters: {e}"),
            ParamsError::OutOfRange { field, value } => {
                write!(f, "Parameter {field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Json(e) => Some(e),
            ParamsError::OutOfRange { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Json(e)
    }
}
