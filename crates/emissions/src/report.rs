//! Monthly report totals across pathway modules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::EmissionParams;
use crate::pathways::{EmissionResult, Pathway, PathwayInput};

/// One pathway's result together with the tonnage it was normalized by.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    pub pathway: Pathway,
    pub waste_tonnes: f64,
    pub result: EmissionResult,
}

impl ModuleReport {
    /// Run the calculator for `input` and keep its throughput.
    pub fn from_input(input: &PathwayInput, params: &EmissionParams) -> Self {
        Self {
            pathway: input.pathway(),
            waste_tonnes: input.primary_quantity(),
            result: input.calculate(params),
        }
    }

    pub fn direct_kg(&self) -> f64 {
        self.result.direct() * self.tonnes()
    }

    pub fn avoided_kg(&self) -> f64 {
        self.result.avoided() * self.tonnes()
    }

    pub fn net_kg(&self) -> f64 {
        self.result.absolute_kg(self.tonnes())
    }

    // Zero-throughput results are all zero; NaN tonnage must not leak in.
    fn tonnes(&self) -> f64 {
        if self.waste_tonnes.is_finite() && self.waste_tonnes > 0.0 {
            self.waste_tonnes
        } else {
            0.0
        }
    }
}

/// Absolute kg CO2e totals over a set of module reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_direct_emissions: f64,
    pub total_avoided_emissions: f64,
    pub net_emissions: f64,
}

impl ReportSummary {
    pub fn from_results<'a>(reports: impl IntoIterator<Item = &'a ModuleReport>) -> Self {
        let mut summary = Self::default();
        for report in reports {
            summary.total_direct_emissions += report.direct_kg();
            summary.total_avoided_emissions += report.avoided_kg();
            summary.net_emissions += report.net_kg();
        }
        summary
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Direct Emissions: {:.2} kg CO2e",
            self.total_direct_emissions
        )?;
        writeln!(
            f,
            "Total Avoided Emissions: {:.2} kg CO2e",
            self.total_avoided_emissions
        )?;
        write!(f, "Net Emissions: {:.2} kg CO2e", self.net_emissions)
    }
}
