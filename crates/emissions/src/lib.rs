//! Greenhouse-gas emission engine for municipal solid-waste management.
//!
//! Two layers share one set of factor tables:
//! - [`pathways`]: detailed per-pathway calculators that map a facility input
//!   record to an [`EmissionResult`] normalized per tonne of waste processed.
//! - [`scenario`]: coarse whole-strategy aggregation (composition mix,
//!   treatment split, collection fleet), scenario comparison and rule-based
//!   insights.
//!
//! Everything here is pure and synchronous. Persistence lives in the `save`
//! crate.

pub mod factors;
pub mod params;
pub mod pathways;
pub mod report;
pub mod scenario;
pub mod units;


pub use params::{EmissionParams, Gwp, ParamsError};
pub use pathways::{EmissionResult, Pathway, PathwayInput};
pub use scenario::{
    aggregate, compare_scenarios, generate_insights, Scenario, ScenarioEmissions,
};
