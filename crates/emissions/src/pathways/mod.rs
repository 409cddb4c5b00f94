//! Pathway calculators.
//!
//! Each calculator maps a pathway-specific input record to an
//! [`EmissionResult`] normalized per tonne of waste processed by that
//! pathway. Calculators are pure: zero throughput yields an all-zero result,
//! unknown fuel or material keys fall back to a default factor, and nothing
//! here returns an error.

mod anaerobic_digestion;
mod combustion;
mod composition;
mod composting;
mod incineration;
mod landfill;
mod mbt;
mod open_burning;
mod operational;
mod pathway;
mod recycling;
mod result;
mod transportation;

#[cfg(test)]
mod tests_biological;
#[cfg(test)]
mod tests_landfill;
#[cfg(test)]
mod tests_recovery;

pub use anaerobic_digestion::{
    calculate_anaerobic_digestion, AnaerobicDigestionInput, BiogasUtilization,
};
pub use combustion::fossil_co2_kg;
pub use composition::{RecyclableComposition, WasteComposition};
pub use composting::{calculate_composting, CompostingInput};
pub use incineration::{
    calculate_incineration, EnergyRecovery, EnergyRecoveryMode, IncinerationInput,
};
pub use landfill::{calculate_landfill, LandfillInput};
pub use mbt::{calculate_mbt, MbtInput, PlasticUtilization};
pub use open_burning::{calculate_open_burning, OpenBurningInput, OPEN_BURNING_WARNING};
pub use operational::{operational_co2e, FuelUse};
pub use pathway::{ParsePathwayError, Pathway, PathwayInput};
pub use recycling::{calculate_recycling, RecyclingInput};
pub use result::{EmissionResult, PER_TONNE_UNIT};
pub use transportation::{calculate_transportation, TransportationInput, VehicleFuel};
