//! Scenario library: the list of saved scenarios behind one storage key.
//!
//! Every operation reads the stored list, applies its change and writes the
//! whole list back, returning the new list. Ids and timestamps come from the
//! injected [`IdGenerator`] and [`Clock`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use emissions::scenario::{
    Clock, Fleet, IdGenerator, Scenario, ScenarioComposition, ScenarioEmissions,
    TreatmentAllocation,
};

use crate::defaults::default_scenarios;
use crate::store::KeyValueStore;
use crate::store_error::StoreError;

/// Storage key holding the JSON array of scenarios.
pub const STORAGE_KEY: &str = "ghg_scenarios";

/// Fields to overwrite on an existing scenario. `None` keeps the current
/// value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_baseline: Option<bool>,
    pub waste_composition: Option<ScenarioComposition>,
    pub treatment_allocation: Option<TreatmentAllocation>,
    pub fleet: Option<Fleet>,
    pub emissions: Option<ScenarioEmissions>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl ScenarioUpdate {
    /// True when the update changes an aggregation input.
    fn touches_inputs(&self) -> bool {
        self.waste_composition.is_some()
            || self.treatment_allocation.is_some()
            || self.fleet.is_some()
    }

    fn apply(self, scenario: &mut Scenario, now: DateTime<Utc>) {
        // Cached emissions no longer match changed inputs unless new ones
        // come with the update.
        if self.touches_inputs() {
            scenario.emissions = None;
        }
        if let Some(name) = self.name {
            scenario.name = name;
        }
        if let Some(description) = self.description {
            scenario.description = description;
        }
        if let Some(is_baseline) = self.is_baseline {
            scenario.is_baseline = is_baseline;
        }
        if let Some(composition) = self.waste_composition {
            scenario.waste_composition = composition;
        }
        if let Some(allocation) = self.treatment_allocation {
            scenario.treatment_allocation = allocation;
        }
        if let Some(fleet) = self.fleet {
            scenario.fleet = fleet;
        }
        if let Some(emissions) = self.emissions {
            scenario.emissions = Some(emissions);
        }
        if let Some(tags) = self.tags {
            scenario.tags = tags;
        }
        if let Some(notes) = self.notes {
            scenario.notes = Some(notes);
        }
        scenario.touch(now);
    }
}

pub struct ScenarioLibrary<S, I, C> {
    store: S,
    ids: I,
    clock: C,
}

impl<S: KeyValueStore, I: IdGenerator, C: Clock> ScenarioLibrary<S, I, C> {
    pub fn new(store: S, ids: I, clock: C) -> Self {
        Self { store, ids, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Stored scenarios. A missing key yields the stock scenarios; so does a
    /// stored value that no longer parses, after logging the error.
    pub fn scenarios(&self) -> Result<Vec<Scenario>, StoreError> {
        let Some(json) = self.store.get(STORAGE_KEY)? else {
            return Ok(default_scenarios(self.clock.now()));
        };
        match serde_json::from_str(&json) {
            Ok(scenarios) => Ok(scenarios),
            Err(e) => {
                error!("Scenario library: error loading scenarios: {e}");
                Ok(default_scenarios(self.clock.now()))
            }
        }
    }

    /// Replace the stored list.
    pub fn save_all(&mut self, scenarios: &[Scenario]) -> Result<(), StoreError> {
        let json = serde_json::to_string(scenarios)?;
        if let Err(e) = self.store.set(STORAGE_KEY, &json) {
            error!("Scenario library: error saving scenarios: {e}");
            return Err(e);
        }
        Ok(())
    }

    pub fn add(&mut self, scenario: Scenario) -> Result<Vec<Scenario>, StoreError> {
        let mut scenarios = self.scenarios()?;
        scenarios.push(scenario);
        self.save_all(&scenarios)?;
        Ok(scenarios)
    }

    /// Merge `update` into the scenario with `id` and bump its `updated_at`.
    /// Unknown ids leave the list untouched.
    pub fn update(&mut self, id: &str, update: ScenarioUpdate) -> Result<Vec<Scenario>, StoreError> {
        let mut scenarios = self.scenarios()?;
        let Some(index) = scenarios.iter().position(|s| s.id == id) else {
            return Ok(scenarios);
        };
        update.apply(&mut scenarios[index], self.clock.now());
        self.save_all(&scenarios)?;
        Ok(scenarios)
    }

    /// Remove the scenario with `id`. The baseline cannot be removed.
    pub fn delete(&mut self, id: &str) -> Result<Vec<Scenario>, StoreError> {
        let mut scenarios = self.scenarios()?;
        if scenarios.iter().any(|s| s.id == id && s.is_baseline) {
            return Err(StoreError::BaselineProtected { id: id.to_string() });
        }
        scenarios.retain(|s| s.id != id);
        self.save_all(&scenarios)?;
        Ok(scenarios)
    }

    pub fn get(&self, id: &str) -> Result<Option<Scenario>, StoreError> {
        Ok(self.scenarios()?.into_iter().find(|s| s.id == id))
    }

    /// Copy the scenario with `id` under `new_name`. The copy gets a fresh id
    /// and timestamps and is never the baseline. Unknown ids are a no-op.
    pub fn duplicate(&mut self, id: &str, new_name: &str) -> Result<Vec<Scenario>, StoreError> {
        let mut scenarios = self.scenarios()?;
        let Some(index) = scenarios.iter().position(|s| s.id == id) else {
            return Ok(scenarios);
        };
        let now = self.clock.now();
        let copy = Scenario {
            id: self.unused_id(&scenarios),
            name: new_name.to_string(),
            is_baseline: false,
            created_at: now,
            updated_at: now,
            ..scenarios[index].clone()
        };
        scenarios.push(copy);
        self.save_all(&scenarios)?;
        Ok(scenarios)
    }

    /// Pretty-printed JSON of the current list.
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.scenarios()?)?)
    }

    /// Append scenarios from an exported JSON array.
    ///
    /// Entries without a non-empty `id` and `name` are skipped, as are
    /// entries that do not otherwise parse. Imported scenarios get
    /// `updated_at` set to now; a missing `createdAt` also becomes now.
    pub fn import_json(&mut self, json: &str) -> Result<Vec<Scenario>, StoreError> {
        let Value::Array(entries) = serde_json::from_str::<Value>(json)? else {
            error!("Scenario library: error importing scenarios: not an array");
            return Err(StoreError::InvalidFormat(
                "expected a JSON array of scenarios".to_string(),
            ));
        };

        let now = self.clock.now();
        let mut scenarios = self.scenarios()?;
        let before = scenarios.len();
        for entry in entries {
            if let Some(scenario) = imported_scenario(entry, now) {
                scenarios.push(scenario);
            }
        }
        info!(
            "Scenario library: imported {} scenarios",
            scenarios.len() - before
        );
        self.save_all(&scenarios)?;
        Ok(scenarios)
    }

    /// Overwrite the stored list with the stock scenarios.
    pub fn reset_to_defaults(&mut self) -> Result<Vec<Scenario>, StoreError> {
        let defaults = default_scenarios(self.clock.now());
        self.save_all(&defaults)?;
        info!("Scenario library: reset to {} default scenarios", defaults.len());
        Ok(defaults)
    }

    fn unused_id(&mut self, scenarios: &[Scenario]) -> String {
        loop {
            let id = self.ids.next_id();
            if scenarios.iter().all(|s| s.id != id) {
                return id;
            }
        }
    }
}

fn non_empty_str(entry: &serde_json::Map<String, Value>, field: &str) -> bool {
    entry
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

fn imported_scenario(entry: Value, now: DateTime<Utc>) -> Option<Scenario> {
    let Value::Object(mut fields) = entry else {
        warn!("Scenario library: skipping non-object import entry");
        return None;
    };
    if !non_empty_str(&fields, "id") || !non_empty_str(&fields, "name") {
        warn!("Scenario library: skipping import entry without id or name");
        return None;
    }
    let stamp = Value::String(now.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true));
    fields.entry("createdAt").or_insert_with(|| stamp.clone());
    fields.insert("updatedAt".to_string(), stamp);

    match serde_json::from_value(Value::Object(fields)) {
        Ok(scenario) => Some(scenario),
        Err(e) => {
            warn!("Scenario library: skipping invalid import entry: {e}");
            None
        }
    }
}
