//! Scenario library persistence for the emissions engine.
//!
//! Scenarios are stored as one JSON array under a single key of a
//! [`KeyValueStore`]. Backends are in-memory or one file per key with
//! write-rename replacement.

mod atomic_write;
pub mod defaults;
pub mod library;
pub mod store;
pub mod store_error;


pub use defaults::{default_scenarios, BASELINE_ID, ENHANCED_RECYCLING_ID, ZERO_WASTE_ID};
pub use library::{ScenarioLibrary, ScenarioUpdate, STORAGE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use store_error::StoreError;
