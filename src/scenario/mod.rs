//! Scenario input model and JSON loading.

pub mod load;
pub mod types;

pub use load::{load_scenario, to_json, write_json, ScenarioError};
pub use types::{Door, Orientation, OverlayCategory, OverlayDescriptor, Scenario, TileFragment};
