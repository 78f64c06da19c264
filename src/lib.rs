//! Scenario map flattening library
//!
//! Places the door-linked tiles of a board-game scenario in a single global
//! hex coordinate space, ready for rendering and spatial queries.

pub mod hex;
pub mod scenario;
pub mod tiles;

pub use hex::{rotate_and_translate, HexCoord};
pub use scenario::{Scenario, ScenarioError};
pub use tiles::{build, FlatMap, MapBounds, PositionedOverlay, PositionedTile};
