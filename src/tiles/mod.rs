//! Scenario map flattening
//!
//! Turns a door-linked tree of map tiles into one flat map in global hex
//! coordinates:
//! - every occupied cell of every tile, tagged with its tile ref and rotation
//! - every renderable overlay (obstacles, traps, treasure, doors, ...)
//! - the bounding box of the assembled map
//!
//! Building is pure and infallible. Unknown tile refs get a single-cell
//! footprint and unrenderable overlays are left out.

pub mod overlays;
pub mod placement;
pub mod templates;
pub mod types;

use tracing::{debug, debug_span};

use crate::scenario::Scenario;

pub use overlays::{classify_overlay, door_render_name, DoorStyle};
pub use placement::{place_overlays, place_tiles, Frame};
pub use templates::{grid_for, is_known_template, pixel_offset_for, PixelOffset, TileGrid};
pub use types::{FlatMap, MapBounds, PositionedOverlay, PositionedTile};

/// Flatten a scenario into positioned tiles, overlays and bounds.
///
/// The output order is fixed by the tree: a fragment's template cells, then
/// its overlay cells, then each door's hinge cell followed by the subtree
/// behind it. Cells shared by overlapping fragments are kept as duplicates.
pub fn build(scenario: &Scenario) -> FlatMap {
    let span = debug_span!(
        "flatten",
        fragments = scenario.fragment_count(),
        depth = scenario.max_depth()
    );
    let _guard = span.enter();

    let mut tiles = Vec::new();
    place_tiles(&scenario.root, Frame::ROOT, &mut tiles);

    let mut overlays = Vec::new();
    place_overlays(&scenario.root, Frame::ROOT, &mut overlays);

    let bounds = MapBounds::from_tiles(&tiles);

    debug!(
        tiles = tiles.len(),
        overlays = overlays.len(),
        ?bounds,
        "flattened scenario map"
    );

    FlatMap {
        tiles,
        overlays,
        bounds,
    }
}
