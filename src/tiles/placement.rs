//! Fragment placement
//!
//! Walks the tile tree depth-first. Each fragment is placed in a frame
//! inherited from its parent door: the door's global position is the frame's
//! reference point, and the child's `room2` cell is pinned to it.

use tracing::trace;

use crate::hex::{rotate_and_translate, HexCoord};
use crate::scenario::{Door, TileFragment};

use super::overlays::{classify_overlay, door_render_name};
use super::templates::grid_for;
use super::types::{PositionedOverlay, PositionedTile};

/// Alignment of a fragment's local frame with the global map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Global point the origin is pinned to.
    pub reference: HexCoord,
    /// Local point that lands on `reference`.
    pub origin: HexCoord,
}

impl Frame {
    pub const ROOT: Frame = Frame {
        reference: HexCoord::ORIGIN,
        origin: HexCoord::ORIGIN,
    };

    /// Map a local cell of a fragment rotated by `turns` into global space.
    pub fn to_global(&self, turns: i32, local: HexCoord) -> HexCoord {
        rotate_and_translate(turns, self.reference, self.origin, local)
    }

    /// Global position of a door on the fragment placed in this frame.
    pub fn hinge(&self, turns: i32, door: &Door) -> HexCoord {
        self.to_global(turns, door.room1)
    }

    /// Frame of the fragment behind `door`.
    pub fn through(&self, turns: i32, door: &Door) -> Frame {
        Frame {
            reference: self.hinge(turns, door),
            origin: door.room2,
        }
    }
}

/// Append the positioned tiles of `fragment` and its whole subtree.
///
/// Order per fragment: template cells (row-major), overlay cells, then for
/// each door its hinge cell followed by the child's subtree.
pub fn place_tiles(fragment: &TileFragment, frame: Frame, out: &mut Vec<PositionedTile>) {
    let turns = fragment.turns;
    let tile_at = |coord: HexCoord| PositionedTile {
        template_ref: fragment.template_ref.clone(),
        turns,
        coord,
    };

    let grid = grid_for(&fragment.template_ref);
    out.extend(grid.occupied_cells().map(|local| tile_at(frame.to_global(turns, local))));

    for overlay in &fragment.overlays {
        out.extend(overlay.cells.iter().map(|&local| tile_at(frame.to_global(turns, local))));
    }

    for door in &fragment.doors {
        out.push(tile_at(frame.hinge(turns, door)));
        place_tiles(&door.tile, frame.through(turns, door), out);
    }
}

/// Append the positioned overlays of `fragment` and its whole subtree.
///
/// Order per fragment: the fragment's own overlays, then for each door the
/// door itself followed by the child's subtree.
pub fn place_overlays(fragment: &TileFragment, frame: Frame, out: &mut Vec<PositionedOverlay>) {
    let turns = fragment.turns;

    for overlay in &fragment.overlays {
        let name = classify_overlay(&overlay.category, overlay.subtype.as_deref(), &overlay.orientation);
        if name.is_empty() {
            trace!(category = %overlay.category, "overlay has no render name, dropped");
            continue;
        }

        let cells: Vec<HexCoord> = overlay
            .cells
            .iter()
            .map(|&local| frame.to_global(turns, local))
            .collect();
        let Some(&anchor) = cells.first() else {
            trace!(%name, "overlay covers no cells, dropped");
            continue;
        };

        out.push(PositionedOverlay {
            name,
            orientation: overlay.orientation.clone(),
            anchor,
            cells,
        });
    }

    for door in &fragment.doors {
        let hinge = frame.hinge(turns, door);
        let name = door_render_name(door.subtype.as_deref(), &door.orientation);
        if name.is_empty() {
            trace!(subtype = ?door.subtype, "door has no render name, dropped");
        } else {
            out.push(PositionedOverlay {
                name,
                orientation: door.orientation.clone(),
                anchor: hinge,
                cells: vec![hinge],
            });
        }
        place_overlays(&door.tile, frame.through(turns, door), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Orientation, OverlayCategory, OverlayDescriptor};

    #[test]
    fn test_root_frame_is_identity_at_zero_turns() {
        for local in [HexCoord::new(0, 0), HexCoord::new(3, 1), HexCoord::new(-2, 5)] {
            assert_eq!(Frame::ROOT.to_global(0, local), local);
        }
    }

    #[test]
    fn test_child_origin_sits_on_hinge() {
        let door = Door::new(HexCoord::new(4, 2), HexCoord::new(1, 1), TileFragment::new("a1a", 2));
        for parent_turns in 0..6 {
            let parent = Frame {
                reference: HexCoord::new(-3, 5),
                origin: HexCoord::new(2, 0),
            };
            let child = parent.through(parent_turns, &door);
            let hinge = parent.hinge(parent_turns, &door);
            for child_turns in 0..6 {
                assert_eq!(child.to_global(child_turns, door.room2), hinge);
            }
        }
    }

    #[test]
    fn test_overlay_cells_extend_footprint() {
        // A corridor overlay reaching past the single-cell fallback grid.
        let fragment = TileFragment::new("unknown", 0).with_overlay(OverlayDescriptor::new(
            OverlayCategory::DifficultTerrain,
            Some("water"),
            Orientation::Horizontal,
            vec![HexCoord::new(1, 0), HexCoord::new(2, 0)],
        ));
        let mut tiles = Vec::new();
        place_tiles(&fragment, Frame::ROOT, &mut tiles);

        let coords: Vec<_> = tiles.iter().map(|t| t.coord).collect();
        assert_eq!(coords, vec![HexCoord::new(0, 0), HexCoord::new(1, 0), HexCoord::new(2, 0)]);
        assert!(tiles.iter().all(|t| t.template_ref == "unknown"));
    }

    #[test]
    fn test_door_overlay_follows_own_overlays() {
        let child = TileFragment::new("a1a", 0).with_overlay(OverlayDescriptor::new(
            OverlayCategory::Trap,
            Some("spike"),
            Orientation::Horizontal,
            vec![HexCoord::new(1, 0)],
        ));
        let root = TileFragment::new("b1a", 0)
            .with_overlay(OverlayDescriptor::new(
                OverlayCategory::Obstacle,
                Some("table"),
                Orientation::Horizontal,
                vec![HexCoord::new(1, 1), HexCoord::new(2, 1)],
            ))
            .with_door(
                Door::new(HexCoord::new(3, 1), HexCoord::ORIGIN, child)
                    .with_style("wooden", Orientation::Vertical),
            );

        let mut overlays = Vec::new();
        place_overlays(&root, Frame::ROOT, &mut overlays);

        let names: Vec<_> = overlays.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["obstacle-table", "door-wooden-vert", "trap-spike"]);
        assert_eq!(overlays[0].anchor, HexCoord::new(1, 1));
        assert_eq!(overlays[0].cells, vec![HexCoord::new(1, 1), HexCoord::new(2, 1)]);
        assert_eq!(overlays[1].anchor, HexCoord::new(3, 1));
        assert_eq!(overlays[1].cells, vec![HexCoord::new(3, 1)]);
        // Child (1, 0) is one step east of its origin, which sits on (3, 1).
        assert_eq!(overlays[2].anchor, HexCoord::new(4, 1));
    }

    #[test]
    fn test_empty_overlay_is_dropped() {
        let fragment = TileFragment::new("a1a", 0).with_overlay(OverlayDescriptor::new(
            OverlayCategory::Obstacle,
            Some("boulder"),
            Orientation::Horizontal,
            Vec::new(),
        ));
        let mut overlays = Vec::new();
        place_overlays(&fragment, Frame::ROOT, &mut overlays);
        assert!(overlays.is_empty());
    }
}
