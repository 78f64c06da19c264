//! Flattened map types
//!
//! The result of placing every fragment of a scenario in one global hex space.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;
use crate::scenario::Orientation;

/// One occupied global cell, tagged with the tile it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedTile {
    #[serde(rename = "ref")]
    pub template_ref: String,
    pub turns: i32,
    pub coord: HexCoord,
}

/// An overlay placed on the global map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedOverlay {
    /// Rendering category, e.g. `"obstacle-boulder"` or `"door-stone-vert"`.
    pub name: String,
    pub orientation: Orientation,
    /// First covered cell; renderers anchor the image here.
    pub anchor: HexCoord,
    pub cells: Vec<HexCoord>,
}

/// Inclusive extent of the positioned tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl MapBounds {
    /// Bounds of a single cell.
    pub fn at(coord: HexCoord) -> Self {
        Self {
            min_col: coord.col,
            max_col: coord.col,
            min_row: coord.row,
            max_row: coord.row,
        }
    }

    /// Grow to include `coord`.
    pub fn include(self, coord: HexCoord) -> Self {
        Self {
            min_col: self.min_col.min(coord.col),
            max_col: self.max_col.max(coord.col),
            min_row: self.min_row.min(coord.row),
            max_row: self.max_row.max(coord.row),
        }
    }

    /// Fold over all tiles; an empty slice yields the zero bound.
    pub fn from_tiles(tiles: &[PositionedTile]) -> Self {
        let mut coords = tiles.iter().map(|tile| tile.coord);
        match coords.next() {
            Some(first) => coords.fold(Self::at(first), Self::include),
            None => Self::default(),
        }
    }

    pub fn contains(&self, coord: HexCoord) -> bool {
        (self.min_col..=self.max_col).contains(&coord.col) && (self.min_row..=self.max_row).contains(&coord.row)
    }

    /// Inclusive column extent. Wide enough for a map spanning all of `i32`.
    pub fn width(&self) -> u64 {
        u64::from(self.max_col.abs_diff(self.min_col)) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.max_row.abs_diff(self.min_row)) + 1
    }
}

/// Every tile and overlay of a scenario in global coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatMap {
    pub tiles: Vec<PositionedTile>,
    pub overlays: Vec<PositionedOverlay>,
    pub bounds: MapBounds,
}

impl FlatMap {
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles on a global cell, in output order. Overlapping fragments may
    /// yield more than one.
    pub fn tiles_at(&self, coord: HexCoord) -> impl Iterator<Item = &PositionedTile> + '_ {
        self.tiles.iter().filter(move |tile| tile.coord == coord)
    }

    pub fn is_occupied(&self, coord: HexCoord) -> bool {
        self.tiles.iter().any(|tile| tile.coord == coord)
    }

    /// Overlays covering a global cell.
    pub fn overlays_at(&self, coord: HexCoord) -> impl Iterator<Item = &PositionedOverlay> + '_ {
        self.overlays
            .iter()
            .filter(move |overlay| overlay.cells.contains(&coord))
    }

    /// Occupied cells adjacent to `coord`, clockwise from east.
    pub fn occupied_neighbors(&self, coord: HexCoord) -> Vec<HexCoord> {
        let cells = self.unique_cells();
        coord
            .neighbors()
            .into_iter()
            .filter(|n| cells.contains(n))
            .collect()
    }

    /// Distinct occupied cells, sorted by column then row.
    pub fn unique_cells(&self) -> BTreeSet<HexCoord> {
        self.tiles.iter().map(|tile| tile.coord).collect()
    }
}
