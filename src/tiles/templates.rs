//! Tile template catalog
//!
//! Fixed hex-occupancy grids for every map tile family, keyed by the first
//! character of a tile ref (`"g1a"` -> family `g`), plus a couple of
//! irregular tiles that are matched by their full name. Grids are written as
//! row masks: `#` is a hex cell, `.` is empty space.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hex::HexCoord;

/// Occupancy grid of a tile template, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    rows: Vec<Vec<bool>>,
}

impl TileGrid {
    /// Build a grid from row masks.
    pub fn from_mask(mask: &[&str]) -> Self {
        let rows = mask
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        self.rows.get(row).and_then(|r| r.get(col)).copied().unwrap_or(false)
    }

    /// Local coordinates of every occupied cell, row-major.
    pub fn occupied_cells(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(col, _)| HexCoord::new(col as i32, row as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| **cell).count()
    }

    /// The same grid with its row order reversed (a mirrored tile).
    pub fn row_reversed(&self) -> Self {
        Self {
            rows: self.rows.iter().rev().cloned().collect(),
        }
    }
}

/// Pixel offset of a tile image relative to its first hex, used by renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelOffset {
    pub x: i32,
    pub y: i32,
}

impl PixelOffset {
    const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

const A_GRID: &[&str] = &[
    "#####",
    "####.",
    "#####",
];

const B_GRID: &[&str] = &[
    "####",
    "####",
    "####",
    "####",
];

const C_GRID: &[&str] = &[
    ".##.",
    "###.",
    "####",
    "###.",
    ".##.",
];

const D_GRID: &[&str] = &[
    ".###.",
    "####.",
    "#####",
    "####.",
    ".###.",
];

const E_GRID: &[&str] = &[
    "#####",
    "#####",
    "#####",
    "#####",
    "#####",
];

const F_GRID: &[&str] = &[
    "#########",
    "########.",
    "#########",
];

const G_GRID: &[&str] = &[
    "########",
    "#######.",
    "########",
];

const H_GRID: &[&str] = &[
    "#######",
    "######.",
    "#####..",
    "####...",
    "###....",
    "##.....",
    "#......",
];

const I_GRID: &[&str] = &[
    "######",
    "######",
    "######",
    "######",
    "######",
];

const J_GRID: &[&str] = &[
    "#######",
    "######.",
    "######.",
    ".####..",
    "..###..",
    "...#...",
];

const K_GRID: &[&str] = &[
    "#########",
    "########.",
    ".#######.",
    ".######..",
    "..#####..",
    "..####...",
    "...###...",
];

const L_GRID: &[&str] = &[
    "#####",
    "#####",
    "#####",
    "#####",
    "#####",
    "#####",
    "#####",
];

const M_GRID: &[&str] = &[
    "..####..",
    ".#####..",
    ".######.",
    "#######.",
    "########",
    "#######.",
    ".######.",
    ".#####..",
    "..####..",
];

const N_GRID: &[&str] = &[
    "########",
    "#######.",
    "########",
    "#######.",
    "########",
    "#######.",
    "########",
];

/// Half of the J1 tile's back side, split along its long edge.
const J1BA_GRID: &[&str] = &[
    "#####",
    "####.",
    "###..",
    "##...",
];

/// Tile families keyed by the first character of the ref.
const FAMILIES: [(char, &[&str], PixelOffset); 14] = [
    ('a', A_GRID, PixelOffset::new(-22, -39)),
    ('b', B_GRID, PixelOffset::new(-45, -32)),
    ('c', C_GRID, PixelOffset::new(-38, -33)),
    ('d', D_GRID, PixelOffset::new(-38, -33)),
    ('e', E_GRID, PixelOffset::new(-45, -39)),
    ('f', F_GRID, PixelOffset::new(-22, -39)),
    ('g', G_GRID, PixelOffset::new(-22, -39)),
    ('h', H_GRID, PixelOffset::new(-45, -34)),
    ('i', I_GRID, PixelOffset::new(-45, -39)),
    ('j', J_GRID, PixelOffset::new(-34, -34)),
    ('k', K_GRID, PixelOffset::new(-45, -34)),
    ('l', L_GRID, PixelOffset::new(-45, -39)),
    ('m', M_GRID, PixelOffset::new(-52, -39)),
    ('n', N_GRID, PixelOffset::new(-45, -39)),
];

const J1BA_PIXEL_OFFSET: PixelOffset = PixelOffset::new(-34, -34);
const J1BB_PIXEL_OFFSET: PixelOffset = PixelOffset::new(-34, -141);

struct TemplateCatalog {
    families: HashMap<char, (TileGrid, PixelOffset)>,
    overrides: HashMap<&'static str, (TileGrid, PixelOffset)>,
    fallback: TileGrid,
}

impl TemplateCatalog {
    fn new() -> Self {
        let families = FAMILIES
            .iter()
            .map(|(family, mask, offset)| (*family, (TileGrid::from_mask(mask), *offset)))
            .collect();

        let j1ba = TileGrid::from_mask(J1BA_GRID);
        let j1bb = j1ba.row_reversed();
        let overrides = HashMap::from([
            ("j1ba", (j1ba, J1BA_PIXEL_OFFSET)),
            ("j1bb", (j1bb, J1BB_PIXEL_OFFSET)),
        ]);

        Self {
            families,
            overrides,
            fallback: TileGrid::from_mask(&["#"]),
        }
    }

    fn lookup(&self, template_ref: &str) -> Option<&(TileGrid, PixelOffset)> {
        let name = template_ref.to_ascii_lowercase();
        if let Some(entry) = self.overrides.get(name.as_str()) {
            return Some(entry);
        }
        name.chars().next().and_then(|family| self.families.get(&family))
    }
}

static CATALOG: LazyLock<TemplateCatalog> = LazyLock::new(TemplateCatalog::new);

/// Occupancy grid for a tile ref.
///
/// Unknown refs resolve to a single-cell grid so that the tile still has a
/// footprint on the map.
pub fn grid_for(template_ref: &str) -> &'static TileGrid {
    match CATALOG.lookup(template_ref) {
        Some((grid, _)) => grid,
        None => {
            debug!(template_ref, "unknown tile template, using single-cell footprint");
            &CATALOG.fallback
        }
    }
}

/// Pixel offset of the tile image for a tile ref; `(0, 0)` when unknown.
pub fn pixel_offset_for(template_ref: &str) -> PixelOffset {
    CATALOG
        .lookup(template_ref)
        .map(|(_, offset)| *offset)
        .unwrap_or_default()
}

/// Whether a ref resolves to a catalog entry rather than the fallback grid.
pub fn is_known_template(template_ref: &str) -> bool {
    CATALOG.lookup(template_ref).is_some()
}
