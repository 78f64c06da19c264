//! Hex grid coordinates and the frame transform used to place tiles.
//!
//! Coordinates are pointy-top "odd-r" offset coordinates: odd rows sit half a
//! cell to the right of even rows. Rotation happens in cube space, where a
//! 60 degree turn is a simple permutation with sign flip.
//!
//! All coordinate arithmetic wraps on `i32` overflow, so every input maps to
//! some coordinate. Cells within a few billion steps of each other are exact.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Number of distinct rotations of a hex cell.
pub const HEX_ROTATIONS: i32 = 6;

/// A (column, row) pair in either a fragment's local frame or the global map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    #[serde(alias = "x")]
    pub col: i32,
    #[serde(alias = "y")]
    pub row: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { col: 0, row: 0 };

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert to cube coordinates.
    pub fn to_cube(self) -> Cube {
        let x = self.col.wrapping_sub(row_shift(self.row));
        let z = self.row;
        Cube {
            x,
            y: x.wrapping_neg().wrapping_sub(z),
            z,
        }
    }

    /// The six adjacent cells, clockwise starting from the east neighbour.
    pub fn neighbors(self) -> [HexCoord; 6] {
        let cube = self.to_cube();
        CUBE_DIRECTIONS.map(|dir| (cube + dir).to_offset())
    }

    /// Number of single-cell steps between two coordinates, saturating at
    /// `u32::MAX`.
    pub fn distance(self, other: HexCoord) -> u32 {
        let cube = |c: HexCoord| {
            let x = i64::from(c.col) - i64::from(row_shift(c.row));
            let z = i64::from(c.row);
            (x, -x - z, z)
        };
        let (ax, ay, az) = cube(self);
        let (bx, by, bz) = cube(other);
        let steps = (ax.abs_diff(bx) + ay.abs_diff(by) + az.abs_diff(bz)) / 2;
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    pub fn is_adjacent(self, other: HexCoord) -> bool {
        self.distance(other) == 1
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Column shift of an odd-r row relative to row 0. Never overflows.
fn row_shift(row: i32) -> i32 {
    (row - (row & 1)) / 2
}

/// Cube coordinates, `x + y + z == 0` (modulo `2^32`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Clockwise from east: E, SE, SW, W, NW, NE.
const CUBE_DIRECTIONS: [Cube; 6] = [
    Cube { x: 1, y: -1, z: 0 },
    Cube { x: 0, y: -1, z: 1 },
    Cube { x: -1, y: 0, z: 1 },
    Cube { x: -1, y: 1, z: 0 },
    Cube { x: 0, y: 1, z: -1 },
    Cube { x: 1, y: 0, z: -1 },
];

impl Cube {
    pub fn to_offset(self) -> HexCoord {
        let col = self.x.wrapping_add(row_shift(self.z));
        HexCoord::new(col, self.z)
    }

    /// Rotate 60 degrees clockwise around the cube origin.
    pub fn rotate_cw(self) -> Cube {
        Cube {
            x: self.z.wrapping_neg(),
            y: self.x.wrapping_neg(),
            z: self.y.wrapping_neg(),
        }
    }

    /// Rotate clockwise by `turns` steps of 60 degrees. Negative turns rotate
    /// counter-clockwise.
    pub fn rotate(self, turns: i32) -> Cube {
        (0..turns.rem_euclid(HEX_ROTATIONS)).fold(self, |cube, _| cube.rotate_cw())
    }
}

impl Add for Cube {
    type Output = Cube;

    fn add(self, other: Cube) -> Cube {
        Cube {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
            z: self.z.wrapping_add(other.z),
        }
    }
}

impl Sub for Cube {
    type Output = Cube;

    fn sub(self, other: Cube) -> Cube {
        Cube {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
            z: self.z.wrapping_sub(other.z),
        }
    }
}

/// Map a point from a fragment's local frame into the global frame.
///
/// `local` is rotated by `turns` around `origin`, then translated so that
/// `origin` lands exactly on `reference`. At the scenario root both points
/// are `(0, 0)`.
pub fn rotate_and_translate(turns: i32, reference: HexCoord, origin: HexCoord, local: HexCoord) -> HexCoord {
    let offset = (local.to_cube() - origin.to_cube()).rotate(turns);
    (reference.to_cube() + offset).to_offset()
}
