//! Scenario tile tree types
//!
//! A scenario is a strict tree: each tile fragment owns its doors, and each
//! door owns the fragment on its far side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;

/// A scenario map as handed over by the loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub root: TileFragment,
}

impl Scenario {
    pub fn new(root: TileFragment) -> Self {
        Self { name: None, root }
    }

    /// Total number of tile fragments in the tree.
    pub fn fragment_count(&self) -> usize {
        self.root.fragment_count()
    }

    /// Door-nesting depth; a lone root fragment has depth 1.
    pub fn max_depth(&self) -> usize {
        self.root.depth()
    }
}

/// One physical map tile placed in the scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileFragment {
    /// Tile ref, e.g. `"g1a"`.
    #[serde(rename = "ref")]
    pub template_ref: String,
    /// Rotation in 60 degree steps.
    #[serde(default)]
    pub turns: i32,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub overlays: Vec<OverlayDescriptor>,
}

impl TileFragment {
    pub fn new(template_ref: impl Into<String>, turns: i32) -> Self {
        Self {
            template_ref: template_ref.into(),
            turns,
            doors: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn with_door(mut self, door: Door) -> Self {
        self.doors.push(door);
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayDescriptor) -> Self {
        self.overlays.push(overlay);
        self
    }

    pub fn fragment_count(&self) -> usize {
        1 + self.doors.iter().map(|door| door.tile.fragment_count()).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.doors.iter().map(|door| door.tile.depth()).max().unwrap_or(0)
    }
}

/// Connects a parent fragment to the child fragment it owns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Door style, e.g. `"stone"`, `"dark-fog"`, `"corridor-earth-1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, alias = "direction")]
    pub orientation: Orientation,
    /// Door position in the parent's local frame.
    pub room1: HexCoord,
    /// Point in the child's local frame that sits on the door.
    pub room2: HexCoord,
    #[serde(alias = "child")]
    pub tile: TileFragment,
}

impl Door {
    pub fn new(room1: HexCoord, room2: HexCoord, tile: TileFragment) -> Self {
        Self {
            subtype: None,
            orientation: Orientation::default(),
            room1,
            room2,
            tile,
        }
    }

    pub fn with_style(mut self, subtype: impl Into<String>, orientation: Orientation) -> Self {
        self.subtype = Some(subtype.into());
        self.orientation = orientation;
        self
    }
}

/// A non-floor feature occupying one or more local cells of a fragment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayDescriptor {
    pub category: OverlayCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, alias = "direction")]
    pub orientation: Orientation,
    #[serde(default)]
    pub cells: Vec<HexCoord>,
}

impl OverlayDescriptor {
    pub fn new(category: OverlayCategory, subtype: Option<&str>, orientation: Orientation, cells: Vec<HexCoord>) -> Self {
        Self {
            category,
            subtype: subtype.map(str::to_owned),
            orientation,
            cells,
        }
    }
}

/// Overlay category. Unrecognised names are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OverlayCategory {
    Obstacle,
    Trap,
    Hazard,
    DifficultTerrain,
    Treasure,
    Wall,
    Rift,
    Door,
    StartingLocation,
    Token,
    Other(String),
}

impl OverlayCategory {
    pub fn as_str(&self) -> &str {
        match self {
            OverlayCategory::Obstacle => "obstacle",
            OverlayCategory::Trap => "trap",
            OverlayCategory::Hazard => "hazard",
            OverlayCategory::DifficultTerrain => "difficult-terrain",
            OverlayCategory::Treasure => "treasure",
            OverlayCategory::Wall => "wall",
            OverlayCategory::Rift => "rift",
            OverlayCategory::Door => "door",
            OverlayCategory::StartingLocation => "starting-location",
            OverlayCategory::Token => "token",
            OverlayCategory::Other(name) => name,
        }
    }
}

impl From<&str> for OverlayCategory {
    fn from(name: &str) -> Self {
        match name {
            "obstacle" => OverlayCategory::Obstacle,
            "trap" => OverlayCategory::Trap,
            "hazard" => OverlayCategory::Hazard,
            "difficult-terrain" => OverlayCategory::DifficultTerrain,
            "treasure" => OverlayCategory::Treasure,
            "wall" => OverlayCategory::Wall,
            "rift" => OverlayCategory::Rift,
            "door" => OverlayCategory::Door,
            "starting-location" => OverlayCategory::StartingLocation,
            "token" => OverlayCategory::Token,
            other => OverlayCategory::Other(other.to_owned()),
        }
    }
}

impl From<String> for OverlayCategory {
    fn from(name: String) -> Self {
        OverlayCategory::from(name.as_str())
    }
}

impl From<OverlayCategory> for String {
    fn from(category: OverlayCategory) -> Self {
        category.as_str().to_owned()
    }
}

impl fmt::Display for OverlayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facing of a door or overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orientation {
    #[default]
    Horizontal,
    HorizontalReverse,
    Vertical,
    VerticalReverse,
    DiagonalLeft,
    DiagonalLeftReverse,
    DiagonalRight,
    DiagonalRightReverse,
    Other(String),
}

impl Orientation {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical | Orientation::VerticalReverse)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::HorizontalReverse => "horizontal-reverse",
            Orientation::Vertical => "vertical",
            Orientation::VerticalReverse => "vertical-reverse",
            Orientation::DiagonalLeft => "diagonal-left",
            Orientation::DiagonalLeftReverse => "diagonal-left-reverse",
            Orientation::DiagonalRight => "diagonal-right",
            Orientation::DiagonalRightReverse => "diagonal-right-reverse",
            Orientation::Other(name) => name,
        }
    }
}

impl From<&str> for Orientation {
    fn from(name: &str) -> Self {
        match name {
            "horizontal" => Orientation::Horizontal,
            "horizontal-reverse" => Orientation::HorizontalReverse,
            "vertical" => Orientation::Vertical,
            "vertical-reverse" => Orientation::VerticalReverse,
            "diagonal-left" => Orientation::DiagonalLeft,
            "diagonal-left-reverse" => Orientation::DiagonalLeftReverse,
            "diagonal-right" => Orientation::DiagonalRight,
            "diagonal-right-reverse" => Orientation::DiagonalRightReverse,
            other => Orientation::Other(other.to_owned()),
        }
    }
}

impl From<String> for Orientation {
    fn from(name: String) -> Self {
        Orientation::from(name.as_str())
    }
}

impl From<Orientation> for String {
    fn from(orientation: Orientation) -> Self {
        orientation.as_str().to_owned()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
