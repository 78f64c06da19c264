//! Overlay rendering categories
//!
//! Maps an overlay's category, subtype and orientation to the name a renderer
//! uses to pick its image. An empty name means "do not render".

use crate::scenario::{Orientation, OverlayCategory};

const VERTICAL_SUFFIX: &str = "-vert";

/// Canonical door styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DoorStyle {
    Stone,
    Wooden,
    DarkFog,
    LightFog,
    BreakableWall,
    Altar,
    /// Corridor pieces render under their own name.
    Corridor(String),
}

impl DoorStyle {
    /// Parse a door subtype, ignoring ASCII case like template refs do.
    /// Anything unrecognised is a stone door.
    pub fn parse(subtype: Option<&str>) -> Self {
        let raw = subtype.unwrap_or_default();
        match raw.to_ascii_lowercase().as_str() {
            "wooden" => DoorStyle::Wooden,
            "dark-fog" | "darkfog" => DoorStyle::DarkFog,
            "light-fog" | "lightfog" => DoorStyle::LightFog,
            "breakable-wall" | "breakablewall" => DoorStyle::BreakableWall,
            "altar" | "alter" => DoorStyle::Altar,
            name if name.starts_with("corridor") => DoorStyle::Corridor(raw.to_owned()),
            _ => DoorStyle::Stone,
        }
    }

    pub fn base_name(&self) -> &str {
        match self {
            DoorStyle::Stone => "door-stone",
            DoorStyle::Wooden => "door-wooden",
            DoorStyle::DarkFog => "door-dark-fog",
            DoorStyle::LightFog => "door-light-fog",
            DoorStyle::BreakableWall => "door-breakable-wall",
            DoorStyle::Altar => "door-altar",
            DoorStyle::Corridor(name) => name,
        }
    }

    /// Whether the style has a separate image for vertical doors.
    pub fn has_vertical_variant(&self) -> bool {
        matches!(self, DoorStyle::Stone | DoorStyle::Wooden | DoorStyle::BreakableWall)
    }
}

/// Render name for a door of the given style.
pub fn door_render_name(subtype: Option<&str>, orientation: &Orientation) -> String {
    let style = DoorStyle::parse(subtype);
    if orientation.is_vertical() && style.has_vertical_variant() {
        format!("{}{}", style.base_name(), VERTICAL_SUFFIX)
    } else {
        style.base_name().to_owned()
    }
}

/// Render name for an overlay; empty when it should not be drawn.
pub fn classify_overlay(category: &OverlayCategory, subtype: Option<&str>, orientation: &Orientation) -> String {
    match category {
        OverlayCategory::StartingLocation | OverlayCategory::Token => String::new(),
        OverlayCategory::Door => door_render_name(subtype, orientation),
        OverlayCategory::Obstacle | OverlayCategory::Trap | OverlayCategory::Hazard | OverlayCategory::Wall => {
            with_subtype(category.as_str(), subtype)
        }
        OverlayCategory::DifficultTerrain => match subtype {
            Some(stairs) if stairs.eq_ignore_ascii_case("stairs") && orientation.is_vertical() => format!("difficult-terrain-stairs{}", VERTICAL_SUFFIX),
            _ => with_subtype(category.as_str(), subtype),
        },
        OverlayCategory::Treasure => match subtype {
            Some(coin) if coin.eq_ignore_ascii_case("coin") => "treasure-coin".to_owned(),
            _ => "treasure-chest".to_owned(),
        },
        OverlayCategory::Rift => "rift".to_owned(),
        OverlayCategory::Other(_) => String::new(),
    }
}

fn with_subtype(category: &str, subtype: Option<&str>) -> String {
    match subtype {
        Some(subtype) if !subtype.is_empty() => format!("{}-{}", category, subtype),
        _ => category.to_owned(),
    }
}
