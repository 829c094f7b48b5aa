#![forbid(unsafe_code)]

//! Tooltip orientations relative to a spotlight target.
//!
//! Each [`CardinalOrientation`] is a closed variant with one placement
//! formula. The first word of a variant names the side of the target the
//! tooltip sits on; the second word, when present, names the direction the
//! tooltip extends along that side, with its edge aligned to the mask edge.
//!
//! ```text
//!            NorthWest   North   NorthEast
//!                  ┌─────────────────┐
//!   WestNorth      │                 │      EastNorth
//!   West           │     target      │      East
//!   WestSouth      │                 │      EastSouth
//!                  └─────────────────┘
//!            SouthWest   South   SouthEast
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use waypoint_core::{Point, Size, ViewportRect, ViewportSpace};

/// Where the tooltip sits relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardinalOrientation {
    /// Above the target, horizontally centered.
    North,
    /// Above the target, left edge on the mask's left edge, extending east.
    NorthEast,
    /// Above the target, right edge on the mask's right edge, extending west.
    NorthWest,
    /// Below the target, horizontally centered.
    South,
    /// Below the target, extending east from the mask's left edge.
    SouthEast,
    /// Below the target, extending west from the mask's right edge.
    SouthWest,
    /// Right of the target, vertically centered.
    East,
    /// Right of the target, bottom edge on the mask's bottom edge, extending north.
    EastNorth,
    /// Right of the target, top edge on the mask's top edge, extending south.
    EastSouth,
    /// Left of the target, vertically centered.
    West,
    /// Left of the target, extending north from the mask's bottom edge.
    WestNorth,
    /// Left of the target, extending south from the mask's top edge.
    WestSouth,
}

/// The four sides of the target a tooltip can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
}

/// Alignment of the tooltip along the side it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Center,
    /// Leading edge on the mask's left (horizontal) or top (vertical) edge.
    Start,
    /// Trailing edge on the mask's right (horizontal) or bottom (vertical) edge.
    End,
}

impl CardinalOrientation {
    /// Every orientation in default priority order.
    ///
    /// Centered placements on each side come first, then the aligned
    /// variants.
    pub const ALL: [Self; 12] = [
        Self::South,
        Self::North,
        Self::East,
        Self::West,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthEast,
        Self::NorthWest,
        Self::EastSouth,
        Self::EastNorth,
        Self::WestSouth,
        Self::WestNorth,
    ];

    /// The side of the target this orientation attaches to.
    pub fn side(self) -> Side {
        match self {
            Self::North | Self::NorthEast | Self::NorthWest => Side::North,
            Self::South | Self::SouthEast | Self::SouthWest => Side::South,
            Self::East | Self::EastNorth | Self::EastSouth => Side::East,
            Self::West | Self::WestNorth | Self::WestSouth => Side::West,
        }
    }

    fn align(self) -> Align {
        match self {
            Self::North | Self::South | Self::East | Self::West => Align::Center,
            Self::NorthEast | Self::SouthEast | Self::EastSouth | Self::WestSouth => Align::Start,
            Self::NorthWest | Self::SouthWest | Self::EastNorth | Self::WestNorth => Align::End,
        }
    }

    /// Kebab-case name, as used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::NorthWest => "north-west",
            Self::South => "south",
            Self::SouthEast => "south-east",
            Self::SouthWest => "south-west",
            Self::East => "east",
            Self::EastNorth => "east-north",
            Self::EastSouth => "east-south",
            Self::West => "west",
            Self::WestNorth => "west-north",
            Self::WestSouth => "west-south",
        }
    }

    /// Top-left corner of the tooltip, in viewport space, when placed this way.
    ///
    /// `padding` is the mask's breathing room around the target and
    /// `separation` the extra gap between the mask edge and the tooltip.
    pub fn origin(
        self,
        target: &ViewportRect,
        tooltip: Size,
        padding: f64,
        separation: f64,
    ) -> Point<ViewportSpace> {
        let mask = target.expand_uniform(padding);
        let (w, h) = (tooltip.width, tooltip.height);

        match self.side() {
            Side::North | Side::South => {
                let y = if self.side() == Side::North {
                    mask.top - separation - h
                } else {
                    mask.bottom() + separation
                };
                let x = match self.align() {
                    Align::Center => target.center_x() - w / 2.0,
                    Align::Start => mask.left,
                    Align::End => mask.right() - w,
                };
                Point::new(x, y)
            }
            Side::East | Side::West => {
                let x = if self.side() == Side::East {
                    mask.right() + separation
                } else {
                    mask.left - separation - w
                };
                let y = match self.align() {
                    Align::Center => target.center_y() - h / 2.0,
                    Align::Start => mask.top,
                    Align::End => mask.bottom() - h,
                };
                Point::new(x, y)
            }
        }
    }
}

impl fmt::Display for CardinalOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no orientation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown orientation `{0}`")]
pub struct ParseOrientationError(pub String);

impl FromStr for CardinalOrientation {
    type Err = ParseOrientationError;

    /// Accepts kebab-case, snake_case and compact spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().replace('-', "") == normalized)
            .ok_or_else(|| ParseOrientationError(s.to_string()))
    }
}
