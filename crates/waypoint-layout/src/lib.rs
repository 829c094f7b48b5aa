#![forbid(unsafe_code)]

//! Tooltip placement for spotlight tours.
//!
//! [`resolve_placement`] is the engine: it turns a [`PlacementRequest`] and a
//! [`Viewport`](waypoint_core::Viewport) snapshot into a [`Placement`].
//! [`mask_rect`] computes the matching spotlight cutout. Both are pure and
//! renderer-agnostic.

pub mod orientation;
pub mod placement;

pub use orientation::{CardinalOrientation, ParseOrientationError, Side};
pub use placement::{
    DEFAULT_PADDING, DEFAULT_TOOLTIP_SEPARATION, Placement, PlacementRequest, evaluate, mask_rect,
    resolve_placement,
};
