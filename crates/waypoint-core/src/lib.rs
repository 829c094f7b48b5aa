#![forbid(unsafe_code)]

//! Core: coordinate spaces, viewport snapshots, and input events.
//!
//! # Role in Waypoint
//! `waypoint-core` is the bottom layer. It owns the geometric vocabulary the
//! placement engine and the tour controller share, and the keyboard events
//! the controller consumes.
//!
//! # Primary responsibilities
//! - **Coordinate spaces**: [`geometry::ViewportRect`] and
//!   [`geometry::PageRect`] are distinct types; conversion goes through a
//!   [`geometry::Viewport`] snapshot.
//! - **Viewport snapshot**: explicit size and scroll offset, captured by the
//!   host at call time instead of read from ambient state.
//! - **Events**: normalized key events for tour navigation.

pub mod event;
pub mod geometry;

pub use geometry::{
    Coords, Insets, PageRect, PageSpace, Point, Rect, Size, Viewport, ViewportRect, ViewportSpace,
    to_absolute_coords,
};
