#![forbid(unsafe_code)]

//! Guided tour controller.
//!
//! # Role in Waypoint
//! `waypoint-tour` sequences [`TourStep`]s, looks each target up through
//! `waypoint-dom`, places the tooltip with `waypoint-layout`, and hands the
//! host an [`OverlayState`] to draw. The host owns painting and measurement.
//!
//! # Flow
//! 1. [`Tour::start`] locates the first target and computes its mask.
//! 2. The host renders the tooltip invisibly and calls
//!    [`Tour::on_tooltip_measured`] with its size.
//! 3. [`Tour::overlay`] now carries a placement; the host shows the tooltip.
//! 4. Navigation ([`Tour::next`], [`Tour::handle_key`], ...) repeats from 1
//!    for the new step. Resize and scroll call [`Tour::refresh`].

pub mod config;
pub mod definition;
pub mod error;
pub mod keys;
pub mod render;
pub mod tour;

pub use config::{Labels, TourConfig};
pub use definition::{TourDefinition, TourStep};
pub use error::{Result, TourError};
pub use keys::{KeyBindings, TourAction};
pub use render::{
    NavButton, NavButtons, RenderStrategy, StepContext, TextMetrics, TooltipContent,
    TooltipTemplate,
};
pub use tour::{OverlayState, StepChangeReason, StepLayout, Tour, TourEvent, TourStatus};
