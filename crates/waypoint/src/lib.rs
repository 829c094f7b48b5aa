#![forbid(unsafe_code)]

//! Waypoint public facade crate.
//!
//! Re-exports the geometry, placement, lookup and tour types from the
//! internal crates and offers a prelude for day-to-day usage.
//!
//! ```
//! use waypoint::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.append(
//!     Element::new("button")
//!         .id("save")
//!         .rect(ViewportRect::new(100.0, 100.0, 50.0, 50.0)),
//! );
//!
//! let config = TourConfig::default().orientation_preferences([CardinalOrientation::South]);
//! let viewport = Viewport::new(1024.0, 768.0);
//! let placement = waypoint::place(&doc, "#save", Some(Size::new(200.0, 80.0)), &config, &viewport)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(placement.coords, Coords::new(25.0, 165.0));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use waypoint_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use waypoint_core::{
    Coords, Insets, PageRect, PageSpace, Point, Rect, Size, Viewport, ViewportRect, ViewportSpace,
    to_absolute_coords,
};

// --- Layout re-exports -----------------------------------------------------

pub use waypoint_layout::{
    CardinalOrientation, DEFAULT_PADDING, DEFAULT_TOOLTIP_SEPARATION, ParseOrientationError,
    Placement, PlacementRequest, Side, evaluate, mask_rect, resolve_placement,
};

// --- Lookup re-exports -----------------------------------------------------

pub use waypoint_dom::{
    Document, Element, ElementId, ElementSource, LocateError, Selector, SelectorError,
    locate_target,
};

// --- Tour re-exports -------------------------------------------------------

pub use waypoint_tour::{
    KeyBindings, Labels, NavButton, NavButtons, OverlayState, RenderStrategy, StepChangeReason,
    StepContext, StepLayout, TextMetrics, TooltipContent, TooltipTemplate, Tour, TourAction,
    TourConfig, TourDefinition, TourError, TourEvent, TourStatus, TourStep,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for waypoint hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Tour(#[from] TourError),
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error(transparent)]
    Orientation(#[from] ParseOrientationError),
}

/// Standard result type for waypoint APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Locate `selector` and place a tooltip next to it in one call.
///
/// Uses the padding, separation and orientation priority from `config`,
/// clamped the same way [`Tour`] clamps them. Returns `Ok(None)` while
/// `tooltip` is unmeasured.
pub fn place<S>(
    source: &S,
    selector: &str,
    tooltip: Option<Size>,
    config: &TourConfig,
    viewport: &Viewport,
) -> Result<Option<Placement>>
where
    S: ElementSource + ?Sized,
{
    let target = locate_target(source, selector)?;
    let config = config.clone().validated();
    let request = PlacementRequest::new(target)
        .maybe_tooltip(tooltip)
        .padding(config.padding)
        .separation(config.tooltip_separation)
        .preferences(config.orientation_preferences.iter().copied());
    Ok(resolve_placement(&request, viewport))
}

/// Structured JSON logging for hosts that do not install their own
/// subscriber.
#[cfg(feature = "tracing-json")]
pub mod logging {
    use tracing_subscriber::EnvFilter;

    /// Environment variable holding the filter directives.
    pub const LOG_ENV: &str = "WAYPOINT_LOG";

    /// Install a global JSON subscriber filtered by `WAYPOINT_LOG`
    /// (default `info`).
    ///
    /// Fails if a global subscriber is already set.
    pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    }
}

// --- Prelude ---------------------------------------------------------------

/// Common imports for waypoint hosts.
pub mod prelude {
    pub use crate::{
        CardinalOrientation, Coords, Document, Element, ElementSource, Error, KeyCode, KeyEvent,
        OverlayState, PageRect, Placement, PlacementRequest, Result, Size, TextMetrics, Tour,
        TourAction, TourConfig, TourDefinition, TourEvent, TourStep, Viewport, ViewportRect,
        locate_target, resolve_placement,
    };
}
