#![forbid(unsafe_code)]

//! Tooltip placement resolver.
//!
//! Given the target's viewport rectangle, the measured tooltip size, the
//! padding/separation budget and an ordered list of orientation preferences,
//! [`resolve_placement`] picks one orientation and returns page-absolute
//! coordinates for the tooltip.
//!
//! # Invariants
//!
//! 1. No measurement, no placement: a request without a tooltip size yields
//!    `None` so the caller keeps the tooltip hidden.
//! 2. First fit wins. Candidates are tried in preference order and the first
//!    one whose box stays inside the viewport on all four sides is chosen,
//!    even if a later candidate has more room.
//! 3. When nothing fits, the first preference is used anyway and the result
//!    is marked `fits == false`. The box is not clamped.
//! 4. The result depends only on the request and the injected [`Viewport`].
//!
//! # Example
//!
//! ```
//! use waypoint_core::{Size, Viewport, ViewportRect};
//! use waypoint_layout::{CardinalOrientation, PlacementRequest, resolve_placement};
//!
//! let request = PlacementRequest::new(ViewportRect::new(100.0, 100.0, 50.0, 50.0))
//!     .tooltip(Size::new(200.0, 80.0))
//!     .preferences([CardinalOrientation::South]);
//! let placement = resolve_placement(&request, &Viewport::new(1024.0, 768.0)).unwrap();
//! assert_eq!(placement.coords.y, 165.0);
//! assert!(placement.fits);
//! ```

use tracing::debug;
use waypoint_core::{Coords, Insets, PageRect, Size, Viewport, ViewportRect};

use crate::orientation::CardinalOrientation;

/// Default breathing room between the target and the mask edge.
pub const DEFAULT_PADDING: f64 = 5.0;
/// Default gap between the mask edge and the tooltip.
pub const DEFAULT_TOOLTIP_SEPARATION: f64 = 10.0;

/// Everything the resolver needs for one placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    /// Target bounds, relative to the viewport.
    pub target: ViewportRect,
    /// Measured tooltip size; `None` until the tooltip has been laid out once.
    /// Sizes that are not [`Size::is_usable`] are treated as unmeasured.
    pub tooltip: Option<Size>,
    /// Space reserved around the target for the mask cutout.
    pub padding: f64,
    /// Extra gap between the mask edge and the tooltip.
    pub tooltip_separation: f64,
    /// Orientations to try, highest priority first. Empty means
    /// [`CardinalOrientation::ALL`].
    pub orientation_preferences: Vec<CardinalOrientation>,
}

impl PlacementRequest {
    /// Request with default padding and separation and no measurement yet.
    pub fn new(target: ViewportRect) -> Self {
        Self {
            target,
            tooltip: None,
            padding: DEFAULT_PADDING,
            tooltip_separation: DEFAULT_TOOLTIP_SEPARATION,
            orientation_preferences: Vec::new(),
        }
    }

    /// Set the measured tooltip size. Non-finite or negative sizes leave the
    /// tooltip unmeasured.
    #[must_use]
    pub fn tooltip(self, size: Size) -> Self {
        self.maybe_tooltip(Some(size))
    }

    /// Set the measured tooltip size, or clear it.
    #[must_use]
    pub fn maybe_tooltip(mut self, size: Option<Size>) -> Self {
        self.tooltip = size.filter(Size::is_usable);
        self
    }

    /// Set the mask padding. Negative or non-finite values become zero.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = non_negative(padding);
        self
    }

    /// Set the tooltip separation. Negative or non-finite values become zero.
    #[must_use]
    pub fn separation(mut self, separation: f64) -> Self {
        self.tooltip_separation = non_negative(separation);
        self
    }

    /// Set the orientation priority list.
    #[must_use]
    pub fn preferences(mut self, prefs: impl IntoIterator<Item = CardinalOrientation>) -> Self {
        self.orientation_preferences = prefs.into_iter().collect();
        self
    }

    /// The orientations the resolver will try, in order.
    pub fn candidates(&self) -> &[CardinalOrientation] {
        if self.orientation_preferences.is_empty() {
            &CardinalOrientation::ALL
        } else {
            &self.orientation_preferences
        }
    }
}

/// A resolved tooltip position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The orientation that was chosen.
    pub orientation: CardinalOrientation,
    /// Page-absolute top-left corner of the tooltip.
    pub coords: Coords,
    /// Page-absolute tooltip box.
    pub rect: PageRect,
    /// Overflow past each viewport edge; positive sides are clipped.
    pub overflow: Insets,
    /// Whether the tooltip lies entirely inside the viewport.
    pub fits: bool,
}

/// Place the tooltip using one specific orientation, ignoring preferences.
pub fn evaluate(
    orientation: CardinalOrientation,
    request: &PlacementRequest,
    tooltip: Size,
    viewport: &Viewport,
) -> Placement {
    let padding = non_negative(request.padding);
    let separation = non_negative(request.tooltip_separation);
    let origin = orientation.origin(&request.target, tooltip, padding, separation);
    let local = ViewportRect::from_origin_size(origin, tooltip);
    let overflow = local.overflow(&viewport.bounds());
    let rect = local.to_page(viewport);

    Placement {
        orientation,
        coords: rect.origin(),
        rect,
        overflow,
        fits: overflow.is_non_positive(),
    }
}

/// Choose an orientation and compute the tooltip's page coordinates.
///
/// Returns `None` while the tooltip is unmeasured or its size is not
/// usable. Otherwise returns the
/// first candidate that fits, or the first candidate with `fits == false`
/// when none does.
pub fn resolve_placement(request: &PlacementRequest, viewport: &Viewport) -> Option<Placement> {
    let tooltip = request.tooltip.filter(Size::is_usable)?;
    let candidates = request.candidates();

    let mut fallback = None;
    for &orientation in candidates {
        let placement = evaluate(orientation, request, tooltip, viewport);
        if placement.fits {
            debug!(
                orientation = %orientation,
                x = placement.coords.x,
                y = placement.coords.y,
                "tooltip placed"
            );
            return Some(placement);
        }
        fallback.get_or_insert(placement);
    }

    let placement = fallback?;
    debug!(
        orientation = %placement.orientation,
        overflow = placement.overflow.max_side(),
        tried = candidates.len(),
        "no orientation fits; using first preference"
    );
    Some(placement)
}

/// The spotlight cutout: the target grown by `padding`, in page space,
/// rounded to whole pixels.
pub fn mask_rect(target: &ViewportRect, padding: f64, viewport: &Viewport) -> PageRect {
    target
        .expand_uniform(non_negative(padding))
        .to_page(viewport)
        .round()
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
