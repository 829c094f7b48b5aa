#![forbid(unsafe_code)]

//! Geometric primitives tagged with the coordinate space they live in.
//!
//! Element rectangles come back from the host relative to the visible
//! viewport, while overlay elements are positioned in page-absolute
//! coordinates. The two spaces differ by the page scroll offset. [`Rect`] and
//! [`Point`] carry a zero-sized space marker so that a viewport rectangle can
//! never be handed to code expecting page coordinates without an explicit
//! conversion through a [`Viewport`] snapshot.

use std::fmt;
use std::marker::PhantomData;

/// Coordinates relative to the top-left corner of the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportSpace;

/// Coordinates relative to the top-left corner of the scrolled page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageSpace;

/// Rectangle in viewport-relative coordinates.
pub type ViewportRect = Rect<ViewportSpace>;
/// Rectangle in page-absolute coordinates.
pub type PageRect = Rect<PageSpace>;
/// Page-absolute position used for mask and tooltip placement.
pub type Coords = Point<PageSpace>;

/// A position in coordinate space `S`, in CSS pixels.
pub struct Point<S> {
    pub x: f64,
    pub y: f64,
    space: PhantomData<S>,
}

impl<S> Point<S> {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Round both components to the nearest whole pixel.
    #[inline]
    #[must_use]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

/// Width and height in pixels. Sizes are space-independent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Check if both dimensions are finite and non-negative.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Per-side amounts, used both for expansion and for viewport overflow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const ZERO: Self = Self::all(0.0);

    /// Same amount on every side.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Largest of the four sides.
    #[inline]
    pub fn max_side(&self) -> f64 {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }

    /// True when every side is zero or negative. A NaN side does not count.
    #[inline]
    pub fn is_non_positive(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }
}

/// An axis-aligned rectangle in coordinate space `S`.
///
/// `right` and `bottom` are derived from the origin and size and are
/// exclusive edges.
pub struct Rect<S> {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    space: PhantomData<S>,
}

impl<S> Rect<S> {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            space: PhantomData,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point<S>, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub const fn origin(&self) -> Point<S> {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical center.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Grow the rectangle outward by the given per-side amounts.
    #[must_use]
    pub fn expand(&self, by: Insets) -> Self {
        Self::new(
            self.left - by.left,
            self.top - by.top,
            (self.width + by.left + by.right).max(0.0),
            (self.height + by.top + by.bottom).max(0.0),
        )
    }

    /// Grow the rectangle outward by the same amount on every side.
    #[must_use]
    pub fn expand_uniform(&self, by: f64) -> Self {
        self.expand(Insets::all(by))
    }

    /// Round every edge to the nearest whole pixel.
    ///
    /// Edges are rounded independently so adjacent rectangles stay adjacent.
    #[must_use]
    pub fn round(&self) -> Self {
        let left = self.left.round();
        let top = self.top.round();
        Self::new(
            left,
            top,
            self.right().round() - left,
            self.bottom().round() - top,
        )
    }

    /// Check if the two rectangles share any area.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// How far this rectangle extends past each side of `bounds`.
    ///
    /// Positive values are overflow; zero or negative means the side is
    /// inside.
    pub fn overflow(&self, bounds: &Self) -> Insets {
        Insets {
            top: bounds.top - self.top,
            right: self.right() - bounds.right(),
            bottom: self.bottom() - bounds.bottom(),
            left: bounds.left - self.left,
        }
    }
}

impl Rect<ViewportSpace> {
    /// Translate into page space using the scroll offset of `viewport`.
    pub fn to_page(&self, viewport: &Viewport) -> PageRect {
        PageRect::new(
            self.left + viewport.scroll_x,
            self.top + viewport.scroll_y,
            self.width,
            self.height,
        )
    }
}

/// Snapshot of the visible viewport at the moment a computation runs.
///
/// Width and height describe the visible area; the scroll offset is the
/// page position of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// An unscrolled viewport of the given size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Set the scroll offset.
    #[must_use]
    pub const fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    /// The visible area in its own coordinate space.
    pub const fn bounds(&self) -> ViewportRect {
        ViewportRect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Convert the top-left corner of a viewport rectangle to page coordinates.
///
/// The result is a snapshot: it reflects the scroll offset in `viewport` and
/// does not follow later scrolling. With `round_to_int` set, both components
/// are rounded to whole pixels (crisp mask edges); otherwise fractional
/// positions are kept.
pub fn to_absolute_coords(rect: &ViewportRect, viewport: &Viewport, round_to_int: bool) -> Coords {
    let coords = Coords::new(rect.left + viewport.scroll_x, rect.top + viewport.scroll_y);
    if round_to_int { coords.round() } else { coords }
}

// Manual impls: derives would demand the same traits on the space marker.

impl<S> Clone for Point<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Point<S> {}

impl<S> PartialEq for Point<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<S> Default for Point<S> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl<S> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<S> Clone for Rect<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Rect<S> {}

impl<S> PartialEq for Rect<S> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left
            && self.top == other.top
            && self.width == other.width
            && self.height == other.height
    }
}

impl<S> Default for Rect<S> {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl<S> fmt::Debug for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rect")
            .field("left", &self.left)
            .field("top", &self.top)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
