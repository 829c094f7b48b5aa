#![forbid(unsafe_code)]

//! Tour configuration.
//!
//! # Environment Variables
//!
//! [`TourConfig::from_env`] starts from the defaults and applies:
//!
//! ```bash
//! # Mask padding around the target, in pixels
//! export WAYPOINT_PADDING=8
//!
//! # Gap between mask edge and tooltip, in pixels
//! export WAYPOINT_TOOLTIP_SEPARATION=12
//!
//! # Orientation priority, comma-separated
//! export WAYPOINT_ORIENTATIONS=south,north,east-south
//!
//! # Declared transition duration for the renderer
//! export WAYPOINT_TRANSITION_MS=200
//!
//! # Disable keyboard navigation
//! export WAYPOINT_KEYBOARD=0
//! ```
//!
//! Unparseable values are ignored; parsed values are clamped by
//! [`TourConfig::validated`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use waypoint_layout::{CardinalOrientation, DEFAULT_PADDING, DEFAULT_TOOLTIP_SEPARATION};

/// Default declared transition duration.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Padding and separation above this are treated as configuration mistakes.
pub const MAX_SPACING: f64 = 256.0;

/// Transitions longer than this are clamped.
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// Button labels shown in the tooltip footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub prev: String,
    pub next: String,
    pub done: String,
    pub skip: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            prev: "Back".into(),
            next: "Next".into(),
            done: "Done".into(),
            skip: "Skip".into(),
        }
    }
}

/// Caller-level options consumed by the tour controller and the placement
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Space reserved around the target for the mask cutout.
    /// Default: 5.
    pub padding: f64,

    /// Additional gap between the mask edge and the tooltip.
    /// Default: 10.
    pub tooltip_separation: f64,

    /// Orientation priority. Empty means every orientation in default order.
    pub orientation_preferences: Vec<CardinalOrientation>,

    /// Declared transition duration; the renderer animates, the engine
    /// only reports it.
    /// Default: 300ms.
    #[serde(rename = "transition_ms", with = "duration_ms")]
    pub transition: Duration,

    /// Whether arrow keys, Enter and Escape drive the tour.
    /// Default: true.
    pub keyboard_navigation: bool,

    /// Whether the tooltip shows "n of m" progress.
    /// Default: true.
    pub show_progress: bool,

    /// Index of the first step shown by `start`. Clamped to the step count.
    /// Default: 0.
    pub start_at: usize,

    pub labels: Labels,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            tooltip_separation: DEFAULT_TOOLTIP_SEPARATION,
            orientation_preferences: Vec::new(),
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            keyboard_navigation: true,
            show_progress: true,
            start_at: 0,
            labels: Labels::default(),
        }
    }
}

impl TourConfig {
    /// Set the mask padding.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the tooltip separation.
    #[must_use]
    pub fn tooltip_separation(mut self, separation: f64) -> Self {
        self.tooltip_separation = separation;
        self
    }

    /// Set the orientation priority.
    #[must_use]
    pub fn orientation_preferences(
        mut self,
        prefs: impl IntoIterator<Item = CardinalOrientation>,
    ) -> Self {
        self.orientation_preferences = prefs.into_iter().collect();
        self
    }

    /// Set the declared transition duration.
    #[must_use]
    pub fn transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Enable or disable keyboard navigation.
    #[must_use]
    pub fn keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = enabled;
        self
    }

    /// Show or hide the progress line.
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the first step shown by `start`.
    #[must_use]
    pub fn start_at(mut self, index: usize) -> Self {
        self.start_at = index;
        self
    }

    /// Set the footer labels.
    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Load config from environment variables. See the module docs.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup, then validate.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("WAYPOINT_PADDING")
            && let Ok(px) = val.trim().parse::<f64>()
        {
            self.padding = px;
        }

        if let Some(val) = lookup("WAYPOINT_TOOLTIP_SEPARATION")
            && let Ok(px) = val.trim().parse::<f64>()
        {
            self.tooltip_separation = px;
        }

        if let Some(val) = lookup("WAYPOINT_ORIENTATIONS") {
            let parsed: Result<Vec<CardinalOrientation>, _> = val
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse)
                .collect();
            if let Ok(prefs) = parsed {
                self.orientation_preferences = prefs;
            }
        }

        if let Some(val) = lookup("WAYPOINT_TRANSITION_MS")
            && let Ok(ms) = val.trim().parse::<u64>()
        {
            self.transition = Duration::from_millis(ms);
        }

        if let Some(val) = lookup("WAYPOINT_KEYBOARD") {
            let val = val.trim();
            self.keyboard_navigation = val == "1" || val.eq_ignore_ascii_case("true");
        }

        self.validated()
    }

    /// Validate and clamp values to safe ranges.
    ///
    /// - `padding` and `tooltip_separation`: non-finite or negative become 0,
    ///   capped at [`MAX_SPACING`]
    /// - `transition`: capped at [`MAX_TRANSITION_MS`]
    ///
    /// # Example
    ///
    /// ```
    /// use waypoint_tour::TourConfig;
    ///
    /// let config = TourConfig::default().padding(-3.0).validated();
    /// assert_eq!(config.padding, 0.0);
    /// ```
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.padding = clamp_spacing(self.padding);
        self.tooltip_separation = clamp_spacing(self.tooltip_separation);
        let ms = (self.transition.as_millis() as u64).min(MAX_TRANSITION_MS);
        self.transition = Duration::from_millis(ms);
        self
    }

    /// Check if values are within valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let spacing_ok = |v: f64| v.is_finite() && (0.0..=MAX_SPACING).contains(&v);
        spacing_ok(self.padding)
            && spacing_ok(self.tooltip_separation)
            && self.transition.as_millis() as u64 <= MAX_TRANSITION_MS
    }
}

fn clamp_spacing(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_SPACING)
    } else {
        0.0
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
