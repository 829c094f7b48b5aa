#![forbid(unsafe_code)]

//! Declarative tour data.

use serde::{Deserialize, Serialize};
use waypoint_layout::CardinalOrientation;

use crate::config::TourConfig;
use crate::error::{Result, TourError};

/// One stop on the tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStep {
    /// Selector for the element to spotlight.
    pub selector: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Overrides the tour-wide orientation priority for this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation_preferences: Option<Vec<CardinalOrientation>>,
}

impl TourStep {
    pub fn new(selector: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            title: title.into(),
            description: String::new(),
            orientation_preferences: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn orientation_preferences(
        mut self,
        prefs: impl IntoIterator<Item = CardinalOrientation>,
    ) -> Self {
        self.orientation_preferences = Some(prefs.into_iter().collect());
        self
    }

    /// The orientation list for this step: its own override, else `fallback`.
    pub fn preferences_or<'a>(
        &'a self,
        fallback: &'a [CardinalOrientation],
    ) -> &'a [CardinalOrientation] {
        self.orientation_preferences.as_deref().unwrap_or(fallback)
    }
}

/// A complete tour: options plus an ordered, non-empty list of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDefinition {
    #[serde(default)]
    pub config: TourConfig,
    pub steps: Vec<TourStep>,
}

impl TourDefinition {
    /// Build a definition, rejecting an empty step list.
    pub fn new(config: TourConfig, steps: Vec<TourStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(TourError::EmptyTour);
        }
        Ok(Self {
            config: config.validated(),
            steps,
        })
    }

    /// Parse a definition from JSON.
    ///
    /// ```
    /// use waypoint_tour::TourDefinition;
    ///
    /// let tour = TourDefinition::from_json(
    ///     r##"{ "steps": [{ "selector": "#save", "title": "Save" }] }"##,
    /// )
    /// .unwrap();
    /// assert_eq!(tour.steps.len(), 1);
    /// assert_eq!(tour.config.padding, 5.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.config, raw.steps)
    }
}
