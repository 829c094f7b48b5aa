#![forbid(unsafe_code)]

//! Tour controller.
//!
//! [`Tour`] owns the step list and the current position, and turns each step
//! into a [`StepLayout`]: the located target, the spotlight mask, the
//! placement request and, once the host has measured the tooltip, the
//! resolved [`Placement`].
//!
//! Every operation that activates a step looks the target up afresh through
//! an [`ElementSource`] and places against an explicit [`Viewport`]
//! snapshot. A step whose target cannot be found is never shown: the
//! controller keeps its previous step and layout and returns the error.

use std::time::Duration;

use tracing::{debug_span, info};
use waypoint_core::event::KeyEvent;
use waypoint_core::{PageRect, Size, Viewport, ViewportRect};
use waypoint_dom::{ElementSource, locate_target};
use waypoint_layout::{Placement, PlacementRequest, mask_rect, resolve_placement};

use crate::config::TourConfig;
use crate::definition::{TourDefinition, TourStep};
use crate::error::{Result, TourError};
use crate::keys::{KeyBindings, TourAction};
use crate::render::{RenderStrategy, StepContext, TooltipContent};

/// Visibility of the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourStatus {
    /// Not started yet.
    #[default]
    Idle,
    Active,
    /// Ran to the end, or was skipped or closed.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChangeReason {
    Start,
    ManualNext,
    ManualPrev,
    Jump,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourEvent {
    StepChanged {
        /// `None` when the tour was just started.
        from: Option<usize>,
        to: usize,
        reason: StepChangeReason,
    },
    Finished {
        last_step: usize,
    },
    Skipped {
        at_step: usize,
    },
    Closed {
        at_step: usize,
    },
}

/// Resolved geometry and content for the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepLayout {
    /// Target bounds as of the last lookup, viewport-relative.
    pub target: ViewportRect,
    /// Spotlight cutout, page-absolute.
    pub mask: PageRect,
    pub request: PlacementRequest,
    /// `None` until the tooltip has been measured for this step.
    pub placement: Option<Placement>,
    pub content: TooltipContent,
}

/// What the renderer needs to draw the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState<'a> {
    pub step_index: usize,
    pub step_count: usize,
    pub mask: PageRect,
    /// `None` means render the tooltip invisibly so it can be measured.
    pub tooltip: Option<Placement>,
    pub content: &'a TooltipContent,
    pub transition: Duration,
}

/// Step sequencing over a list of [`TourStep`]s.
#[derive(Debug, Clone)]
pub struct Tour {
    steps: Vec<TourStep>,
    config: TourConfig,
    keys: KeyBindings,
    strategy: RenderStrategy,
    status: TourStatus,
    step_index: usize,
    layout: Option<StepLayout>,
}

impl Tour {
    pub fn new(config: TourConfig, steps: Vec<TourStep>) -> Self {
        let config = config.validated();
        Self {
            keys: KeyBindings::new(config.keyboard_navigation),
            steps,
            config,
            strategy: RenderStrategy::Default,
            status: TourStatus::Idle,
            step_index: 0,
            layout: None,
        }
    }

    pub fn from_definition(definition: TourDefinition) -> Self {
        Self::new(definition.config, definition.steps)
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn status(&self) -> TourStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == TourStatus::Active
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> Option<&TourStep> {
        if !self.is_active() {
            return None;
        }
        self.steps.get(self.step_index)
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn key_bindings(&self) -> KeyBindings {
        self.keys
    }

    /// Layout of the current step, if the tour is active.
    pub fn layout(&self) -> Option<&StepLayout> {
        if !self.is_active() {
            return None;
        }
        self.layout.as_ref()
    }

    /// Show the configured first step. Restarts a running or finished tour.
    pub fn start<S>(&mut self, source: &S, viewport: &Viewport) -> Result<TourEvent>
    where
        S: ElementSource + ?Sized,
    {
        if self.steps.is_empty() {
            return Err(TourError::EmptyTour);
        }
        let index = self.config.start_at.min(self.steps.len() - 1);
        let layout = self.layout_step(index, source, viewport)?;

        self.status = TourStatus::Active;
        self.step_index = index;
        self.layout = Some(layout);
        info!(step = index, steps = self.steps.len(), "tour started");
        Ok(TourEvent::StepChanged {
            from: None,
            to: index,
            reason: StepChangeReason::Start,
        })
    }

    /// Advance one step, or finish the tour from the last step.
    pub fn next<S>(&mut self, source: &S, viewport: &Viewport) -> Result<Option<TourEvent>>
    where
        S: ElementSource + ?Sized,
    {
        self.ensure_active()?;
        if self.step_index + 1 >= self.steps.len() {
            return Ok(Some(self.finish()));
        }
        self.activate(
            self.step_index + 1,
            StepChangeReason::ManualNext,
            source,
            viewport,
        )
        .map(Some)
    }

    /// Go back one step. No-op on the first step.
    pub fn prev<S>(&mut self, source: &S, viewport: &Viewport) -> Result<Option<TourEvent>>
    where
        S: ElementSource + ?Sized,
    {
        self.ensure_active()?;
        if self.step_index == 0 {
            return Ok(None);
        }
        self.activate(
            self.step_index - 1,
            StepChangeReason::ManualPrev,
            source,
            viewport,
        )
        .map(Some)
    }

    /// Jump to `index`, clamped to the last step. No-op if already there.
    pub fn goto<S>(
        &mut self,
        index: usize,
        source: &S,
        viewport: &Viewport,
    ) -> Result<Option<TourEvent>>
    where
        S: ElementSource + ?Sized,
    {
        self.ensure_active()?;
        let index = index.min(self.steps.len().saturating_sub(1));
        if index == self.step_index {
            return Ok(None);
        }
        self.activate(index, StepChangeReason::Jump, source, viewport)
            .map(Some)
    }

    /// Abandon the tour from the skip button.
    pub fn skip(&mut self) -> Result<TourEvent> {
        self.ensure_active()?;
        let at_step = self.step_index;
        self.hide();
        info!(at_step, "tour skipped");
        Ok(TourEvent::Skipped { at_step })
    }

    /// Dismiss the tour.
    pub fn close(&mut self) -> Result<TourEvent> {
        self.ensure_active()?;
        let at_step = self.step_index;
        self.hide();
        info!(at_step, "tour closed");
        Ok(TourEvent::Closed { at_step })
    }

    /// Record the tooltip's rendered size and place it.
    ///
    /// Returns the new placement, which is also visible through
    /// [`Tour::overlay`]. A non-finite or negative size leaves the tooltip
    /// unmeasured and hidden.
    pub fn on_tooltip_measured(
        &mut self,
        size: Size,
        viewport: &Viewport,
    ) -> Result<Option<Placement>> {
        self.ensure_active()?;
        let layout = self.layout.as_mut().ok_or(TourError::NotActive)?;

        layout.request.tooltip = Some(size).filter(Size::is_usable);
        layout.mask = mask_rect(&layout.target, layout.request.padding, viewport);
        layout.placement = resolve_placement(&layout.request, viewport);
        Ok(layout.placement)
    }

    /// Re-run lookup and placement for the current step after a resize,
    /// scroll or reflow. The measured tooltip size is kept.
    ///
    /// If the target has disappeared the previous layout is kept and the
    /// error is returned.
    pub fn refresh<S>(&mut self, source: &S, viewport: &Viewport) -> Result<()>
    where
        S: ElementSource + ?Sized,
    {
        self.ensure_active()?;
        let step = self
            .steps
            .get(self.step_index)
            .ok_or(TourError::NotActive)?;
        let target = locate_target(source, &step.selector)?;

        let layout = self.layout.as_mut().ok_or(TourError::NotActive)?;
        let request = PlacementRequest {
            target,
            ..layout.request.clone()
        };
        layout.placement = resolve_placement(&request, viewport);
        layout.mask = mask_rect(&target, request.padding, viewport);
        layout.target = target;
        layout.request = request;
        Ok(())
    }

    /// Map a key through the tour's bindings and apply it.
    ///
    /// Returns `Ok(None)` for keys the tour does not handle, including every
    /// key while the tour is inactive.
    pub fn handle_key<S>(
        &mut self,
        event: &KeyEvent,
        source: &S,
        viewport: &Viewport,
    ) -> Result<Option<TourEvent>>
    where
        S: ElementSource + ?Sized,
    {
        if !self.is_active() {
            return Ok(None);
        }
        match self.keys.action(event, self.steps.len()) {
            Some(action) => self.apply(action, source, viewport),
            None => Ok(None),
        }
    }

    /// Apply a navigation action, from a key or a tooltip button.
    pub fn apply<S>(
        &mut self,
        action: TourAction,
        source: &S,
        viewport: &Viewport,
    ) -> Result<Option<TourEvent>>
    where
        S: ElementSource + ?Sized,
    {
        match action {
            TourAction::Next => self.next(source, viewport),
            TourAction::Prev => self.prev(source, viewport),
            TourAction::GoTo(index) => self.goto(index, source, viewport),
            TourAction::Close => self.close().map(Some),
            TourAction::Skip => self.skip().map(Some),
        }
    }

    /// Render plan for the current step, or `None` when nothing is shown.
    pub fn overlay(&self) -> Option<OverlayState<'_>> {
        let layout = self.layout()?;
        Some(OverlayState {
            step_index: self.step_index,
            step_count: self.steps.len(),
            mask: layout.mask,
            tooltip: layout.placement,
            content: &layout.content,
            transition: self.config.transition,
        })
    }

    fn ensure_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(TourError::NotActive)
        }
    }

    fn activate<S>(
        &mut self,
        index: usize,
        reason: StepChangeReason,
        source: &S,
        viewport: &Viewport,
    ) -> Result<TourEvent>
    where
        S: ElementSource + ?Sized,
    {
        let layout = self.layout_step(index, source, viewport)?;
        let from = self.step_index;
        self.step_index = index;
        self.layout = Some(layout);
        info!(from, to = index, reason = ?reason, "tour step changed");
        Ok(TourEvent::StepChanged {
            from: Some(from),
            to: index,
            reason,
        })
    }

    /// Locate the step's target and build a fresh layout with no tooltip
    /// measurement. Leaves `self` untouched.
    fn layout_step<S>(&self, index: usize, source: &S, viewport: &Viewport) -> Result<StepLayout>
    where
        S: ElementSource + ?Sized,
    {
        let step = self.steps.get(index).ok_or(TourError::EmptyTour)?;
        let _span = debug_span!("activate_step", index, selector = %step.selector).entered();

        let target = locate_target(source, &step.selector)?;
        let request = PlacementRequest::new(target)
            .padding(self.config.padding)
            .separation(self.config.tooltip_separation)
            .preferences(
                step.preferences_or(&self.config.orientation_preferences)
                    .iter()
                    .copied(),
            );
        let ctx = StepContext {
            step,
            index,
            count: self.steps.len(),
            config: &self.config,
        };

        Ok(StepLayout {
            target,
            mask: mask_rect(&target, request.padding, viewport),
            placement: resolve_placement(&request, viewport),
            content: self.strategy.render(&ctx),
            request,
        })
    }

    fn finish(&mut self) -> TourEvent {
        let last_step = self.step_index;
        self.hide();
        info!(last_step, "tour finished");
        TourEvent::Finished { last_step }
    }

    fn hide(&mut self) {
        self.status = TourStatus::Finished;
        self.layout = None;
    }
}
