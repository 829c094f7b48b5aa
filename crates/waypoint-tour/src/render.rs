#![forbid(unsafe_code)]

//! Tooltip content and text measurement.
//!
//! The engine never paints. A [`RenderStrategy`] turns the current step into
//! [`TooltipContent`]; the host draws it and reports the drawn size back
//! through `Tour::on_tooltip_measured`. Hosts without a layout engine can use
//! [`TooltipContent::measure`] to estimate that size from fixed text metrics.

use std::fmt;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use waypoint_core::Size;

use crate::config::TourConfig;
use crate::definition::TourStep;

/// Everything a template may read when rendering one step.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub step: &'a TourStep,
    pub index: usize,
    pub count: usize,
    pub config: &'a TourConfig,
}

impl StepContext<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.count
    }
}

/// User-supplied tooltip rendering.
pub trait TooltipTemplate: Send + Sync {
    fn render(&self, ctx: &StepContext<'_>) -> TooltipContent;
}

impl<F> TooltipTemplate for F
where
    F: Fn(&StepContext<'_>) -> TooltipContent + Send + Sync,
{
    fn render(&self, ctx: &StepContext<'_>) -> TooltipContent {
        self(ctx)
    }
}

/// How tooltip content is produced for each step.
#[derive(Clone, Default)]
pub enum RenderStrategy {
    /// Title, description, progress and the configured button labels.
    #[default]
    Default,
    Custom(Arc<dyn TooltipTemplate>),
}

impl RenderStrategy {
    pub fn custom(template: impl TooltipTemplate + 'static) -> Self {
        Self::Custom(Arc::new(template))
    }

    pub fn render(&self, ctx: &StepContext<'_>) -> TooltipContent {
        match self {
            Self::Default => TooltipContent::for_step(ctx),
            Self::Custom(template) => template.render(ctx),
        }
    }
}

impl fmt::Debug for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A footer button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub label: String,
    pub enabled: bool,
}

impl NavButton {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
        }
    }
}

/// The tooltip footer. `next` carries the done label on the last step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButtons {
    pub prev: NavButton,
    pub next: NavButton,
    pub skip: NavButton,
}

impl NavButtons {
    fn labels(&self) -> [&str; 3] {
        [
            self.prev.label.as_str(),
            self.next.label.as_str(),
            self.skip.label.as_str(),
        ]
    }
}

/// What the tooltip shows for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub title: String,
    pub description: String,
    /// "n of m", or `None` when progress is hidden.
    pub progress: Option<String>,
    pub buttons: NavButtons,
}

/// Fixed-pitch text metrics for [`TooltipContent::measure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Advance of one display column, in pixels.
    pub char_width: f64,
    pub line_height: f64,
    /// Inner padding on every side of the box.
    pub padding: f64,
    /// Widest the box may grow, padding included.
    pub max_width: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 18.0,
            padding: 12.0,
            max_width: 320.0,
        }
    }
}

impl TextMetrics {
    /// Columns available for text inside the box. Always at least one.
    fn columns(&self) -> usize {
        if self.char_width.is_nan() || self.char_width <= 0.0 {
            return 1;
        }
        let inner = (self.max_width - 2.0 * self.padding).max(0.0);
        ((inner / self.char_width).floor() as usize).max(1)
    }
}

impl TooltipContent {
    /// Default content for a step.
    pub fn for_step(ctx: &StepContext<'_>) -> Self {
        let labels = &ctx.config.labels;
        let progress = ctx
            .config
            .show_progress
            .then(|| format!("{} of {}", ctx.index + 1, ctx.count));
        let next_label = if ctx.is_last() {
            &labels.done
        } else {
            &labels.next
        };

        Self {
            title: ctx.step.title.clone(),
            description: ctx.step.description.clone(),
            progress,
            buttons: NavButtons {
                prev: NavButton::new(&labels.prev, !ctx.is_first()),
                next: NavButton::new(next_label, true),
                skip: NavButton::new(&labels.skip, !ctx.is_last()),
            },
        }
    }

    /// Lines of text as they would be laid out in `metrics`.
    pub fn layout_lines(&self, metrics: &TextMetrics) -> Vec<String> {
        let columns = metrics.columns();
        let mut lines = wrap_text(&self.title, columns);
        lines.extend(wrap_text(&self.description, columns));
        if let Some(progress) = &self.progress {
            lines.extend(wrap_text(progress, columns));
        }
        let footer = self
            .buttons
            .labels()
            .iter()
            .filter(|label| !label.is_empty())
            .map(|label| format!("[{label}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.extend(wrap_text(&footer, columns));
        lines
    }

    /// Estimate the box size in pixels, padding included.
    pub fn measure(&self, metrics: &TextMetrics) -> Size {
        let lines = self.layout_lines(metrics);
        let widest = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);
        let char_width = metrics.char_width.max(0.0);
        let padding = metrics.padding.max(0.0);

        Size::new(
            widest as f64 * char_width + 2.0 * padding,
            lines.len() as f64 * metrics.line_height.max(0.0) + 2.0 * padding,
        )
    }
}

/// Greedy word wrap on display width. Words wider than a line are split on
/// grapheme boundaries.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            continue;
        }

        let mut current_line = String::new();
        let mut current_width: usize = 0;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if word_width > max_width {
                if current_width > 0 {
                    lines.push(std::mem::take(&mut current_line));
                }
                current_width = 0;
                for grapheme in word.graphemes(true) {
                    let g_width = UnicodeWidthStr::width(grapheme);
                    if current_width + g_width > max_width && current_width > 0 {
                        lines.push(std::mem::take(&mut current_line));
                        current_width = 0;
                    }
                    current_line.push_str(grapheme);
                    current_width += g_width;
                }
            } else if current_width == 0 {
                current_line = word.to_string();
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}
