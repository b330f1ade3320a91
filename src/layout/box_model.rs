//! Box model: margin, border and padding around a content box.
//!
//! ```text
//! outer bounds
//! └─ margin
//!    └─ border box (background, border glyphs)
//!       └─ border (1 cell per side when visible)
//!          └─ padding
//!             └─ content box
//! ```
//!
//! Measurement works from the outside in (shrinking constraints), then from
//! the inside out (growing the content size back into an outer size).

use crate::geometry::{Region, Size, Spacing};
use crate::layout::constraints::{clamp, Constraints, UNBOUNDED};
use crate::style::styles::{SizeMode, SizeSpec, Style};

/// Resolved, non-negative insets of a box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxMetrics {
    pub margin: Spacing,
    pub padding: Spacing,
    /// Border thickness on every side: 0 or 1.
    pub border: i32,
}

impl BoxMetrics {
    pub fn from_style(style: &Style) -> Self {
        Self {
            margin: style.margin.unwrap_or_default().clamp_non_negative(),
            padding: style.padding.unwrap_or_default().clamp_non_negative(),
            border: style.border.map_or(0, |b| b.thickness()),
        }
    }

    /// Insets between the border box and the content box.
    pub fn content_insets(&self) -> Spacing {
        self.padding + Spacing::all(self.border)
    }
}

/// The box model of one widget: its insets plus its declared size intents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxModel {
    pub metrics: BoxMetrics,
    pub width: Option<SizeSpec>,
    pub height: Option<SizeSpec>,
}

impl BoxModel {
    pub fn from_style(style: &Style) -> Self {
        Self {
            metrics: BoxMetrics::from_style(style),
            width: style.width,
            height: style.height,
        }
    }

    /// Measure the outer size of this box under `constraints`.
    ///
    /// `measure_content` receives the constraints left for the content box
    /// after margin, border and padding are removed; its answer is clamped
    /// into them before the insets are added back.
    pub fn measure(&self, constraints: Constraints, measure_content: impl FnOnce(Constraints) -> Size) -> Size {
        let content_constraints = self.content_constraints(constraints);
        let content = content_constraints.constrain(measure_content(content_constraints));
        self.finish_measure(constraints, content)
    }

    /// Measure a box with no content; the content is taken to be as small as
    /// its constraints allow.
    pub fn measure_empty(&self, constraints: Constraints) -> Size {
        let content = self.content_constraints(constraints).min_size();
        self.finish_measure(constraints, content)
    }

    fn border_constraints(&self, constraints: Constraints) -> Constraints {
        constraints.shrink(self.metrics.margin)
    }

    fn content_constraints(&self, constraints: Constraints) -> Constraints {
        self.border_constraints(constraints).shrink(self.metrics.content_insets())
    }

    fn finish_measure(&self, constraints: Constraints, content: Size) -> Size {
        let border_constraints = self.border_constraints(constraints);
        let insets = self.metrics.content_insets();

        let border_width = resolve_styled_size(
            self.width,
            content.width.saturating_add(insets.width()),
            border_constraints.min_width,
            border_constraints.max_width,
        );
        let border_height = resolve_styled_size(
            self.height,
            content.height.saturating_add(insets.height()),
            border_constraints.min_height,
            border_constraints.max_height,
        );

        let margin = self.metrics.margin;
        constraints.constrain(Size::new(
            border_width.saturating_add(margin.width()),
            border_height.saturating_add(margin.height()),
        ))
    }

    /// The border box inside outer `bounds` (margin removed).
    pub fn border_box(&self, bounds: Region) -> Region {
        bounds.shrink(self.metrics.margin)
    }

    /// The content box inside outer `bounds` (margin, border and padding removed).
    pub fn content_box(&self, bounds: Region) -> Region {
        self.border_box(bounds).shrink(self.metrics.content_insets())
    }
}

/// Resolve a declared size intent for one axis.
///
/// `auto` is the content-derived size. Percent and Fill need a bounded `max`
/// and fall back to `auto` otherwise. The result is always clamped to
/// `[min, max]`.
pub fn resolve_styled_size(spec: Option<SizeSpec>, auto: i32, min: i32, max: i32) -> i32 {
    let Some(spec) = spec else {
        return clamp(auto, min, max);
    };
    let value = match spec.mode {
        SizeMode::Auto => auto,
        SizeMode::Fixed => spec.value,
        SizeMode::Percent if max == UNBOUNDED => auto,
        SizeMode::Percent => {
            let scaled = i64::from(max) * i64::from(spec.value) / 100;
            scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        }
        SizeMode::Fill if max == UNBOUNDED => auto,
        SizeMode::Fill => max,
    };
    clamp(value, min, max)
}
