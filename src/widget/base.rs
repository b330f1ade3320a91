//! Shared widget state: identity, cascaded style, box model and bounds.
//!
//! Concrete widgets embed a [`Base`] and delegate the style metadata, box
//! model measurement and chrome drawing to it.

use crate::geometry::{Region, Size};
use crate::layout::box_model::BoxModel;
use crate::layout::constraints::Constraints;
use crate::style::selector::WidgetState;
use crate::style::styles::{ResolvedStyle, Style};
use crate::widget::render::{CellStyle, RenderContext};

#[derive(Debug, Clone, Default)]
pub struct Base {
    id: Option<String>,
    classes: Vec<String>,
    state: WidgetState,
    /// Widget-local defaults, below every stylesheet rule and above inherited
    /// values.
    local_style: Style,
    /// Effective style from the last pass.
    style: Style,
    model: BoxModel,
    outer_bounds: Region,
    /// Border box: outer bounds minus margin.
    bounds: Region,
}

impl Base {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ID (builder). Blank IDs clear it.
    pub fn with_id(mut self, id: &str) -> Self {
        self.set_id(id);
        self
    }

    /// Add a class (builder).
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set widget-local default style (builder).
    pub fn with_local_style(mut self, style: Style) -> Self {
        self.set_local_style(style);
        self
    }

    pub fn set_id(&mut self, id: &str) {
        let id = id.trim();
        self.id = (!id.is_empty()).then(|| id.to_owned());
    }

    /// Add a class. Blank names and duplicates are ignored.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replace local defaults. Takes effect immediately and survives later
    /// cascades.
    pub fn set_local_style(&mut self, style: Style) {
        self.local_style = style;
        self.set_effective(style);
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Store the resolved style: matching rules over local defaults over
    /// inherited values. An unresolved style leaves only the local defaults.
    pub fn apply_style(&mut self, resolved: &ResolvedStyle) {
        let effective = resolved.over(&self.local_style);
        self.set_effective(effective);
    }

    fn set_effective(&mut self, style: Style) {
        self.style = style;
        self.model = BoxModel::from_style(&style);
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn model(&self) -> &BoxModel {
        &self.model
    }

    /// Measure through the box model with a content callback.
    pub fn measure_with_style(&self, constraints: Constraints, measure_content: impl FnOnce(Constraints) -> Size) -> Size {
        self.model.measure(constraints, measure_content)
    }

    /// Measure a box with no content.
    pub fn measure_empty(&self, constraints: Constraints) -> Size {
        self.model.measure_empty(constraints)
    }

    /// Record outer bounds and derive the border box.
    pub fn layout(&mut self, bounds: Region) {
        self.outer_bounds = bounds;
        self.bounds = self.model.border_box(bounds);
    }

    pub fn outer_bounds(&self) -> Region {
        self.outer_bounds
    }

    /// The border box from the last layout.
    pub fn bounds(&self) -> Region {
        self.bounds
    }

    /// The content box from the last layout.
    pub fn content_bounds(&self) -> Region {
        self.model.content_box(self.outer_bounds)
    }

    /// Draw background and border for the border box.
    pub fn render_chrome(&self, ctx: &mut RenderContext<'_>) {
        if self.style.bg.is_some() {
            ctx.fill(self.bounds, ' ', &CellStyle::from_style(&self.style));
        }
        if let Some(kind) = self.style.border.and_then(|b| b.kind) {
            ctx.draw_box(self.bounds, kind, &CellStyle::for_border(&self.style));
        }
    }
}
