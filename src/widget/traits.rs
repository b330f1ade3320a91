//! Widget trait: style metadata, measure, layout, render, messages, lifecycle.
//!
//! Every element of a widget tree implements [`Widget`]. The trait is
//! object-safe; trees are built from `Box<dyn Widget>` children owned by
//! their parents.

use crate::event::message::{HandleResult, Message};
use crate::geometry::{Region, Size};
use crate::layout::constraints::Constraints;
use crate::style::selector::WidgetState;
use crate::style::styles::ResolvedStyle;
use crate::widget::render::RenderContext;

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// What a widget can do, reported once and recorded on its tree node.
///
/// Traversal and focus gating read these flags; they never probe a widget by
/// calling optional methods and checking for defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// `bounds()` reports meaningful laid-out bounds.
    pub has_bounds: bool,
    /// `children()` may return widgets; the tree snapshot descends into them.
    pub child_bearing: bool,
    /// The widget may take keyboard focus, so `:focus` can match it.
    pub focusable: bool,
}

impl Capabilities {
    /// A leaf that reports its bounds.
    pub const LEAF: Capabilities = Capabilities { has_bounds: true, child_bearing: false, focusable: false };

    /// A container that reports its bounds.
    pub const CONTAINER: Capabilities = Capabilities { has_bounds: true, child_bearing: true, focusable: false };

    pub const fn focusable(mut self, on: bool) -> Self {
        self.focusable = on;
        self
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
pub trait Widget {
    /// The type name matched by type selectors (e.g. "Button", "Popover").
    fn style_type(&self) -> &str;

    fn capabilities(&self) -> Capabilities {
        Capabilities::LEAF
    }

    /// Optional ID matched by `#id` selectors.
    fn style_id(&self) -> Option<&str> {
        None
    }

    fn style_classes(&self) -> &[String] {
        &[]
    }

    fn style_state(&self) -> WidgetState {
        WidgetState::default()
    }

    /// Receive the resolved style for the coming layout pass. Its cascaded
    /// part is `None` when no rule matched the widget.
    fn apply_style(&mut self, _style: &ResolvedStyle) {}

    /// Outer size this widget wants under `constraints`. Must lie within them.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the final outer bounds and place any children inside them.
    fn layout(&mut self, bounds: Region);

    /// Draw into the render context. Children are drawn by their parent.
    fn render(&self, ctx: &mut RenderContext<'_>);

    fn handle_message(&mut self, _message: &Message) -> HandleResult {
        HandleResult::unhandled()
    }

    /// Border box from the last layout (outer bounds minus margin),
    /// meaningful when `has_bounds` is set. Anchors and hit tests use it.
    fn bounds(&self) -> Region {
        Region::EMPTY
    }

    /// Children in display order. Only consulted when `child_bearing` is set.
    fn children(&self) -> Vec<&dyn Widget> {
        Vec::new()
    }

    /// Mutable children, in the same order as [`Widget::children`].
    fn children_mut(&mut self) -> Vec<&mut dyn Widget> {
        Vec::new()
    }

    /// Called when the widget enters a screen layer.
    fn mount(&mut self) {}

    /// Called when the widget leaves a screen layer.
    fn unmount(&mut self) {}
}

/// Visit `widget` and its descendants in pre-order, following the same
/// `child_bearing` rule as [`Dom::snapshot`](crate::dom::Dom::snapshot).
pub fn walk_mut(widget: &mut dyn Widget, visit: &mut dyn FnMut(&mut dyn Widget)) {
    visit(widget);
    if !widget.capabilities().child_bearing {
        return;
    }
    for child in widget.children_mut() {
        walk_mut(child, visit);
    }
}

/// Mount `widget` and every descendant.
pub fn mount_tree(widget: &mut dyn Widget) {
    walk_mut(widget, &mut |w| w.mount());
}

/// Unmount `widget` and every descendant.
pub fn unmount_tree(widget: &mut dyn Widget) {
    walk_mut(widget, &mut |w| w.unmount());
}
