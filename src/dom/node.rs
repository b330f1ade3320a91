//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::geometry::Region;
use crate::style::selector::{StyleNode, WidgetState};
use crate::widget::traits::{Capabilities, Widget};

new_key_type! {
    /// Identifier of a node in a tree snapshot. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Style-relevant description of one widget, captured at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Widget type name (e.g. "Button", "Popover").
    pub widget_type: String,
    /// Optional unique id (`#id` selector).
    pub id: Option<String>,
    /// Class names (`.class` selector).
    pub classes: Vec<String>,
    /// Widget-reported state. First/last child flags are derived by the
    /// resolver, not read from here.
    pub state: WidgetState,
    pub caps: Capabilities,
    /// Last laid-out bounds; `Region::EMPTY` unless `caps.has_bounds`.
    pub bounds: Region,
}

impl NodeData {
    /// Create a new `NodeData` with the given widget type and sensible defaults.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            id: None,
            classes: Vec::new(),
            state: WidgetState::default(),
            caps: Capabilities::default(),
            bounds: Region::EMPTY,
        }
    }

    /// Capture the descriptor of a live widget.
    pub fn from_widget(widget: &dyn Widget) -> Self {
        let caps = widget.capabilities();
        Self {
            widget_type: widget.style_type().to_owned(),
            id: widget.style_id().map(str::to_owned),
            classes: widget.style_classes().to_vec(),
            state: widget.style_state(),
            caps,
            bounds: if caps.has_bounds { widget.bounds() } else { Region::EMPTY },
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder). Duplicates are ignored.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_state(mut self, state: WidgetState) -> Self {
        self.state = state;
        self
    }

    pub fn with_caps(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl StyleNode for NodeData {
    fn style_type(&self) -> &str {
        &self.widget_type
    }

    fn style_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn style_classes(&self) -> &[String] {
        &self.classes
    }

    fn style_state(&self) -> WidgetState {
        self.state
    }
}
