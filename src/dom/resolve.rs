//! Cascade over a whole tree snapshot.
//!
//! [`StyleResolver`] feeds each node of a [`Dom`] and its ancestor chain to a
//! [`Stylesheet`], derives the structural pseudo-classes from the tree, and
//! lets unset colors and text attributes inherit from the parent's resolved
//! style. The own cascade and the inherited part are kept apart in a
//! [`ResolvedStyle`] so widgets can rank their local defaults between them.

use slotmap::SecondaryMap;
use tracing::trace;

use super::node::{NodeData, NodeId};
use super::tree::Dom;
use crate::style::selector::{StyleNode, WidgetState};
use crate::style::styles::{ResolvedStyle, Style};
use crate::style::stylesheet::Stylesheet;

/// Per-pass style resolver. Results are cached per node; build a new
/// resolver for every pass.
pub struct StyleResolver<'a> {
    sheet: &'a Stylesheet,
    window_focused: bool,
    cache: SecondaryMap<NodeId, ResolvedStyle>,
}

/// A node viewed with tree-derived state.
struct ResolvedNode<'n> {
    data: &'n NodeData,
    state: WidgetState,
}

impl StyleNode for ResolvedNode<'_> {
    fn style_type(&self) -> &str {
        &self.data.widget_type
    }

    fn style_id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    fn style_classes(&self) -> &[String] {
        &self.data.classes
    }

    fn style_state(&self) -> WidgetState {
        self.state
    }
}

impl<'a> StyleResolver<'a> {
    pub fn new(sheet: &'a Stylesheet) -> Self {
        Self { sheet, window_focused: true, cache: SecondaryMap::new() }
    }

    /// Whether the terminal window has focus. When it does not, no node
    /// matches `:focus`.
    pub fn window_focused(mut self, focused: bool) -> Self {
        self.window_focused = focused;
        self
    }

    /// Resolve the style of `id`.
    ///
    /// Returns `None` when no rule matches the node and it inherits nothing
    /// from its parent.
    pub fn resolve(&mut self, dom: &Dom, id: NodeId) -> Option<Style> {
        self.resolve_parts(dom, id).combined()
    }

    /// Resolve `id` keeping its own cascade and its inherited values apart.
    pub fn resolve_parts(&mut self, dom: &Dom, id: NodeId) -> ResolvedStyle {
        if let Some(cached) = self.cache.get(id) {
            return *cached;
        }
        let parent = match dom.parent(id) {
            Some(parent) => self.resolve(dom, parent).unwrap_or_default(),
            None => Style::default(),
        };
        let resolved = ResolvedStyle::new(self.cascade(dom, id), &parent);
        self.cache.insert(id, resolved);
        resolved
    }

    /// Resolve every node in pre-order, returning `(id, parts)` pairs.
    pub fn resolve_all(&mut self, dom: &Dom) -> Vec<(NodeId, ResolvedStyle)> {
        let Some(root) = dom.root() else {
            return Vec::new();
        };
        dom.walk_depth_first(root)
            .into_iter()
            .map(|id| (id, self.resolve_parts(dom, id)))
            .collect()
    }

    /// The state the selector matcher sees for `id`.
    pub fn state_of(&self, dom: &Dom, id: NodeId) -> WidgetState {
        let Some(data) = dom.get(id) else {
            return WidgetState::default();
        };
        let mut state = data.state;
        if !self.window_focused || !data.caps.focusable {
            state.focused = false;
        }
        let (first, last) = match dom.parent(id) {
            Some(parent) => {
                let siblings = dom.children(parent);
                (siblings.first() == Some(&id), siblings.last() == Some(&id))
            }
            None => (false, false),
        };
        state.first_child = first;
        state.last_child = last;
        state
    }

    fn cascade(&self, dom: &Dom, id: NodeId) -> Option<Style> {
        let data = dom.get(id)?;
        let node = ResolvedNode { data, state: self.state_of(dom, id) };
        let ancestors: Vec<ResolvedNode<'_>> = dom
            .ancestors(id)
            .into_iter()
            .filter_map(|a| dom.get(a).map(|d| ResolvedNode { data: d, state: self.state_of(dom, a) }))
            .collect();
        let chain: Vec<&dyn StyleNode> = ancestors.iter().map(|n| n as &dyn StyleNode).collect();
        let style = self.sheet.resolve(&node, &chain);
        trace!(node_type = %data.widget_type, depth = chain.len(), matched = style.is_some(), "resolve node");
        style
    }
}
