//! Plain-text rendering of a tree snapshot for debugging and snapshot tests.
//!
//! One line per node, indented two spaces per level:
//!
//! ```text
//! Screen @ 0,0 40x10
//!   Button#save.primary [focusable focused] @ 2,1 10x3
//! ```

use std::fmt::Write;

use super::node::NodeData;
use super::tree::Dom;

impl Dom {
    /// Render the whole tree, root first, in pre-order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let Some(root) = self.root() else {
            return out;
        };
        for id in self.walk_depth_first(root) {
            if let Some(data) = self.get(id) {
                let indent = "  ".repeat(self.depth(id));
                let _ = writeln!(out, "{indent}{}", describe(data));
            }
        }
        out
    }
}

/// Single-line description of a node.
pub fn describe(data: &NodeData) -> String {
    let mut line = data.widget_type.clone();
    if let Some(id) = &data.id {
        let _ = write!(line, "#{id}");
    }
    for class in &data.classes {
        let _ = write!(line, ".{class}");
    }

    let state = data.state;
    let flags: Vec<&str> = [
        (data.caps.focusable, "focusable"),
        (state.focused, "focused"),
        (state.disabled, "disabled"),
        (state.hovered, "hovered"),
        (state.active, "active"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();
    if !flags.is_empty() {
        let _ = write!(line, " [{}]", flags.join(" "));
    }

    if data.caps.has_bounds {
        let b = data.bounds;
        let _ = write!(line, " @ {},{} {}x{}", b.x, b.y, b.width, b.height);
    }
    line
}
