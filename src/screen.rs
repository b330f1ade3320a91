//! Screen: the layer stack a host drives each frame.
//!
//! [`Screen`] owns a base layer and any overlays pushed above it. Each pass
//! snapshots a layer's widget tree, cascades the stylesheet over the
//! snapshot, hands every widget its resolved style and lays the layer out to
//! the full viewport. Messages travel from the top layer down until one is
//! handled or a modal layer is reached; rendering goes bottom-up.

use tracing::{debug, trace};

use crate::dom::resolve::StyleResolver;
use crate::dom::tree::Dom;
use crate::event::message::{Command, Message};
use crate::geometry::Region;
use crate::style::stylesheet::Stylesheet;
use crate::widget::render::{RenderBuffer, RenderContext};
use crate::widget::traits::{mount_tree, unmount_tree, walk_mut, Widget};

// ---------------------------------------------------------------------------
// ScreenConfig
// ---------------------------------------------------------------------------

/// Viewport and window state for a [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    pub width: u16,
    pub height: u16,
    /// Whether the terminal window has focus; `:focus` only matches while set.
    pub window_focused: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: 80, height: 24, window_focused: true }
    }
}

impl ScreenConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_window_focused(mut self, focused: bool) -> Self {
        self.window_focused = focused;
        self
    }

    pub fn viewport(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

struct Layer {
    root: Box<dyn Widget>,
    modal: bool,
}

pub struct Screen {
    config: ScreenConfig,
    stylesheet: Stylesheet,
    /// Bottom to top. Index 0 is the base layer and is never popped.
    layers: Vec<Layer>,
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("config", &self.config)
            .field("rules", &self.stylesheet.len())
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl Screen {
    /// Create a screen with `root` as its base layer. The root is mounted and
    /// laid out immediately.
    pub fn new(config: ScreenConfig, root: Box<dyn Widget>) -> Self {
        let mut screen = Self { config, stylesheet: Stylesheet::new(), layers: Vec::new() };
        screen.push_layer(root, false);
        screen
    }

    /// Replace the stylesheet (builder).
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.set_stylesheet(stylesheet);
        self
    }

    pub fn set_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheet = stylesheet;
        self.relayout();
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn viewport(&self) -> Region {
        self.config.viewport()
    }

    /// Swap the base layer, unmounting the old root. Overlays stay.
    pub fn set_root(&mut self, root: Box<dyn Widget>) {
        let mut layer = Layer { root, modal: false };
        mount_tree(layer.root.as_mut());
        self.layout_layer(&mut layer);
        if let Some(base) = self.layers.first_mut() {
            let mut old = std::mem::replace(base, layer);
            unmount_tree(old.root.as_mut());
        } else {
            self.layers.push(layer);
        }
    }

    /// Mount `widget` as a new top layer and lay it out.
    pub fn push_layer(&mut self, widget: Box<dyn Widget>, modal: bool) {
        let mut layer = Layer { root: widget, modal };
        mount_tree(layer.root.as_mut());
        self.layout_layer(&mut layer);
        debug!(widget = layer.root.style_type(), modal, depth = self.layers.len(), "pushed layer");
        self.layers.push(layer);
    }

    /// Unmount and drop the top layer. The base layer is never removed.
    pub fn pop_layer(&mut self) -> bool {
        if self.layers.len() <= 1 {
            return false;
        }
        let Some(mut layer) = self.layers.pop() else {
            return false;
        };
        unmount_tree(layer.root.as_mut());
        debug!(widget = layer.root.style_type(), depth = self.layers.len(), "popped layer");
        true
    }

    /// Pop every overlay, leaving only the base layer.
    pub fn clear_overlays(&mut self) {
        while self.pop_layer() {}
    }

    /// Number of layers including the base.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn has_modal(&self) -> bool {
        self.layers.iter().any(|layer| layer.modal)
    }

    /// Change the viewport and lay every layer out again.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.config.width = width;
        self.config.height = height;
        debug!(width, height, "screen resized");
        self.relayout();
    }

    pub fn set_window_focused(&mut self, focused: bool) {
        if self.config.window_focused != focused {
            self.config.window_focused = focused;
            self.relayout();
        }
    }

    /// Run the style and layout pass over every layer.
    pub fn relayout(&mut self) {
        let mut layers = std::mem::take(&mut self.layers);
        for layer in &mut layers {
            self.layout_layer(layer);
        }
        self.layers = layers;
    }

    fn layout_layer(&self, layer: &mut Layer) {
        let root = layer.root.as_mut();
        let dom = Dom::snapshot(root);
        let mut resolver = StyleResolver::new(&self.stylesheet).window_focused(self.config.window_focused);
        let mut styles = resolver.resolve_all(&dom).into_iter();
        // The snapshot and `walk_mut` share one pre-order over the same tree.
        walk_mut(root, &mut |widget| {
            if let Some((_, style)) = styles.next() {
                widget.apply_style(&style);
            }
        });
        let viewport = self.viewport();
        trace!(widget = root.style_type(), nodes = dom.len(), ?viewport, "layer laid out");
        root.layout(viewport);
    }

    /// Draw every layer, base first.
    pub fn render(&self, buffer: &mut dyn RenderBuffer) {
        let mut ctx = RenderContext::new(buffer);
        for layer in &self.layers {
            layer.root.render(&mut ctx);
        }
    }

    /// Route `message` from the top layer down, then apply the commands the
    /// layers returned. Returns whether any layer handled it.
    pub fn handle_message(&mut self, message: &Message) -> bool {
        match message {
            Message::Resize { width, height } => self.resize(*width, *height),
            Message::FocusGained => self.set_window_focused(true),
            Message::FocusLost => self.set_window_focused(false),
            Message::FocusChanged => self.relayout(),
            _ => {}
        }

        let mut handled = false;
        let mut commands = Vec::new();
        for layer in self.layers.iter_mut().rev() {
            let result = layer.root.handle_message(message);
            handled |= result.handled;
            commands.extend(result.commands);
            if result.handled || layer.modal {
                break;
            }
        }

        for command in commands {
            self.apply(command);
        }
        handled
    }

    /// Carry out a widget command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::PushOverlay { widget, modal } => self.push_layer(widget, modal),
            Command::PopOverlay => {
                self.pop_layer();
            }
        }
    }

    /// Text dump of every layer's widget tree, base first.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (index, layer) in self.layers.iter().enumerate() {
            out.push_str(&format!("layer {index}{}\n", if layer.modal { " (modal)" } else { "" }));
            let dom = Dom::snapshot(layer.root.as_ref());
            for line in dom.dump().lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}
