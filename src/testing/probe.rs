//! A configurable stand-in widget for tests.
//!
//! [`Probe`] has a fixed intrinsic content size, optional text, and optional
//! children stacked top to bottom in its content box. Shared cells let a test
//! observe layout, lifecycle and message traffic, and move keyboard focus,
//! after the probe has been moved into a tree.

use std::cell::Cell;
use std::rc::Rc;

use crate::event::message::{HandleResult, Message};
use crate::geometry::{Region, Size};
use crate::layout::constraints::Constraints;
use crate::style::selector::WidgetState;
use crate::style::styles::{ResolvedStyle, Style};
use crate::widget::base::Base;
use crate::widget::render::{CellStyle, RenderContext};
use crate::widget::traits::{Capabilities, Widget};

pub struct Probe {
    type_name: String,
    base: Base,
    intrinsic: Size,
    text: Option<String>,
    children: Vec<Box<dyn Widget>>,
    caps: Capabilities,
    consuming: bool,
    last_layout: Rc<Cell<Option<Region>>>,
    mounted: Rc<Cell<i32>>,
    messages: Rc<Cell<u32>>,
    focused: Rc<Cell<bool>>,
}

impl Probe {
    /// A leaf of type `type_name` whose content wants `intrinsic` cells.
    pub fn new(type_name: &str, intrinsic: Size) -> Self {
        Self {
            type_name: type_name.to_owned(),
            base: Base::new(),
            intrinsic,
            text: None,
            children: Vec::new(),
            caps: Capabilities::LEAF,
            consuming: false,
            last_layout: Rc::new(Cell::new(None)),
            mounted: Rc::new(Cell::new(0)),
            messages: Rc::new(Cell::new(0)),
            focused: Rc::new(Cell::new(false)),
        }
    }

    /// Append a child; the probe becomes child-bearing.
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self.caps.child_bearing = true;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.base.set_id(id);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.base.add_class(class);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_owned());
        self
    }

    pub fn with_state(mut self, state: WidgetState) -> Self {
        *self.base.state_mut() = state;
        self.focused.set(state.focused);
        self
    }

    pub fn with_local_style(mut self, style: Style) -> Self {
        self.base.set_local_style(style);
        self
    }

    /// Report the focusable capability.
    pub fn focusable(mut self) -> Self {
        self.caps.focusable = true;
        self
    }

    /// Mark every message as handled.
    pub fn consuming(mut self) -> Self {
        self.consuming = true;
        self
    }

    /// Shared cell holding the outer bounds of the most recent layout.
    pub fn layout_probe(&self) -> Rc<Cell<Option<Region>>> {
        Rc::clone(&self.last_layout)
    }

    /// Shared counter: +1 per mount, -1 per unmount.
    pub fn mount_counter(&self) -> Rc<Cell<i32>> {
        Rc::clone(&self.mounted)
    }

    /// Shared count of messages delivered to this probe.
    pub fn message_counter(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.messages)
    }

    /// Shared focused flag reported through `style_state`.
    pub fn focus_handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.focused)
    }

    pub fn base(&self) -> &Base {
        &self.base
    }
}

impl Widget for Probe {
    fn style_type(&self) -> &str {
        &self.type_name
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn style_id(&self) -> Option<&str> {
        self.base.id()
    }

    fn style_classes(&self) -> &[String] {
        self.base.classes()
    }

    fn style_state(&self) -> WidgetState {
        WidgetState { focused: self.focused.get(), ..self.base.state() }
    }

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.base.apply_style(style);
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let intrinsic = self.intrinsic;
        self.base.measure_with_style(constraints, |_| intrinsic)
    }

    fn layout(&mut self, bounds: Region) {
        self.base.layout(bounds);
        self.last_layout.set(Some(bounds));

        let content = self.base.content_bounds();
        let mut y = content.y;
        for child in &mut self.children {
            let remaining = (content.bottom() - y).max(0);
            let size = child.measure(Constraints::new(0, content.width, 0, remaining));
            child.layout(Region::new(content.x, y, size.width, size.height));
            y += size.height;
        }
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        self.base.render_chrome(ctx);
        if let Some(text) = &self.text {
            let content = self.base.content_bounds();
            if !content.is_empty() {
                let visible: String = text.chars().take(content.width as usize).collect();
                ctx.set_string(content.x, content.y, &visible, &CellStyle::from_style(self.base.style()));
            }
        }
        for child in &self.children {
            ctx.render_child(child.as_ref());
        }
    }

    /// Children see the message first, in order, until one handles it.
    fn handle_message(&mut self, message: &Message) -> HandleResult {
        let mut result = HandleResult::unhandled();
        for child in &mut self.children {
            result = result.merge(child.handle_message(message));
            if result.handled {
                return result;
            }
        }
        self.messages.set(self.messages.get() + 1);
        if self.consuming {
            result.handled = true;
        }
        result
    }

    fn bounds(&self) -> Region {
        self.base.bounds()
    }

    fn children(&self) -> Vec<&dyn Widget> {
        self.children.iter().map(|c| c.as_ref() as &dyn Widget).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Widget> {
        self.children.iter_mut().map(|c| c.as_mut() as &mut dyn Widget).collect()
    }

    fn mount(&mut self) {
        self.mounted.set(self.mounted.get() + 1);
    }

    fn unmount(&mut self) {
        self.mounted.set(self.mounted.get() - 1);
    }
}
