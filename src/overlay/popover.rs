//! Popover: a child widget floated next to an anchor rectangle.
//!
//! A popover is meant to be pushed as its own screen layer covering the
//! viewport. It measures to whatever it is offered, places its child with
//! [`place`] inside its content box, and closes itself on the configured
//! dismissal input.

use std::fmt;

use tracing::debug;

use crate::event::input::Key;
use crate::event::message::{Command, HandleResult, Message};
use crate::geometry::{Region, Size};
use crate::layout::constraints::Constraints;
use crate::overlay::placement::{place, PopoverOptions};
use crate::style::selector::WidgetState;
use crate::style::styles::ResolvedStyle;
use crate::widget::base::Base;
use crate::widget::render::RenderContext;
use crate::widget::traits::{Capabilities, Widget};

pub struct Popover {
    base: Base,
    child: Option<Box<dyn Widget>>,
    anchor: Region,
    options: PopoverOptions,
    /// Where the child was placed by the last layout; used for hit tests.
    child_bounds: Region,
    on_close: Option<Box<dyn FnMut()>>,
    closed: bool,
}

impl fmt::Debug for Popover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Popover")
            .field("child", &self.child.as_ref().map(|c| c.style_type().to_owned()))
            .field("anchor", &self.anchor)
            .field("options", &self.options)
            .field("child_bounds", &self.child_bounds)
            .field("closed", &self.closed)
            .finish()
    }
}

impl Popover {
    /// A popover showing `child` next to `anchor`, with default options.
    pub fn new(anchor: Region, child: Box<dyn Widget>) -> Self {
        Self::build(anchor, Some(child))
    }

    /// A popover with nothing to show. It still closes normally.
    pub fn empty(anchor: Region) -> Self {
        Self::build(anchor, None)
    }

    fn build(anchor: Region, child: Option<Box<dyn Widget>>) -> Self {
        Self {
            base: Base::new(),
            child,
            anchor,
            options: PopoverOptions::default(),
            child_bounds: Region::EMPTY,
            on_close: None,
            closed: false,
        }
    }

    pub fn with_options(mut self, options: PopoverOptions) -> Self {
        self.options = options.with_gap(options.gap);
        self
    }

    /// Register the callback run by [`Popover::close`]. It runs at most once.
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    pub fn anchor(&self) -> Region {
        self.anchor
    }

    /// Move the anchor. Takes effect at the next layout.
    pub fn set_anchor(&mut self, anchor: Region) {
        self.anchor = anchor;
    }

    pub fn options(&self) -> &PopoverOptions {
        &self.options
    }

    /// The child's rectangle from the last layout; empty before the first.
    pub fn child_bounds(&self) -> Region {
        self.child_bounds
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the popover, running the close callback the first time only.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        debug!(anchor = ?self.anchor, "popover closed");
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    fn dismiss(&mut self) -> HandleResult {
        self.close();
        HandleResult::with_command(Command::PopOverlay)
    }

    fn wants_dismissal(&self, message: &Message) -> bool {
        match message {
            Message::Mouse(mouse) => {
                let (x, y) = mouse.position();
                let in_child = self.child_bounds.contains(x, y);
                (self.options.dismiss_on_outside && mouse.is_press() && !in_child)
                    || (self.options.dismiss_on_move_outside
                        && mouse.is_motion()
                        && !in_child
                        && !self.anchor.contains(x, y))
            }
            Message::Key(_) => self.options.dismiss_on_escape && message.is_key(Key::Escape),
            _ => false,
        }
    }
}

impl Widget for Popover {
    fn style_type(&self) -> &str {
        "Popover"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::CONTAINER
    }

    fn style_id(&self) -> Option<&str> {
        self.base.id()
    }

    fn style_classes(&self) -> &[String] {
        self.base.classes()
    }

    fn style_state(&self) -> WidgetState {
        self.base.state()
    }

    fn apply_style(&mut self, style: &ResolvedStyle) {
        self.base.apply_style(style);
    }

    /// Take all the space offered.
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.max_size()
    }

    fn layout(&mut self, bounds: Region) {
        self.base.layout(bounds);
        let content = self.base.content_bounds();
        let Some(child) = self.child.as_mut() else {
            self.child_bounds = Region::EMPTY;
            return;
        };
        if content.is_empty() {
            self.child_bounds = Region::EMPTY;
            return;
        }
        let child_size = child.measure(Constraints::new(0, content.width, 0, content.height));
        self.child_bounds = place(self.anchor, content, child_size, &self.options);
        child.layout(self.child_bounds);
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        self.base.render_chrome(ctx);
        if let Some(child) = &self.child {
            ctx.render_child(child.as_ref());
        }
    }

    fn handle_message(&mut self, message: &Message) -> HandleResult {
        if let Some(child) = self.child.as_mut() {
            let result = child.handle_message(message);
            if result.handled {
                return result;
            }
        }
        if self.wants_dismissal(message) {
            return self.dismiss();
        }
        HandleResult::unhandled()
    }

    fn bounds(&self) -> Region {
        self.base.bounds()
    }

    fn children(&self) -> Vec<&dyn Widget> {
        self.child.iter().map(|c| c.as_ref() as &dyn Widget).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Widget> {
        self.child.iter_mut().map(|c| c.as_mut() as &mut dyn Widget).collect()
    }

    fn unmount(&mut self) {
        self.close();
    }
}
