//! Tooltip: a wrapper that opens a popover anchored on its target.
//!
//! The tooltip lays its target out in its own content box and forwards every
//! message to it. Pointer input over the target, or keyboard focus entering
//! it, asks the host to push a non-modal [`Popover`] built from the content
//! factory. The popover's
//! `on_close` hook clears the open flag, so the tooltip can reopen after the
//! host pops the layer.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::event::input::MouseAction;
use crate::event::message::{Command, HandleResult, Message};
use crate::geometry::{Region, Size};
use crate::layout::constraints::Constraints;
use crate::overlay::placement::{Placement, PopoverOptions};
use crate::overlay::popover::Popover;
use crate::style::selector::WidgetState;
use crate::style::styles::ResolvedStyle;
use crate::widget::base::Base;
use crate::widget::render::RenderContext;
use crate::widget::traits::{Capabilities, Widget};

/// What opens a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TooltipTrigger {
    /// Pointer motion or a press over the target. Closes on motion outside
    /// both target and tooltip, or Escape.
    #[default]
    Hover,
    /// A press on the target toggles. Closes on a press outside, or Escape.
    Click,
    /// Opens when a focusable widget in the target takes focus and closes
    /// when focus leaves the target. Evaluated on [`Message::FocusChanged`].
    Focus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipOptions {
    pub trigger: TooltipTrigger,
    pub placement: Placement,
    pub gap: i32,
}

impl TooltipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger(mut self, trigger: TooltipTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self
    }
}

type ContentFactory = Box<dyn Fn() -> Box<dyn Widget>>;

pub struct Tooltip {
    base: Base,
    target: Box<dyn Widget>,
    content: ContentFactory,
    options: TooltipOptions,
    open: Rc<Cell<bool>>,
}

impl fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tooltip")
            .field("target", &self.target.style_type())
            .field("options", &self.options)
            .field("open", &self.open.get())
            .finish()
    }
}

impl Tooltip {
    /// Wrap `target`; each opening builds fresh content with `content`.
    pub fn new(target: Box<dyn Widget>, content: impl Fn() -> Box<dyn Widget> + 'static) -> Self {
        Self {
            base: Base::new(),
            target,
            content: Box::new(content),
            options: TooltipOptions::default(),
            open: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_options(mut self, options: TooltipOptions) -> Self {
        self.options = options.with_gap(options.gap);
        self
    }

    pub fn options(&self) -> &TooltipOptions {
        &self.options
    }

    /// Whether a popover pushed by this tooltip is still showing.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    /// The target's bounds when it reports them, else the tooltip's own.
    fn anchor(&self) -> Region {
        if self.target.capabilities().has_bounds {
            self.target.bounds()
        } else {
            self.base.bounds()
        }
    }

    fn open_popover(&mut self, dismiss_on_move_outside: bool) -> Option<Command> {
        if self.open.get() {
            return None;
        }
        let anchor = self.anchor();
        let options = PopoverOptions::new()
            .with_placement(self.options.placement)
            .with_gap(self.options.gap)
            .with_dismiss_on_escape(true)
            .with_dismiss_on_move_outside(dismiss_on_move_outside)
            .with_dismiss_on_outside(self.options.trigger == TooltipTrigger::Click);
        let open = Rc::clone(&self.open);
        let popover = Popover::new(anchor, (self.content)())
            .with_options(options)
            .on_close(move || open.set(false));
        self.open.set(true);
        debug!(?anchor, trigger = ?self.options.trigger, "tooltip opened");
        Some(Command::PushOverlay { widget: Box::new(popover), modal: false })
    }

    fn pointer_command(&mut self, action: MouseAction, inside: bool) -> Option<Command> {
        if !inside {
            return None;
        }
        match self.options.trigger {
            TooltipTrigger::Hover if matches!(action, MouseAction::Move | MouseAction::Press(_)) => {
                self.open_popover(true)
            }
            TooltipTrigger::Click if matches!(action, MouseAction::Press(_)) => {
                if self.open.get() {
                    Some(Command::PopOverlay)
                } else {
                    self.open_popover(false)
                }
            }
            _ => None,
        }
    }

    fn focus_command(&mut self) -> Option<Command> {
        if self.options.trigger != TooltipTrigger::Focus {
            return None;
        }
        let focused = holds_focus(self.target.as_ref());
        match (focused, self.open.get()) {
            (true, false) => self.open_popover(false),
            (false, true) => Some(Command::PopOverlay),
            _ => None,
        }
    }
}

/// Whether `widget` or a descendant is focusable and reports focus.
fn holds_focus(widget: &dyn Widget) -> bool {
    let caps = widget.capabilities();
    if caps.focusable && widget.style_state().focused {
        return true;
    }
    caps.child_bearing && widget.children().into_iter().any(holds_focus)
}

impl Widget for Tooltip {
    fn style_type(&self) -> &str {
        "Tooltip"
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

    fn measure(&self, constraints: Constraints) -> Size {
        self.base.measure_with_style(constraints, |inner| self.target.measure(inner))
    }

    fn layout(&mut self, bounds: Region) {
        self.base.layout(bounds);
        self.target.layout(self.base.content_bounds());
    }

    fn render(&self, ctx: &mut RenderContext<'_>) {
        self.base.render_chrome(ctx);
        ctx.render_child(self.target.as_ref());
    }

    /// The target sees every message first. Commands raised here leave the
    /// handled flag as the target reported it.
    fn handle_message(&mut self, message: &Message) -> HandleResult {
        let result = self.target.handle_message(message);
        let command = match message {
            Message::FocusChanged => self.focus_command(),
            Message::Mouse(mouse) => {
                let (x, y) = mouse.position();
                let inside = self.anchor().contains(x, y);
                self.pointer_command(mouse.action, inside)
            }
            _ => None,
        };
        match command {
            Some(command) => result.merge(HandleResult::unhandled().and_command(command)),
            None => result,
        }
    }

    fn bounds(&self) -> Region {
        self.base.bounds()
    }

    fn children(&self) -> Vec<&dyn Widget> {
        vec![self.target.as_ref() as &dyn Widget]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Widget> {
        vec![self.target.as_mut() as &mut dyn Widget]
    }
}
