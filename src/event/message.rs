//! Messages delivered to widgets, commands they send back to the host, and
//! the result type that carries those commands.

use std::fmt;

use crossterm::event as ct;

use crate::event::input::{Key, KeyEvent, MouseEvent};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// An input message routed through the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    /// The terminal window gained focus.
    FocusGained,
    /// The terminal window lost focus.
    FocusLost,
    /// Keyboard focus moved between widgets. The host sends this after
    /// updating the focused state its widgets report.
    FocusChanged,
    Paste(String),
}

impl Message {
    /// Whether this is a press of `key`, with or without modifiers. Repeats
    /// and releases never match.
    pub fn is_key(&self, key: Key) -> bool {
        matches!(self, Message::Key(ev) if ev.code == key && ev.is_press())
    }

    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Message::Mouse(ev) => Some(ev),
            _ => None,
        }
    }
}

impl From<ct::Event> for Message {
    fn from(ev: ct::Event) -> Self {
        match ev {
            ct::Event::Key(key) => Message::Key(key.into()),
            ct::Event::Mouse(mouse) => Message::Mouse(mouse.into()),
            ct::Event::Resize(width, height) => Message::Resize { width, height },
            ct::Event::FocusGained => Message::FocusGained,
            ct::Event::FocusLost => Message::FocusLost,
            ct::Event::Paste(text) => Message::Paste(text),
        }
    }
}

impl From<KeyEvent> for Message {
    fn from(ev: KeyEvent) -> Self {
        Message::Key(ev)
    }
}

impl From<MouseEvent> for Message {
    fn from(ev: MouseEvent) -> Self {
        Message::Mouse(ev)
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A request from a widget to the host.
pub enum Command {
    /// Push `widget` as a new top layer. A modal layer stops messages from
    /// reaching the layers below it.
    PushOverlay { widget: Box<dyn Widget>, modal: bool },
    /// Remove the top layer.
    PopOverlay,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PushOverlay { widget, modal } => f
                .debug_struct("PushOverlay")
                .field("widget", &widget.style_type())
                .field("modal", modal)
                .finish(),
            Command::PopOverlay => f.write_str("PopOverlay"),
        }
    }
}

impl Command {
    pub fn is_pop(&self) -> bool {
        matches!(self, Command::PopOverlay)
    }
}

// ---------------------------------------------------------------------------
// HandleResult
// ---------------------------------------------------------------------------

/// Outcome of delivering a message: whether it was consumed, plus commands.
#[derive(Debug, Default)]
pub struct HandleResult {
    pub handled: bool,
    pub commands: Vec<Command>,
}

impl HandleResult {
    pub fn unhandled() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self { handled: true, commands: Vec::new() }
    }

    /// A handled result carrying `command`.
    pub fn with_command(command: Command) -> Self {
        Self { handled: true, commands: vec![command] }
    }

    /// Append a command (builder).
    pub fn and_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Combine two results: handled if either was, commands in order.
    pub fn merge(mut self, other: HandleResult) -> Self {
        self.handled |= other.handled;
        self.commands.extend(other.commands);
        self
    }
}
