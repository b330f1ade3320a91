//! Input messages, host commands and handling results.

pub mod input;
pub mod message;

pub use input::{Key, KeyEvent, KeyKind, Modifiers, MouseAction, MouseButton, MouseEvent};
pub use message::{Command, HandleResult, Message};
