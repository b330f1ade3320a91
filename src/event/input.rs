//! Keyboard and mouse input types, converted from crossterm.
//!
//! Widgets match on these types rather than on crossterm's, so hosts can feed
//! synthetic input in tests. Conversion happens in the `From` impls below.

use std::ops::BitOr;

use crossterm::event as ct;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Any key crossterm reports that has no variant here.
    Unknown,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl From<ct::KeyModifiers> for Modifiers {
    fn from(m: ct::KeyModifiers) -> Self {
        [
            (ct::KeyModifiers::SHIFT, Modifiers::SHIFT),
            (ct::KeyModifiers::CONTROL, Modifiers::CTRL),
            (ct::KeyModifiers::ALT, Modifiers::ALT),
        ]
        .into_iter()
        .filter(|(flag, _)| m.contains(*flag))
        .fold(Modifiers::NONE, |acc, (_, ours)| acc | ours)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// Whether a key went down, auto-repeated or came up.
///
/// Terminals without keyboard enhancement only ever report presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyKind {
    #[default]
    Press,
    Repeat,
    Release,
}

impl From<ct::KeyEventKind> for KeyKind {
    fn from(kind: ct::KeyEventKind) -> Self {
        match kind {
            ct::KeyEventKind::Press => KeyKind::Press,
            ct::KeyEventKind::Repeat => KeyKind::Repeat,
            ct::KeyEventKind::Release => KeyKind::Release,
        }
    }
}

/// A key event with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
    pub kind: KeyKind,
}

impl KeyEvent {
    /// A press of `code` with `modifiers`.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers, kind: KeyKind::Press }
    }

    /// A key press without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    pub fn with_kind(mut self, kind: KeyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Only presses act as commands; repeats and releases do not.
    pub fn is_press(&self) -> bool {
        self.kind == KeyKind::Press
    }
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(ev: ct::KeyEvent) -> Self {
        let code = match ev.code {
            ct::KeyCode::Char(c) => Key::Char(c),
            ct::KeyCode::Enter => Key::Enter,
            ct::KeyCode::Esc => Key::Escape,
            ct::KeyCode::Tab => Key::Tab,
            ct::KeyCode::BackTab => Key::BackTab,
            ct::KeyCode::Backspace => Key::Backspace,
            ct::KeyCode::Delete => Key::Delete,
            ct::KeyCode::Left => Key::Left,
            ct::KeyCode::Right => Key::Right,
            ct::KeyCode::Up => Key::Up,
            ct::KeyCode::Down => Key::Down,
            ct::KeyCode::Home => Key::Home,
            ct::KeyCode::End => Key::End,
            ct::KeyCode::PageUp => Key::PageUp,
            ct::KeyCode::PageDown => Key::PageDown,
            ct::KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        };
        KeyEvent { code, modifiers: ev.modifiers.into(), kind: ev.kind.into() }
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<ct::MouseButton> for MouseButton {
    fn from(b: ct::MouseButton) -> Self {
        match b {
            ct::MouseButton::Left => MouseButton::Left,
            ct::MouseButton::Right => MouseButton::Right,
            ct::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Press(MouseButton),
    Release(MouseButton),
    Drag(MouseButton),
    Move,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

/// A pointer event at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(action: MouseAction, x: u16, y: u16) -> Self {
        Self { action, x, y, modifiers: Modifiers::NONE }
    }

    /// Any button press.
    pub fn is_press(&self) -> bool {
        matches!(self.action, MouseAction::Press(_))
    }

    /// Pointer motion, with or without a held button.
    pub fn is_motion(&self) -> bool {
        matches!(self.action, MouseAction::Move | MouseAction::Drag(_))
    }

    /// The position in the signed cell space used by regions.
    pub fn position(&self) -> (i32, i32) {
        (i32::from(self.x), i32::from(self.y))
    }
}

impl From<ct::MouseEvent> for MouseEvent {
    fn from(ev: ct::MouseEvent) -> Self {
        let action = match ev.kind {
            ct::MouseEventKind::Down(b) => MouseAction::Press(b.into()),
            ct::MouseEventKind::Up(b) => MouseAction::Release(b.into()),
            ct::MouseEventKind::Drag(b) => MouseAction::Drag(b.into()),
            ct::MouseEventKind::Moved => MouseAction::Move,
            ct::MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            ct::MouseEventKind::ScrollDown => MouseAction::ScrollDown,
            ct::MouseEventKind::ScrollLeft => MouseAction::ScrollLeft,
            ct::MouseEventKind::ScrollRight => MouseAction::ScrollRight,
        };
        MouseEvent { action, x: ev.column, y: ev.row, modifiers: ev.modifiers.into() }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn modifiers_from_crossterm() {
        let m = Modifiers::from(ct::KeyModifiers::CONTROL | ct::KeyModifiers::SHIFT);
        assert_eq!(m, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(Modifiers::from(ct::KeyModifiers::NONE), Modifiers::NONE);
    }

    #[test]
    fn key_from_crossterm() {
        let ke = KeyEvent::from(ct::KeyEvent::new(ct::KeyCode::Char('x'), ct::KeyModifiers::ALT));
        assert_eq!(ke, KeyEvent::new(Key::Char('x'), Modifiers::ALT));

        let esc = KeyEvent::from(ct::KeyEvent::new(ct::KeyCode::Esc, ct::KeyModifiers::NONE));
        assert_eq!(esc, KeyEvent::plain(Key::Escape));

        let f5 = KeyEvent::from(ct::KeyEvent::new(ct::KeyCode::F(5), ct::KeyModifiers::NONE));
        assert_eq!(f5.code, Key::F(5));
    }

    #[test]
    fn key_kind_from_crossterm() {
        let press = ct::KeyEvent::new_with_kind(ct::KeyCode::Esc, ct::KeyModifiers::NONE, ct::KeyEventKind::Press);
        assert!(KeyEvent::from(press).is_press());

        let release = ct::KeyEvent::new_with_kind(ct::KeyCode::Esc, ct::KeyModifiers::NONE, ct::KeyEventKind::Release);
        let release = KeyEvent::from(release);
        assert_eq!(release.kind, KeyKind::Release);
        assert!(!release.is_press());

        let repeat = ct::KeyEvent::new_with_kind(ct::KeyCode::Down, ct::KeyModifiers::NONE, ct::KeyEventKind::Repeat);
        assert_eq!(KeyEvent::from(repeat), KeyEvent::plain(Key::Down).with_kind(KeyKind::Repeat));
    }

    #[test]
    fn unsupported_keys_are_unknown_not_escape() {
        let ke = KeyEvent::from(ct::KeyEvent::new(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE));
        assert_eq!(ke.code, Key::Unknown);
    }

    #[test]
    fn mouse_from_crossterm() {
        let ev = ct::MouseEvent {
            kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: ct::KeyModifiers::NONE,
        };
        let me = MouseEvent::from(ev);
        assert_eq!(me, MouseEvent::new(MouseAction::Press(MouseButton::Left), 7, 3));
        assert!(me.is_press());
        assert!(!me.is_motion());
        assert_eq!(me.position(), (7, 3));
    }

    #[test]
    fn drag_counts_as_motion() {
        assert!(MouseEvent::new(MouseAction::Drag(MouseButton::Left), 0, 0).is_motion());
        assert!(MouseEvent::new(MouseAction::Move, 0, 0).is_motion());
        assert!(!MouseEvent::new(MouseAction::ScrollUp, 0, 0).is_motion());
    }
}
