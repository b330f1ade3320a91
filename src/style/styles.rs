//! The `Style` declaration with typed `Option<T>` fields.
//!
//! `None` means "not set": during the cascade a later rule only overrides the
//! fields it actually sets, and unset text attributes and colors may be
//! inherited from the parent's resolved style.

use crossterm::style::Color;

use crate::geometry::Spacing;

// ---------------------------------------------------------------------------
// SizeSpec
// ---------------------------------------------------------------------------

/// How a declared width or height is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMode {
    /// Use the content's natural size.
    #[default]
    Auto,
    /// Exactly `value` cells (clamped to the constraints).
    Fixed,
    /// `value` percent of the max constraint.
    Percent,
    /// Take the whole max constraint.
    Fill,
}

/// A declared size intent for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizeSpec {
    pub mode: SizeMode,
    pub value: i32,
}

impl SizeSpec {
    pub const fn auto() -> Self {
        Self { mode: SizeMode::Auto, value: 0 }
    }

    pub const fn fixed(cells: i32) -> Self {
        Self { mode: SizeMode::Fixed, value: cells }
    }

    pub const fn percent(percent: i32) -> Self {
        Self { mode: SizeMode::Percent, value: percent }
    }

    pub const fn fill() -> Self {
        Self { mode: SizeMode::Fill, value: 0 }
    }
}

// ---------------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------------

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Explicitly no border.
    None,
    Single,
    Double,
    Rounded,
}

/// Box-drawing glyphs for one border kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderKind {
    /// Glyph set for drawing, or `None` when nothing is drawn.
    pub const fn glyphs(self) -> Option<BorderGlyphs> {
        match self {
            BorderKind::None => None,
            BorderKind::Single => Some(BorderGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            }),
            BorderKind::Double => Some(BorderGlyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            }),
            BorderKind::Rounded => Some(BorderGlyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            }),
        }
    }

    /// Whether this kind occupies a cell on each side.
    pub const fn is_visible(self) -> bool {
        !matches!(self, BorderKind::None)
    }
}

/// A border declaration. `kind` and `color` cascade independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderSpec {
    pub kind: Option<BorderKind>,
    pub color: Option<Color>,
}

impl BorderSpec {
    pub const fn new(kind: BorderKind) -> Self {
        Self { kind: Some(kind), color: None }
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Thickness per side: 1 when a visible kind is set, 0 otherwise.
    pub fn thickness(&self) -> i32 {
        i32::from(self.kind.is_some_and(BorderKind::is_visible))
    }

    fn merge(&self, other: &BorderSpec) -> BorderSpec {
        BorderSpec {
            kind: other.kind.or(self.kind),
            color: other.color.or(self.color),
        }
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// A style declaration. Every field is optional; `Style::default()` sets nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    // Colors
    pub fg: Option<Color>,
    pub bg: Option<Color>,

    // Text attributes
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub dim: Option<bool>,
    pub blink: Option<bool>,
    pub reverse: Option<bool>,
    pub strikethrough: Option<bool>,

    // Box model
    pub padding: Option<Spacing>,
    pub margin: Option<Spacing>,
    pub width: Option<SizeSpec>,
    pub height: Option<SizeSpec>,
    pub border: Option<BorderSpec>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    pub fn dim(mut self, on: bool) -> Self {
        self.dim = Some(on);
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    pub fn blink(mut self, on: bool) -> Self {
        self.blink = Some(on);
        self
    }

    pub fn strikethrough(mut self, on: bool) -> Self {
        self.strikethrough = Some(on);
        self
    }

    pub fn padding(mut self, spacing: Spacing) -> Self {
        self.padding = Some(spacing);
        self
    }

    pub fn margin(mut self, spacing: Spacing) -> Self {
        self.margin = Some(spacing);
        self
    }

    pub fn width(mut self, spec: SizeSpec) -> Self {
        self.width = Some(spec);
        self
    }

    pub fn height(mut self, spec: SizeSpec) -> Self {
        self.height = Some(spec);
        self
    }

    pub fn border(mut self, kind: BorderKind) -> Self {
        let color = self.border.and_then(|b| b.color);
        self.border = Some(BorderSpec { kind: Some(kind), color });
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        let kind = self.border.and_then(|b| b.kind);
        self.border = Some(BorderSpec { kind, color: Some(color) });
        self
    }

    /// Merge `other` on top of `self`. For each field, if `other` has a value,
    /// use it; otherwise keep `self`'s. Border kind and color are merged
    /// separately so a rule setting only a border color keeps an earlier kind.
    pub fn merge(&self, other: &Style) -> Style {
        let border = match (self.border, other.border) {
            (Some(base), Some(top)) => Some(base.merge(&top)),
            (base, top) => top.or(base),
        };
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            dim: other.dim.or(self.dim),
            blink: other.blink.or(self.blink),
            reverse: other.reverse.or(self.reverse),
            strikethrough: other.strikethrough.or(self.strikethrough),
            padding: other.padding.or(self.padding),
            margin: other.margin.or(self.margin),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            border,
        }
    }

    /// Fill unset colors and text attributes from `parent`. Box-model fields
    /// are never inherited.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
            bold: self.bold.or(parent.bold),
            italic: self.italic.or(parent.italic),
            underline: self.underline.or(parent.underline),
            dim: self.dim.or(parent.dim),
            blink: self.blink.or(parent.blink),
            reverse: self.reverse.or(parent.reverse),
            strikethrough: self.strikethrough.or(parent.strikethrough),
            ..*self
        }
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Whether any field influencing measurement or placement is set.
    pub fn affects_layout(&self) -> bool {
        self.padding.is_some()
            || self.margin.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.border.is_some_and(|b| b.thickness() > 0)
    }
}

// ---------------------------------------------------------------------------
// ResolvedStyle
// ---------------------------------------------------------------------------

/// A node's resolved style, kept in two parts so that widget-local defaults
/// can sit between them: matching rules override local defaults, which in
/// turn override values inherited from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedStyle {
    /// The merged matching rules; `None` when no rule matched.
    pub cascaded: Option<Style>,
    /// Colors and text attributes inherited from the parent.
    pub inherited: Style,
}

impl ResolvedStyle {
    pub fn new(cascaded: Option<Style>, inherited: &Style) -> Self {
        Self { cascaded, inherited: Style::default().inherit(inherited) }
    }

    /// Nothing matched and nothing was inherited.
    pub fn is_unresolved(&self) -> bool {
        self.cascaded.is_none() && self.inherited.is_empty()
    }

    /// The cascade with unset inheritable fields filled from the parent, or
    /// `None` when unresolved.
    pub fn combined(&self) -> Option<Style> {
        match self.cascaded {
            Some(own) => Some(own.inherit(&self.inherited)),
            None => (!self.inherited.is_empty()).then_some(self.inherited),
        }
    }

    /// Layer `local` defaults between the cascade and the inherited values.
    pub fn over(&self, local: &Style) -> Style {
        let own = self.cascaded.map_or(*local, |cascaded| local.merge(&cascaded));
        own.inherit(&self.inherited)
    }
}

impl From<Style> for ResolvedStyle {
    fn from(style: Style) -> Self {
        Self { cascaded: Some(style), inherited: Style::default() }
    }
}
