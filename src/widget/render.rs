//! Render surface abstraction.
//!
//! The core never owns a terminal buffer. Widgets draw through a
//! [`RenderContext`] wrapping any [`RenderBuffer`] implementation supplied by
//! the host (a real backend, or [`TextBuffer`](crate::testing::TextBuffer) in
//! tests).

use crossterm::style::Color;

use crate::geometry::Region;
use crate::style::styles::{BorderKind, Style};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for terminal cells, flattened from a cascaded [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub blink: bool,
    pub reverse: bool,
    pub strikethrough: bool,
}

impl CellStyle {
    /// Flatten a style: unset attributes become `false`.
    pub fn from_style(style: &Style) -> Self {
        CellStyle {
            fg: style.fg,
            bg: style.bg,
            bold: style.bold.unwrap_or(false),
            italic: style.italic.unwrap_or(false),
            underline: style.underline.unwrap_or(false),
            dim: style.dim.unwrap_or(false),
            blink: style.blink.unwrap_or(false),
            reverse: style.reverse.unwrap_or(false),
            strikethrough: style.strikethrough.unwrap_or(false),
        }
    }

    /// Style for border glyphs: the border color, when set, replaces the
    /// foreground.
    pub fn for_border(style: &Style) -> Self {
        let mut cell = Self::from_style(style);
        if let Some(color) = style.border.and_then(|b| b.color) {
            cell.fg = Some(color);
        }
        cell
    }
}

// ---------------------------------------------------------------------------
// RenderBuffer
// ---------------------------------------------------------------------------

/// A character-cell drawing surface. Implementations clip to their own
/// extent; callers may pass regions partly or fully outside it.
pub trait RenderBuffer {
    /// Fill every cell of `region` with `ch`.
    fn fill(&mut self, region: Region, ch: char, style: &CellStyle);

    /// Write `text` starting at `(x, y)`, one char per cell.
    fn set_string(&mut self, x: i32, y: i32, text: &str, style: &CellStyle);

    /// Draw a one-cell border along the edge of `region`.
    fn draw_box(&mut self, region: Region, kind: BorderKind, style: &CellStyle);
}

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

/// Per-frame drawing handle passed down the widget tree.
pub struct RenderContext<'a> {
    buffer: &'a mut dyn RenderBuffer,
}

impl<'a> RenderContext<'a> {
    pub fn new(buffer: &'a mut dyn RenderBuffer) -> Self {
        Self { buffer }
    }

    pub fn fill(&mut self, region: Region, ch: char, style: &CellStyle) {
        if !region.is_empty() {
            self.buffer.fill(region, ch, style);
        }
    }

    pub fn set_string(&mut self, x: i32, y: i32, text: &str, style: &CellStyle) {
        self.buffer.set_string(x, y, text, style);
    }

    /// Draw a border; invisible kinds and regions too small for two edges
    /// draw nothing.
    pub fn draw_box(&mut self, region: Region, kind: BorderKind, style: &CellStyle) {
        if kind.is_visible() && region.width >= 2 && region.height >= 2 {
            self.buffer.draw_box(region, kind, style);
        }
    }

    /// Render a child widget through this context.
    pub fn render_child(&mut self, child: &dyn Widget) {
        child.render(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::styles::BorderSpec;
    use crate::testing::TextBuffer;

    #[test]
    fn cell_style_flattens_unset_attributes() {
        let style = Style::new().fg(Color::Red).bold(true);
        let cell = CellStyle::from_style(&style);
        assert_eq!(cell.fg, Some(Color::Red));
        assert!(cell.bold);
        assert!(!cell.italic);
        assert_eq!(CellStyle::from_style(&Style::default()), CellStyle::default());
    }

    #[test]
    fn border_color_overrides_foreground() {
        let mut style = Style::new().fg(Color::White);
        style.border = Some(BorderSpec::new(BorderKind::Single).with_color(Color::Cyan));
        assert_eq!(CellStyle::for_border(&style).fg, Some(Color::Cyan));
        assert_eq!(CellStyle::for_border(&Style::new().fg(Color::White)).fg, Some(Color::White));
    }

    #[test]
    fn degenerate_boxes_are_skipped() {
        let mut buf = TextBuffer::new(4, 3);
        let mut ctx = RenderContext::new(&mut buf);
        ctx.draw_box(Region::new(0, 0, 1, 3), BorderKind::Single, &CellStyle::default());
        ctx.draw_box(Region::new(0, 0, 4, 3), BorderKind::None, &CellStyle::default());
        ctx.fill(Region::new(0, 0, 0, 3), '#', &CellStyle::default());
        assert_eq!(buf.to_string(), "\n\n");
    }
}
