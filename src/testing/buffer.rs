//! In-memory render buffer for tests and snapshots.
//!
//! [`TextBuffer`] is a `width` x `height` grid of styled cells implementing
//! [`RenderBuffer`]. Its `Display` output has one line per row with trailing
//! spaces trimmed and rows joined by `'\n'`, ready for inline snapshots.

use std::fmt;

use crate::geometry::Region;
use crate::style::styles::BorderKind;
use crate::widget::render::{CellStyle, RenderBuffer};

/// A single buffer cell: one character with associated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', style: CellStyle::default() }
    }
}

/// A grid of cells. Writes outside the grid are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl TextBuffer {
    /// A blank buffer. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self { width, height, cells: vec![Cell::default(); area(width, height)] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height).then(|| area(self.width, y) + x as usize)
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    fn put(&mut self, x: i32, y: i32, ch: char, style: &CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style: *style };
        }
    }

    /// Row `y` as text with trailing spaces trimmed.
    pub fn row(&self, y: i32) -> String {
        if y < 0 || y >= self.height {
            return String::new();
        }
        let start = area(self.width, y);
        let row: String = self.cells[start..start + self.width as usize].iter().map(|c| c.ch).collect();
        row.trim_end().to_owned()
    }

    /// Reset every cell to a blank space.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

impl RenderBuffer for TextBuffer {
    fn fill(&mut self, region: Region, ch: char, style: &CellStyle) {
        let clipped = region.intersection(Region::new(0, 0, self.width, self.height));
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.put(x, y, ch, style);
            }
        }
    }

    fn set_string(&mut self, x: i32, y: i32, text: &str, style: &CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, style);
        }
    }

    fn draw_box(&mut self, region: Region, kind: BorderKind, style: &CellStyle) {
        let Some(g) = kind.glyphs() else {
            return;
        };
        if region.width < 2 || region.height < 2 {
            return;
        }
        let (left, top) = (region.x, region.y);
        let (right, bottom) = (region.right() - 1, region.bottom() - 1);
        for x in left + 1..right {
            self.put(x, top, g.horizontal, style);
            self.put(x, bottom, g.horizontal, style);
        }
        for y in top + 1..bottom {
            self.put(left, y, g.vertical, style);
            self.put(right, y, g.vertical, style);
        }
        self.put(left, top, g.top_left, style);
        self.put(right, top, g.top_right, style);
        self.put(left, bottom, g.bottom_left, style);
        self.put(right, bottom, g.bottom_right, style);
    }
}

/// `width * height` cells, computed in `usize`. Negative sides count as zero.
fn area(width: i32, height: i32) -> usize {
    (width.max(0) as usize).saturating_mul(height.max(0) as usize)
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&self.row(y))?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
