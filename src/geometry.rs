//! Core geometry types: Size, Region, Spacing.
//!
//! Everything is measured in terminal cells. [`Region`] is the rectangle type
//! used for bounds, anchors and overlay placement; [`Spacing`] carries the
//! four-sided margin and padding values of the box model.

use std::ops::Add;

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the horizontal and vertical extent of `spacing`.
    #[inline]
    pub const fn expand(self, spacing: Spacing) -> Size {
        Size {
            width: self.width.saturating_add(spacing.width()),
            height: self.height.saturating_add(spacing.height()),
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular region in terminal cells defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A region of the given size anchored at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self { x: 0, y: 0, width: size.width, height: size.height }
    }

    /// The right edge (exclusive): `x + width`, saturating at the i32 range.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The bottom edge (exclusive): `y + height`, saturating at the i32 range.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the region covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point (x, y) lies inside this region.
    ///
    /// Empty regions contain no points.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` is entirely contained within this region.
    #[inline]
    pub const fn contains_region(self, other: Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection of two regions.
    ///
    /// Returns [`Region::EMPTY`] if the regions do not overlap.
    pub fn intersection(self, other: Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            Region::EMPTY
        } else {
            Region::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
        }
    }

    /// Contract the region inward by the given [`Spacing`].
    ///
    /// Width and height are clamped to zero to avoid negative dimensions.
    /// All arithmetic saturates.
    #[inline]
    pub const fn shrink(self, spacing: Spacing) -> Region {
        let w = self.width.saturating_sub(spacing.left).saturating_sub(spacing.right);
        let h = self.height.saturating_sub(spacing.top).saturating_sub(spacing.bottom);
        Region {
            x: self.x.saturating_add(spacing.left),
            y: self.y.saturating_add(spacing.top),
            width: if w > 0 { w } else { 0 },
            height: if h > 0 { h } else { 0 },
        }
    }

    /// Expand the region outward by the given [`Spacing`].
    #[inline]
    pub const fn grow(self, spacing: Spacing) -> Region {
        Region {
            x: self.x.saturating_sub(spacing.left),
            y: self.y.saturating_sub(spacing.top),
            width: self.width.saturating_add(spacing.left).saturating_add(spacing.right),
            height: self.height.saturating_add(spacing.top).saturating_add(spacing.bottom),
        }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for margin and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0, right: 0, bottom: 0, left: 0 };

    /// Create spacing with explicit values for each side.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Symmetric spacing: `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Total horizontal extent: `left + right`, saturating.
    #[inline]
    pub const fn width(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical extent: `top + bottom`, saturating.
    #[inline]
    pub const fn height(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Replace every negative side with zero.
    #[inline]
    pub fn clamp_non_negative(self) -> Spacing {
        Spacing {
            top: self.top.max(0),
            right: self.right.max(0),
            bottom: self.bottom.max(0),
            left: self.left.max(0),
        }
    }
}

impl Add for Spacing {
    type Output = Spacing;
    #[inline]
    fn add(self, rhs: Spacing) -> Spacing {
        Spacing {
            top: self.top.saturating_add(rhs.top),
            right: self.right.saturating_add(rhs.right),
            bottom: self.bottom.saturating_add(rhs.bottom),
            left: self.left.saturating_add(rhs.left),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
