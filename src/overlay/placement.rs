//! Anchored placement of floating content.
//!
//! [`place`] is the pure geometric core of [`Popover`](super::Popover): given
//! an anchor rectangle, the container's content box and the child's measured
//! size, it returns the rectangle the child occupies.

use tracing::trace;

use crate::geometry::{Region, Size};

/// Where floating content goes relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Below the anchor, flipping above when below overflows and above fits.
    #[default]
    Auto,
    Above,
    Below,
}

/// Popover configuration. All dismissal paths are off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopoverOptions {
    pub placement: Placement,
    /// Cells between anchor and content. Never negative.
    pub gap: i32,
    /// Widen the content to at least the anchor's width.
    pub match_anchor_width: bool,
    /// Close on a pointer press outside the content.
    pub dismiss_on_outside: bool,
    /// Close on Escape.
    pub dismiss_on_escape: bool,
    /// Close when the pointer moves outside both the anchor and the content.
    pub dismiss_on_move_outside: bool,
}

impl PopoverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the gap; negative values clamp to zero.
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self
    }

    pub fn with_match_anchor_width(mut self, enabled: bool) -> Self {
        self.match_anchor_width = enabled;
        self
    }

    pub fn with_dismiss_on_outside(mut self, enabled: bool) -> Self {
        self.dismiss_on_outside = enabled;
        self
    }

    pub fn with_dismiss_on_escape(mut self, enabled: bool) -> Self {
        self.dismiss_on_escape = enabled;
        self
    }

    pub fn with_dismiss_on_move_outside(mut self, enabled: bool) -> Self {
        self.dismiss_on_move_outside = enabled;
        self
    }
}

/// Position content of `child_size` next to `anchor` inside `content`.
pub fn place(anchor: Region, content: Region, child_size: Size, options: &PopoverOptions) -> Region {
    let mut width = child_size.width;
    if options.match_anchor_width && width < anchor.width {
        width = anchor.width;
    }
    let width = width.min(content.width).max(0);
    let height = child_size.height.min(content.height).max(0);

    // Left edge first, then right; the left edge is not re-checked.
    let mut x = anchor.x.max(content.x);
    if x.saturating_add(width) > content.right() {
        x = content.right().saturating_sub(width);
    }

    let gap = options.gap.max(0);
    let y_below = anchor.bottom().saturating_add(gap);
    let y_above = anchor.y.saturating_sub(height).saturating_sub(gap);
    let bottom = content.bottom();

    let mut y = match options.placement {
        Placement::Below => y_below,
        Placement::Above => y_above,
        Placement::Auto if y_below.saturating_add(height) <= bottom => y_below,
        Placement::Auto if y_above >= content.y => y_above,
        Placement::Auto => bottom.saturating_sub(height),
    };
    y = y.max(content.y);
    if y.saturating_add(height) > bottom {
        y = bottom.saturating_sub(height);
    }

    let placed = Region::new(x, y, width, height);
    trace!(?anchor, ?content, ?placed, placement = ?options.placement, "placed overlay");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCREEN: Region = Region::new(0, 0, 40, 20);

    #[test]
    fn auto_prefers_below() {
        let options = PopoverOptions::new().with_match_anchor_width(true);
        let placed = place(Region::new(5, 2, 10, 1), SCREEN, Size::new(10, 3), &options);
        assert_eq!(placed, Region::new(5, 3, 10, 3));
    }

    #[test]
    fn auto_flips_above_when_below_overflows() {
        let container = Region::new(0, 0, 20, 20);
        let placed = place(Region::new(2, 18, 6, 1), container, Size::new(8, 3), &PopoverOptions::new());
        assert_eq!(placed, Region::new(2, 15, 8, 3));
    }

    #[test]
    fn auto_clamps_to_bottom_when_neither_side_fits() {
        let container = Region::new(0, 0, 20, 6);
        let placed = place(Region::new(0, 2, 4, 1), container, Size::new(4, 4), &PopoverOptions::new());
        // below: 3 + 4 > 6, above: 2 - 4 < 0
        assert_eq!(placed.y, 2);
        assert_eq!(placed.bottom(), 6);
    }

    #[test]
    fn gap_separates_anchor_and_content() {
        let options = PopoverOptions::new().with_gap(2);
        let below = place(Region::new(0, 2, 4, 1), SCREEN, Size::new(4, 2), &options);
        assert_eq!(below.y, 5);
        let above = place(Region::new(0, 10, 4, 1), SCREEN, Size::new(4, 2), &options.with_placement(Placement::Above));
        assert_eq!(above.y, 6);
    }

    #[test]
    fn negative_gap_clamps_to_zero() {
        assert_eq!(PopoverOptions::new().with_gap(-3).gap, 0);
        let raw = PopoverOptions { gap: -3, ..PopoverOptions::default() };
        assert_eq!(place(Region::new(0, 2, 4, 1), SCREEN, Size::new(4, 2), &raw).y, 3);
    }

    #[test]
    fn forced_placement_is_still_kept_inside() {
        let options = PopoverOptions::new().with_placement(Placement::Above);
        let placed = place(Region::new(0, 1, 4, 1), SCREEN, Size::new(4, 3), &options);
        assert_eq!(placed.y, 0);

        let options = PopoverOptions::new().with_placement(Placement::Below);
        let placed = place(Region::new(0, 19, 4, 1), SCREEN, Size::new(4, 3), &options);
        assert_eq!(placed.y, 17);
    }

    #[test]
    fn clamped_horizontally() {
        let placed = place(Region::new(35, 0, 2, 1), SCREEN, Size::new(10, 1), &PopoverOptions::new());
        assert_eq!(placed.x, 30);
        let placed = place(Region::new(-5, 0, 2, 1), Region::new(3, 0, 20, 5), Size::new(4, 1), &PopoverOptions::new());
        assert_eq!(placed.x, 3);
    }

    #[test]
    fn oversized_child_is_clamped_to_container() {
        let placed = place(Region::new(0, 0, 2, 1), Region::new(2, 2, 10, 5), Size::new(50, 50), &PopoverOptions::new());
        assert_eq!(placed, Region::new(2, 2, 10, 5));
    }

    #[test]
    fn match_anchor_width_never_exceeds_container() {
        let options = PopoverOptions::new().with_match_anchor_width(true);
        let placed = place(Region::new(0, 0, 60, 1), SCREEN, Size::new(5, 1), &options);
        assert_eq!(placed.width, 40);
    }

    #[test]
    fn extreme_gap_and_anchor_do_not_overflow() {
        let options = PopoverOptions::new().with_gap(i32::MAX).with_placement(Placement::Below);
        let placed = place(Region::new(i32::MAX - 2, i32::MAX - 2, 5, 5), SCREEN, Size::new(4, 2), &options);
        assert_eq!(placed, Region::new(36, 18, 4, 2));

        let above = place(Region::new(0, i32::MIN, 4, 1), SCREEN, Size::new(4, 2), &options.with_placement(Placement::Above));
        assert_eq!(above.y, 0);
    }

    #[test]
    fn container_wide_overlay_anchored_right_starts_at_left_edge() {
        // Width equals the container, so the right clamp pulls x back to the
        // container's left edge exactly; it never crosses it.
        let placed = place(Region::new(30, 0, 5, 1), SCREEN, Size::new(40, 2), &PopoverOptions::new());
        assert_eq!(placed.x, SCREEN.x);
        assert_eq!(placed.right(), SCREEN.right());
    }
}
