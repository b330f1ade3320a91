//! Min/max size constraints passed from parent to child during measurement.

use crate::geometry::{Size, Spacing};

/// Sentinel for "no upper bound".
pub const UNBOUNDED: i32 = i32::MAX;

/// Per-axis size limits. Every field is non-negative and `min <= max` on each
/// axis; all constructors and operations normalize to keep that true.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    /// Build normalized constraints: negatives become zero and each `max` is
    /// raised to its `min` when smaller.
    pub fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        let min_width = min_width.max(0);
        let min_height = min_height.max(0);
        Self {
            min_width,
            max_width: max_width.max(min_width),
            min_height,
            max_height: max_height.max(min_height),
        }
    }

    /// Exactly `size`.
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Anything from zero up to `size`.
    pub fn loose(size: Size) -> Self {
        Self::new(0, size.width, 0, size.height)
    }

    /// No limits at all.
    pub const fn unbounded() -> Self {
        Self { min_width: 0, max_width: UNBOUNDED, min_height: 0, max_height: UNBOUNDED }
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width != UNBOUNDED
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height != UNBOUNDED
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// The max size. Unbounded axes report [`UNBOUNDED`].
    pub fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Clamp `size` into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp(size.width, self.min_width, self.max_width),
            clamp(size.height, self.min_height, self.max_height),
        )
    }

    /// Remove `spacing` from both bounds on each axis. Results floor at zero
    /// and an unbounded max stays unbounded.
    pub fn shrink(&self, spacing: Spacing) -> Constraints {
        let dw = spacing.width().max(0);
        let dh = spacing.height().max(0);
        Constraints::new(
            (self.min_width - dw).max(0),
            shrink_max(self.max_width, dw),
            (self.min_height - dh).max(0),
            shrink_max(self.max_height, dh),
        )
    }
}

fn shrink_max(max: i32, by: i32) -> i32 {
    if max == UNBOUNDED {
        UNBOUNDED
    } else {
        (max - by).max(0)
    }
}

/// Clamp `value` into `[min, max]` without panicking when `min > max`
/// (`min` wins in that case).
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes() {
        let c = Constraints::new(-3, -1, 5, 2);
        assert_eq!(c, Constraints { min_width: 0, max_width: 0, min_height: 5, max_height: 5 });
    }

    #[test]
    fn tight_and_loose() {
        let tight = Constraints::tight(Size::new(10, 4));
        assert_eq!(tight.min_size(), Size::new(10, 4));
        assert_eq!(tight.max_size(), Size::new(10, 4));

        let loose = Constraints::loose(Size::new(10, 4));
        assert_eq!(loose.min_size(), Size::ZERO);
        assert_eq!(loose.max_size(), Size::new(10, 4));
    }

    #[test]
    fn constrain_clamps_both_axes() {
        let c = Constraints::new(2, 8, 1, 3);
        assert_eq!(c.constrain(Size::new(20, 0)), Size::new(8, 1));
        assert_eq!(c.constrain(Size::new(5, 2)), Size::new(5, 2));
    }

    #[test]
    fn shrink_floors_at_zero() {
        let c = Constraints::new(2, 4, 1, 3).shrink(Spacing::all(3));
        assert_eq!(c, Constraints::new(0, 0, 0, 0));
    }

    #[test]
    fn shrink_keeps_unbounded() {
        let c = Constraints::unbounded().shrink(Spacing::all(5));
        assert!(!c.has_bounded_width());
        assert!(!c.has_bounded_height());
        assert_eq!(c.min_size(), Size::ZERO);
    }

    #[test]
    fn shrink_ignores_negative_spacing() {
        let c = Constraints::loose(Size::new(10, 10)).shrink(Spacing::all(-2));
        assert_eq!(c.max_size(), Size::new(10, 10));
    }

    #[test]
    fn clamp_with_inverted_bounds_does_not_panic() {
        assert_eq!(clamp(5, 8, 2), 8);
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn constrain_stays_inside(
                min_w in -5i32..50, max_w in -5i32..50,
                min_h in -5i32..50, max_h in -5i32..50,
                w in -100i32..100, h in -100i32..100,
            ) {
                let c = Constraints::new(min_w, max_w, min_h, max_h);
                let size = c.constrain(Size::new(w, h));
                prop_assert!(size.width >= c.min_width && size.width <= c.max_width);
                prop_assert!(size.height >= c.min_height && size.height <= c.max_height);
            }

            #[test]
            fn shrink_keeps_min_below_max(
                min in 0i32..40, extra in 0i32..40, pad in 0i32..30,
            ) {
                let c = Constraints::new(min, min + extra, min, min + extra).shrink(Spacing::all(pad));
                prop_assert!(c.min_width >= 0 && c.min_width <= c.max_width);
                prop_assert!(c.min_height >= 0 && c.min_height <= c.max_height);
            }
        }
    }
}
