//! Selector specificity as an ordered `(ids, classes, types)` triple.
//!
//! Fields are ordered so that the derived `Ord` (lexicographic) gives the
//! cascade order directly:
//! - More IDs beat fewer IDs
//! - More classes/pseudo-classes beat fewer
//! - More type selectors beat fewer
//!
//! Ties are not resolved here: the stylesheet breaks them by registration order.

use std::fmt;
use std::ops::Add;

/// Specificity of a selector, ordered from highest to lowest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity {
    /// Number of ID requirements (`#id`).
    pub ids: u16,
    /// Number of class + pseudo-class requirements (`.class`, `:hover`).
    pub classes: u16,
    /// Number of concrete type requirements (`Button`); wildcards count zero.
    pub types: u16,
}

impl Specificity {
    pub const fn new(ids: u16, classes: u16, types: u16) -> Self {
        Self { ids, classes, types }
    }
}

impl Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Specificity) -> Specificity {
        Specificity {
            ids: self.ids.saturating_add(rhs.ids),
            classes: self.classes.saturating_add(rhs.classes),
            types: self.types.saturating_add(rhs.types),
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.ids, self.classes, self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;
    use crate::style::selector::{PseudoClass, Selector, StyleNode};
    use crate::style::styles::Style;
    use crate::style::stylesheet::Stylesheet;
    use crossterm::style::Color;
    use proptest::prelude::*;

    #[test]
    fn test_specificity_default_is_zero() {
        let s = Specificity::default();
        assert_eq!(s, Specificity::new(0, 0, 0));
        assert_eq!(s.to_string(), "(0,0,0)");
    }

    #[test]
    fn test_id_beats_class() {
        let id_spec = Selector::for_id("main").specificity();
        let class_spec = Selector::universal().class("primary").specificity();
        assert!(id_spec > class_spec, "ID selector should beat class selector");
    }

    #[test]
    fn test_class_beats_type() {
        let class_spec = Selector::universal().class("primary").specificity();
        let type_spec = Selector::of_type("Button").specificity();
        assert!(class_spec > type_spec, "class selector should beat type selector");
    }

    #[test]
    fn test_pseudo_counts_as_class() {
        let hover = Selector::of_type("Button").pseudo(PseudoClass::Hover).specificity();
        let class = Selector::of_type("Button").class("x").specificity();
        assert_eq!(hover, class);
    }

    #[test]
    fn test_many_classes_never_beat_one_id() {
        let classes = Selector::of_type("Button")
            .classes(["a", "b", "c", "d", "e", "f"])
            .inside("Panel")
            .specificity();
        let id = Selector::for_id("x").specificity();
        assert!(id > classes);
    }

    #[test]
    fn test_add_accumulates_chain() {
        let a = Specificity::new(1, 2, 3);
        let b = Specificity::new(0, 1, 1);
        assert_eq!(a + b, Specificity::new(1, 3, 4));
        assert_eq!(
            Specificity::new(u16::MAX, 0, 0) + Specificity::new(1, 0, 0),
            Specificity::new(u16::MAX, 0, 0)
        );
    }

    #[test]
    fn test_class_count_saturates() {
        let sel = Selector::universal().classes(std::iter::repeat("x").take(70_000));
        assert_eq!(sel.specificity().classes, u16::MAX);
    }

    /// A selector that matches the `Button#target.c0..c4` node built below,
    /// which sits under three `Panel` ancestors.
    fn matching_selector() -> impl Strategy<Value = Selector> {
        (any::<bool>(), any::<bool>(), prop::collection::vec(0usize..5, 0..5), 0usize..4).prop_map(
            |(with_id, typed, classes, depth)| {
                let mut sel = if typed { Selector::of_type("Button") } else { Selector::universal() };
                if with_id {
                    sel = sel.id("target");
                }
                for i in classes {
                    sel = sel.class(&format!("c{i}"));
                }
                for _ in 0..depth {
                    sel = sel.inside("Panel");
                }
                sel
            },
        )
    }

    fn winner(sheet: &Stylesheet) -> Option<Color> {
        let node = (0..5).fold(NodeData::new("Button").with_id("target"), |n, i| n.with_class(format!("c{i}")));
        let panel = NodeData::new("Panel");
        let ancestors: [&dyn StyleNode; 3] = [&panel, &panel, &panel];
        sheet.resolve(&node, &ancestors).and_then(|s| s.fg)
    }

    proptest! {
        #[test]
        fn more_specific_rule_wins_in_either_registration_order(
            a in matching_selector(),
            b in matching_selector(),
        ) {
            let (red, blue) = (Style::new().fg(Color::Red), Style::new().fg(Color::Blue));
            let a_then_b = Stylesheet::new().with_rule(a.clone(), red).with_rule(b.clone(), blue);
            let b_then_a = Stylesheet::new().with_rule(b.clone(), blue).with_rule(a.clone(), red);

            match a.specificity().cmp(&b.specificity()) {
                std::cmp::Ordering::Greater => {
                    prop_assert_eq!(winner(&a_then_b), Some(Color::Red));
                    prop_assert_eq!(winner(&b_then_a), Some(Color::Red));
                }
                std::cmp::Ordering::Less => {
                    prop_assert_eq!(winner(&a_then_b), Some(Color::Blue));
                    prop_assert_eq!(winner(&b_then_a), Some(Color::Blue));
                }
                std::cmp::Ordering::Equal => {
                    prop_assert_eq!(winner(&a_then_b), Some(Color::Blue));
                    prop_assert_eq!(winner(&b_then_a), Some(Color::Red));
                }
            }
        }

        #[test]
        fn ordering_is_lexicographic(
            a in (0u16..4, 0u16..8, 0u16..4),
            b in (0u16..4, 0u16..8, 0u16..4),
        ) {
            let sa = Specificity::new(a.0, a.1, a.2);
            let sb = Specificity::new(b.0, b.1, b.2);
            prop_assert_eq!(sa.cmp(&sb), a.cmp(&b));
        }

        #[test]
        fn generated_selectors_order_by_ids_then_classes_then_types(
            ids in 0usize..2,
            classes in 0usize..5,
            typed in any::<bool>(),
            depth in 0usize..3,
        ) {
            let mut sel = if typed { Selector::of_type("Button") } else { Selector::universal() };
            if ids == 1 {
                sel = sel.id("target");
            }
            for i in 0..classes {
                sel = sel.class(&format!("c{i}"));
            }
            for _ in 0..depth {
                sel = sel.inside("Panel");
            }
            let spec = sel.specificity();
            prop_assert_eq!(spec.ids as usize, ids);
            prop_assert_eq!(spec.classes as usize, classes);
            prop_assert_eq!(spec.types as usize, usize::from(typed) + depth);

            // One more class always outranks, whatever the type count.
            let stronger = sel.clone().class("extra").specificity();
            prop_assert!(stronger > spec);
        }
    }
}
