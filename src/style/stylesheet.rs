//! Stylesheet: ordered `(Selector, Style)` rules and cascade resolution.
//!
//! Each rule carries its registration order and a pre-computed
//! [`Specificity`]. Resolution filters matching rules, sorts them ascending by
//! `(specificity, order)` and merges field by field, so higher specificity
//! wins and, between equals, the later registration wins.

use tracing::trace;

use crate::style::selector::{Selector, StyleNode};
use crate::style::specificity::Specificity;
use crate::style::styles::Style;

/// A single rule with its pre-computed specificity.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub style: Style,
    /// Registration order; later rules win ties.
    pub order: usize,
    pub specificity: Specificity,
}

/// An ordered set of style rules.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. Registration order is the insertion index.
    pub fn add(&mut self, selector: Selector, style: Style) -> &mut Self {
        let specificity = selector.specificity();
        let order = self.rules.len();
        self.rules.push(Rule { selector, style, order, specificity });
        self
    }

    /// Builder form of [`Stylesheet::add`].
    pub fn with_rule(mut self, selector: Selector, style: Style) -> Self {
        self.add(selector, style);
        self
    }

    /// Concatenate several sheets. Rules of later sheets register after every
    /// rule of earlier sheets, so they win specificity ties.
    pub fn merged<'a>(sheets: impl IntoIterator<Item = &'a Stylesheet>) -> Stylesheet {
        let mut out = Stylesheet::new();
        for sheet in sheets {
            for rule in &sheet.rules {
                out.add(rule.selector.clone(), rule.style);
            }
        }
        out
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The matching rules in application order (lowest precedence first).
    pub fn matching_rules(&self, node: &dyn StyleNode, ancestors: &[&dyn StyleNode]) -> Vec<&Rule> {
        let mut matches: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.selector.matches(node, ancestors))
            .collect();
        matches.sort_by(|a, b| a.specificity.cmp(&b.specificity).then(a.order.cmp(&b.order)));
        matches
    }

    /// Cascade every matching rule into one style.
    ///
    /// Returns `None` when no rule matches, which is distinct from a matching
    /// rule that sets nothing (`Some(Style::default())`).
    pub fn resolve(&self, node: &dyn StyleNode, ancestors: &[&dyn StyleNode]) -> Option<Style> {
        let matches = self.matching_rules(node, ancestors);
        trace!(
            node_type = node.style_type(),
            matched = matches.len(),
            rules = self.rules.len(),
            "cascade"
        );
        if matches.is_empty() {
            return None;
        }
        Some(
            matches
                .iter()
                .fold(Style::default(), |acc, rule| acc.merge(&rule.style)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Spacing;
    use crate::style::selector::{PseudoClass, WidgetState};
    use crate::style::styles::{BorderKind, BorderSpec};
    use crossterm::style::Color;
    use pretty_assertions::assert_eq;

    struct Node {
        ty: &'static str,
        id: Option<&'static str>,
        classes: Vec<String>,
        state: WidgetState,
    }

    impl Node {
        fn new(ty: &'static str) -> Self {
            Self { ty, id: None, classes: Vec::new(), state: WidgetState::default() }
        }
    }

    impl StyleNode for Node {
        fn style_type(&self) -> &str {
            self.ty
        }
        fn style_id(&self) -> Option<&str> {
            self.id
        }
        fn style_classes(&self) -> &[String] {
            &self.classes
        }
        fn style_state(&self) -> WidgetState {
            self.state
        }
    }

    #[test]
    fn no_match_is_none() {
        let sheet = Stylesheet::new().with_rule(Selector::of_type("Label"), Style::new().bold(true));
        assert_eq!(sheet.resolve(&Node::new("Button"), &[]), None);
        assert_eq!(Stylesheet::new().resolve(&Node::new("Button"), &[]), None);
    }

    #[test]
    fn empty_matching_rule_is_some_default() {
        let sheet = Stylesheet::new().with_rule(Selector::of_type("Button"), Style::default());
        assert_eq!(sheet.resolve(&Node::new("Button"), &[]), Some(Style::default()));
    }

    #[test]
    fn higher_specificity_wins_regardless_of_order() {
        let mut node = Node::new("Button");
        node.id = Some("save");
        let sheet = Stylesheet::new()
            .with_rule(Selector::for_id("save"), Style::new().fg(Color::Red))
            .with_rule(Selector::of_type("Button"), Style::new().fg(Color::Blue));
        assert_eq!(sheet.resolve(&node, &[]).and_then(|s| s.fg), Some(Color::Red));
    }

    #[test]
    fn later_registration_wins_ties() {
        let sheet = Stylesheet::new()
            .with_rule(Selector::of_type("Button"), Style::new().fg(Color::Red))
            .with_rule(Selector::of_type("Button"), Style::new().fg(Color::Blue));
        assert_eq!(sheet.resolve(&Node::new("Button"), &[]).and_then(|s| s.fg), Some(Color::Blue));
    }

    #[test]
    fn fields_cascade_independently() {
        let mut node = Node::new("Button");
        node.classes.push("primary".into());
        let sheet = Stylesheet::new()
            .with_rule(
                Selector::of_type("Button"),
                Style::new().padding(Spacing::all(1)).fg(Color::White),
            )
            .with_rule(
                Selector::of_type("Button").class("primary"),
                Style::new().border(BorderKind::Single).fg(Color::Yellow),
            );
        let resolved = sheet.resolve(&node, &[]).unwrap_or_default();
        assert_eq!(resolved.padding, Some(Spacing::all(1)));
        assert_eq!(resolved.border, Some(BorderSpec::new(BorderKind::Single)));
        assert_eq!(resolved.fg, Some(Color::Yellow));
    }

    #[test]
    fn pseudo_rule_applies_only_in_state() {
        let sheet = Stylesheet::new()
            .with_rule(Selector::of_type("Input"), Style::new().bg(Color::Black))
            .with_rule(Selector::of_type("Input").pseudo(PseudoClass::Focus), Style::new().bg(Color::Blue));
        let mut node = Node::new("Input");
        assert_eq!(sheet.resolve(&node, &[]).and_then(|s| s.bg), Some(Color::Black));
        node.state.focused = true;
        assert_eq!(sheet.resolve(&node, &[]).and_then(|s| s.bg), Some(Color::Blue));
    }

    #[test]
    fn descendant_rule_uses_ancestors() {
        let sheet = Stylesheet::new()
            .with_rule(Selector::of_type("Button").inside("Dialog"), Style::new().bold(true));
        let button = Node::new("Button");
        let row = Node::new("Row");
        let dialog = Node::new("Dialog");
        let chain: [&dyn StyleNode; 2] = [&row, &dialog];
        assert_eq!(sheet.resolve(&button, &chain).and_then(|s| s.bold), Some(true));
        assert_eq!(sheet.resolve(&button, &chain[..1]), None);
    }

    #[test]
    fn matching_rules_are_in_application_order() {
        let mut node = Node::new("Button");
        node.id = Some("go");
        let sheet = Stylesheet::new()
            .with_rule(Selector::for_id("go"), Style::new())
            .with_rule(Selector::universal(), Style::new())
            .with_rule(Selector::of_type("Button"), Style::new())
            .with_rule(Selector::of_type("Label"), Style::new());
        let order: Vec<usize> = sheet.matching_rules(&node, &[]).iter().map(|r| r.order).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn merged_sheets_renumber_order() {
        let base = Stylesheet::new().with_rule(Selector::of_type("Button"), Style::new().fg(Color::Red));
        let user = Stylesheet::new().with_rule(Selector::of_type("Button"), Style::new().fg(Color::Green));
        let merged = Stylesheet::merged([&base, &user]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.rules()[1].order, 1);
        assert_eq!(merged.resolve(&Node::new("Button"), &[]).and_then(|s| s.fg), Some(Color::Green));

        let reversed = Stylesheet::merged([&user, &base]);
        assert_eq!(reversed.resolve(&Node::new("Button"), &[]).and_then(|s| s.fg), Some(Color::Red));
    }
}
