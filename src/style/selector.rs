//! Selectors: type/id/class/pseudo-class patterns with a descendant chain.
//!
//! A [`Selector`] describes one compound pattern (`Button#save.primary:focus`)
//! plus an optional `parent` selector. The parent acts as a descendant
//! combinator: it must match *some* ancestor of the node, at any depth.
//!
//! Matching is a pure function over the read-only [`StyleNode`] view supplied
//! by the widget tree.

use std::fmt;

use crate::style::specificity::Specificity;

// ---------------------------------------------------------------------------
// WidgetState / PseudoClass
// ---------------------------------------------------------------------------

/// Pseudo-class state snapshot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidgetState {
    pub focused: bool,
    pub disabled: bool,
    pub hovered: bool,
    pub active: bool,
    pub first_child: bool,
    pub last_child: bool,
}

impl WidgetState {
    /// Whether `pseudo` holds for this state.
    pub fn has(&self, pseudo: PseudoClass) -> bool {
        match pseudo {
            PseudoClass::Focus => self.focused,
            PseudoClass::Disabled => self.disabled,
            PseudoClass::Hover => self.hovered,
            PseudoClass::Active => self.active,
            PseudoClass::FirstChild => self.first_child,
            PseudoClass::LastChild => self.last_child,
        }
    }
}

/// A widget pseudo-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    Focus,
    Disabled,
    Hover,
    Active,
    FirstChild,
    LastChild,
}

impl PseudoClass {
    /// The CSS spelling, without the leading colon.
    pub fn as_str(self) -> &'static str {
        match self {
            PseudoClass::Focus => "focus",
            PseudoClass::Disabled => "disabled",
            PseudoClass::Hover => "hover",
            PseudoClass::Active => "active",
            PseudoClass::FirstChild => "first-child",
            PseudoClass::LastChild => "last-child",
        }
    }
}

// ---------------------------------------------------------------------------
// StyleNode
// ---------------------------------------------------------------------------

/// Read-only style metadata of a node, as seen by the selector matcher.
pub trait StyleNode {
    /// Type tag matched by type selectors (e.g. `"Button"`).
    fn style_type(&self) -> &str;

    /// Optional ID matched by `#id` selectors.
    fn style_id(&self) -> Option<&str>;

    /// Class names. Order is irrelevant to matching.
    fn style_classes(&self) -> &[String];

    /// Pseudo-class state.
    fn style_state(&self) -> WidgetState;
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// The wildcard type name.
pub const UNIVERSAL: &str = "*";

/// A compound selector with an optional ancestor selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Type name; `"*"` or empty matches any type.
    pub type_name: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub pseudo: Vec<PseudoClass>,
    /// Descendant combinator: some ancestor must match this selector.
    pub parent: Option<Box<Selector>>,
}

impl Selector {
    /// Select nodes of the given widget type.
    pub fn of_type(type_name: &str) -> Self {
        Self {
            type_name: type_name.trim().to_owned(),
            ..Self::default()
        }
    }

    /// Select nodes of any type.
    pub fn universal() -> Self {
        Self::of_type(UNIVERSAL)
    }

    /// Select the node with the given ID, whatever its type.
    pub fn for_id(id: &str) -> Self {
        Self::universal().id(id)
    }

    /// Require an ID (builder). A blank ID clears the requirement.
    pub fn id(mut self, id: &str) -> Self {
        let id = id.trim();
        self.id = (!id.is_empty()).then(|| id.to_owned());
        self
    }

    /// Require a class (builder). Blank names are ignored.
    pub fn class(mut self, class: &str) -> Self {
        let name = class.trim();
        if !name.is_empty() {
            self.classes.push(name.to_owned());
        }
        self
    }

    /// Require several classes (builder).
    pub fn classes<'a>(self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        classes.into_iter().fold(self, Self::class)
    }

    /// Require a pseudo-class (builder).
    pub fn pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo.push(pseudo);
        self
    }

    /// Require an ancestor of the given type.
    ///
    /// Repeated calls extend the chain outward: `of_type("A").inside("B").inside("C")`
    /// matches an `A` somewhere under a `B` that is itself somewhere under a `C`.
    pub fn inside(self, parent_type: &str) -> Self {
        self.inside_selector(Selector::of_type(parent_type))
    }

    /// Require an ancestor matching `parent`, appended at the outer end of the chain.
    pub fn inside_selector(mut self, parent: Selector) -> Self {
        let outer = match self.parent.take() {
            Some(existing) => existing.inside_selector(parent),
            None => parent,
        };
        self.parent = Some(Box::new(outer));
        self
    }

    /// Whether the type part matches anything.
    pub fn is_wildcard_type(&self) -> bool {
        self.type_name.is_empty() || self.type_name == UNIVERSAL
    }

    /// Whether this selector matches `node`, given its ancestors ordered
    /// nearest first (parent, grandparent, ..., root).
    pub fn matches(&self, node: &dyn StyleNode, ancestors: &[&dyn StyleNode]) -> bool {
        if !self.matches_self(node) {
            return false;
        }
        let Some(parent) = &self.parent else {
            return true;
        };
        ancestors
            .iter()
            .enumerate()
            .any(|(i, ancestor)| parent.matches(*ancestor, &ancestors[i + 1..]))
    }

    /// Match the compound part only, ignoring the ancestor chain.
    pub fn matches_self(&self, node: &dyn StyleNode) -> bool {
        if !self.is_wildcard_type() && node.style_type() != self.type_name {
            return false;
        }
        if let Some(id) = &self.id {
            if node.style_id() != Some(id.as_str()) {
                return false;
            }
        }
        let node_classes = node.style_classes();
        if !self
            .classes
            .iter()
            .all(|class| node_classes.iter().any(|c| c == class))
        {
            return false;
        }
        let state = node.style_state();
        self.pseudo.iter().all(|&pseudo| state.has(pseudo))
    }

    /// Specificity of this selector including its ancestor chain.
    pub fn specificity(&self) -> Specificity {
        let own = Specificity {
            ids: u16::from(self.id.is_some()),
            classes: u16::try_from(self.classes.len() + self.pseudo.len()).unwrap_or(u16::MAX),
            types: u16::from(!self.is_wildcard_type()),
        };
        match &self.parent {
            Some(parent) => own + parent.specificity(),
            None => own,
        }
    }
}

impl fmt::Display for Selector {
    /// CSS-like rendering, outermost ancestor first: `Panel Button#save.primary:focus`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            write!(f, "{parent} ")?;
        }
        if self.is_wildcard_type() {
            f.write_str(UNIVERSAL)?;
        } else {
            f.write_str(&self.type_name)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for pseudo in &self.pseudo {
            write!(f, ":{}", pseudo.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        ty: &'static str,
        id: Option<&'static str>,
        classes: Vec<String>,
        state: WidgetState,
    }

    impl TestNode {
        fn new(ty: &'static str) -> Self {
            Self { ty, id: None, classes: Vec::new(), state: WidgetState::default() }
        }

        fn with_id(mut self, id: &'static str) -> Self {
            self.id = Some(id);
            self
        }

        fn with_class(mut self, class: &str) -> Self {
            self.classes.push(class.to_owned());
            self
        }

        fn with_state(mut self, state: WidgetState) -> Self {
            self.state = state;
            self
        }
    }

    impl StyleNode for TestNode {
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
    fn type_selector() {
        let button = TestNode::new("Button");
        assert!(Selector::of_type("Button").matches(&button, &[]));
        assert!(!Selector::of_type("Label").matches(&button, &[]));
    }

    #[test]
    fn wildcard_and_empty_type_match_anything() {
        let button = TestNode::new("Button");
        assert!(Selector::universal().matches(&button, &[]));
        assert!(Selector::of_type("").matches(&button, &[]));
        assert!(Selector::default().matches(&button, &[]));
    }

    #[test]
    fn id_selector() {
        let save = TestNode::new("Button").with_id("save");
        let cancel = TestNode::new("Button").with_id("cancel");
        let anonymous = TestNode::new("Button");
        let sel = Selector::for_id("save");
        assert!(sel.matches(&save, &[]));
        assert!(!sel.matches(&cancel, &[]));
        assert!(!sel.matches(&anonymous, &[]));
    }

    #[test]
    fn classes_are_a_subset_test() {
        let node = TestNode::new("Button").with_class("btn").with_class("primary");
        assert!(Selector::universal().class("primary").matches(&node, &[]));
        assert!(Selector::universal().classes(["primary", "btn"]).matches(&node, &[]));
        assert!(!Selector::universal().classes(["primary", "large"]).matches(&node, &[]));
    }

    #[test]
    fn blank_builder_inputs_are_ignored() {
        let sel = Selector::of_type("  Button ").class(" ").id("   ");
        assert_eq!(sel.type_name, "Button");
        assert!(sel.classes.is_empty());
        assert!(sel.id.is_none());
    }

    #[test]
    fn pseudo_classes_read_widget_state() {
        let focused = TestNode::new("Input").with_state(WidgetState { focused: true, ..Default::default() });
        let idle = TestNode::new("Input");
        let sel = Selector::of_type("Input").pseudo(PseudoClass::Focus);
        assert!(sel.matches(&focused, &[]));
        assert!(!sel.matches(&idle, &[]));

        let all = WidgetState {
            focused: true,
            disabled: true,
            hovered: true,
            active: true,
            first_child: true,
            last_child: true,
        };
        for pseudo in [
            PseudoClass::Focus,
            PseudoClass::Disabled,
            PseudoClass::Hover,
            PseudoClass::Active,
            PseudoClass::FirstChild,
            PseudoClass::LastChild,
        ] {
            assert!(all.has(pseudo), "{} should hold", pseudo.as_str());
            assert!(!WidgetState::default().has(pseudo));
        }
    }

    #[test]
    fn descendant_matches_any_depth() {
        let button = TestNode::new("Button");
        let row = TestNode::new("Row");
        let panel = TestNode::new("Panel");
        let screen = TestNode::new("Screen");
        let sel = Selector::of_type("Button").inside("Screen");

        // Button -> Row -> Panel -> Screen
        let chain: [&dyn StyleNode; 3] = [&row, &panel, &screen];
        assert!(sel.matches(&button, &chain));

        // Immediate parent only.
        let direct: [&dyn StyleNode; 1] = [&screen];
        assert!(sel.matches(&button, &direct));

        let no_screen: [&dyn StyleNode; 2] = [&row, &panel];
        assert!(!sel.matches(&button, &no_screen));
    }

    #[test]
    fn descendant_chain_respects_ancestor_order() {
        // Button inside Panel inside Screen: the Panel must sit below the Screen.
        let sel = Selector::of_type("Button").inside("Panel").inside("Screen");
        let button = TestNode::new("Button");
        let panel = TestNode::new("Panel");
        let screen = TestNode::new("Screen");

        let ordered: [&dyn StyleNode; 2] = [&panel, &screen];
        assert!(sel.matches(&button, &ordered));

        let inverted: [&dyn StyleNode; 2] = [&screen, &panel];
        assert!(!sel.matches(&button, &inverted));
    }

    #[test]
    fn self_mismatch_fails_regardless_of_ancestors() {
        let label = TestNode::new("Label");
        let panel = TestNode::new("Panel");
        let chain: [&dyn StyleNode; 1] = [&panel];
        assert!(!Selector::of_type("Button").inside("Panel").matches(&label, &chain));
    }

    #[test]
    fn inside_selector_with_classes() {
        let sel = Selector::of_type("Button").inside_selector(Selector::of_type("Panel").class("sidebar"));
        let button = TestNode::new("Button");
        let plain = TestNode::new("Panel");
        let sidebar = TestNode::new("Panel").with_class("sidebar");

        let hit: [&dyn StyleNode; 2] = [&plain, &sidebar];
        assert!(sel.matches(&button, &hit));
        let miss: [&dyn StyleNode; 1] = [&plain];
        assert!(!sel.matches(&button, &miss));
    }

    #[test]
    fn specificity_counts() {
        let sel = Selector::of_type("Button")
            .id("save")
            .class("primary")
            .pseudo(PseudoClass::Hover)
            .inside_selector(Selector::of_type("Panel").class("main"));
        assert_eq!(sel.specificity(), Specificity { ids: 1, classes: 3, types: 2 });
        assert_eq!(Selector::universal().specificity(), Specificity::default());
        assert_eq!(Selector::for_id("x").specificity(), Specificity { ids: 1, classes: 0, types: 0 });
    }

    #[test]
    fn display_renders_css_like_text() {
        let sel = Selector::of_type("Button")
            .id("save")
            .class("primary")
            .pseudo(PseudoClass::FirstChild)
            .inside("Panel");
        assert_eq!(sel.to_string(), "Panel Button#save.primary:first-child");
        assert_eq!(Selector::for_id("main").to_string(), "*#main");
    }
}
