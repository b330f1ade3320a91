//! Selector matching and style cascade.

pub mod selector;
pub mod specificity;
pub mod styles;
pub mod stylesheet;

pub use selector::{PseudoClass, Selector, StyleNode, WidgetState};
pub use specificity::Specificity;
pub use styles::{BorderGlyphs, BorderKind, BorderSpec, ResolvedStyle, SizeMode, SizeSpec, Style};
pub use stylesheet::{Rule, Stylesheet};
