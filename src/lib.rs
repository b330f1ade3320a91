//! # weft-tui
//!
//! The styling, layout and overlay core of a terminal widget toolkit.
//!
//! weft-tui resolves selector-based styles over a widget tree, sizes widgets
//! through a box model with min/max constraints, and floats popovers and
//! tooltips next to an anchor without leaving the viewport. Terminal I/O and
//! concrete widgets live outside the crate; hosts plug them in through the
//! [`widget::Widget`] trait and the [`widget::RenderBuffer`] surface.
//!
//! ## Core Systems
//!
//! - **[`style`]**: Selectors, specificity, style values and the cascade
//! - **[`dom`]**: Slotmap tree snapshots, tree-aware style resolution, dumps
//! - **[`layout`]**: Constraints and the margin/border/padding box model
//! - **[`widget`]**: Widget trait, capabilities, shared `Base`, render surface, registry
//! - **[`event`]**: Messages converted from crossterm input, commands, results
//! - **[`overlay`]**: Anchored placement, `Popover` and `Tooltip`
//! - **[`screen`]**: Layer stack: style and layout pass, routing, rendering
//! - **[`geometry`]**: Size, Region, Spacing primitives
//! - **[`testing`]**: Text render buffer and a probe widget for tests

// Foundation
pub mod geometry;

// Core systems
pub mod dom;
pub mod layout;
pub mod style;

// Widget system
pub mod overlay;
pub mod widget;

// Events
pub mod event;

// Host side
pub mod screen;

// Test support
pub mod testing;

pub use geometry::{Region, Size, Spacing};
pub use screen::{Screen, ScreenConfig};
pub use style::{Selector, Style, Stylesheet};
pub use widget::Widget;
