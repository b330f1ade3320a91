//! Box-model layout: constraints in, sizes out.
//!
//! Parents measure children with [`Constraints`], then place them with a
//! concrete [`Region`](crate::geometry::Region). The [`BoxModel`] turns a
//! resolved style into insets and size intents.

pub mod box_model;
pub mod constraints;

pub use box_model::{resolve_styled_size, BoxMetrics, BoxModel};
pub use constraints::{Constraints, UNBOUNDED};
