//! Tree snapshots: a slotmap arena of widget descriptors, the tree-wide style
//! resolver, and a text dump.

pub mod dump;
pub mod node;
pub mod resolve;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use resolve::StyleResolver;
pub use tree::Dom;
