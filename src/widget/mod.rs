//! Widget vocabulary: the trait, capabilities, the shared `Base`, render
//! abstraction and the plugin registry.

pub mod base;
pub mod registry;
pub mod render;
pub mod traits;

pub use base::Base;
pub use registry::{RegistryError, WidgetPlugin, WidgetRegistry};
pub use render::{CellStyle, RenderBuffer, RenderContext};
pub use traits::{mount_tree, unmount_tree, walk_mut, Capabilities, Widget};
