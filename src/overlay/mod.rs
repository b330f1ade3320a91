//! Floating content anchored to a rectangle: placement, popovers, tooltips.

pub mod placement;
pub mod popover;
pub mod tooltip;

pub use placement::{place, Placement, PopoverOptions};
pub use popover::Popover;
pub use tooltip::{Tooltip, TooltipOptions, TooltipTrigger};
