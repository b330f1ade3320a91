//! Headless test support: an in-memory render buffer and a probe widget.
//!
//! Use [`TextBuffer`] as the [`RenderBuffer`](crate::widget::RenderBuffer)
//! when asserting rendered output, and [`Probe`] wherever a test needs a
//! widget with a known size and observable lifecycle.

pub mod buffer;
pub mod probe;

pub use buffer::TextBuffer;
pub use probe::Probe;
