//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the GL window, and forwards provider events
//! (resize, display, idle, timer, close) to a `core::Session`.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
