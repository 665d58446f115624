//! Primer engine crate.
//!
//! Owns the window/context runtime, the frame loop, the FPS title reporter and
//! the GPU resources used by the chapter programs.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;

#[cfg(test)]
mod testing;
