//! Window-space geometry.
//!
//! Sizes are physical pixels, the unit the GL viewport and the surface work in.

mod viewport;

pub use viewport::Viewport;
