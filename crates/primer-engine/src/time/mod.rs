//! Time subsystem.
//!
//! Frame counting and the periodic FPS report, kept free of any runtime
//! coupling so they can be driven directly from tests:
//! - one `FrameCounter` per render loop, ticked once per presented frame
//! - one `FpsReporter` turning the counter into a title every period
//! - one `TimerSlot` holding the single pending timer callback

mod fps;
mod frame_counter;
mod timer;

pub use fps::{FpsReport, FpsReporter, TimerRequest, TimerTag};
pub use frame_counter::FrameCounter;
pub use timer::TimerSlot;
