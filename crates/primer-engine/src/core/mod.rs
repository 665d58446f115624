//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the chapter
//! programs: the handler trait, the presenter capabilities the frame loop
//! needs, the lifecycle state machine and the owned per-window session state.

mod app;
mod frame_loop;
mod lifecycle;
mod present;
mod session;

pub use app::{App, Blank};
pub use frame_loop::{FrameLoop, RedrawMode};
pub use lifecycle::{Lifecycle, LifecycleError};
pub use present::Presenter;
pub use session::Session;
