//! OpenGL device + surface management.
//!
//! This module is responsible for:
//! - the `GlApi` driver surface used by the frame loop and resource code
//! - creating the window, GL display, context and window surface
//! - mapping driver error codes to `GlError`

mod api;
mod context;
mod error;
mod glow_api;
mod init;

pub use api::{GlApi, ShaderStage};
pub use context::GlWindow;
pub use error::{check_error, error_name, GlError};
pub use glow_api::GlowApi;
pub use init::GlInit;
