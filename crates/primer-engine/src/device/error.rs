use std::fmt;

use super::{GlApi, ShaderStage};

/// Driver-side failure during a GPU resource lifecycle step.
///
/// Every variant is fatal: callers report it and terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// `glGetError` returned a non-zero code after `step`.
    Driver { step: &'static str, code: u32 },
    /// A shader stage failed to compile.
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link.
    Link { log: String },
    /// The driver handed back no object.
    Allocation { object: &'static str, message: String },
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::Driver { step, code } => {
                write!(f, "could not {step}: {} (0x{code:04x})", error_name(*code))
            }
            GlError::Compile { stage, log } => {
                write!(f, "{} shader failed to compile: {}", stage.label(), log.trim_end())
            }
            GlError::Link { log } => write!(f, "shader program failed to link: {}", log.trim_end()),
            GlError::Allocation { object, message } => {
                write!(f, "could not allocate {object}: {message}")
            }
        }
    }
}

impl std::error::Error for GlError {}

/// Symbolic name of a `glGetError` code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::CONTEXT_LOST => "GL_CONTEXT_LOST",
        _ => "unknown GL error",
    }
}

/// Consults the driver error query once, after `step` has been issued.
pub fn check_error<G: GlApi>(gl: &G, step: &'static str) -> Result<(), GlError> {
    match gl.get_error() {
        glow::NO_ERROR => Ok(()),
        code => Err(GlError::Driver { step, code }),
    }
}
